//! Implementation blocks for the database gateway types.

pub mod data_source_locator;
pub mod database_drivers;
pub mod database_gateway;
pub mod driver_error;
pub mod executed_statement;
pub mod gateway_cell;
pub mod prepared_statement;
pub mod query_failure_report;
pub mod query_params;
pub mod query_value;
pub mod result_row;
pub mod retry_policy;
pub mod sqlx_backend;
