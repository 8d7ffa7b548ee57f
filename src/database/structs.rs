//! Database gateway structures.

/// The gateway: configuration, one cached session, prepare/execute operations.
pub mod database_gateway;

/// Set-once configuration and shared-instance holder for a gateway.
pub mod gateway_cell;

/// Driver, host, port and database name used to open a session.
pub mod data_source_locator;

/// SQL rewritten from named to positional placeholders.
pub mod compiled_sql;

/// Prepared statement handle tied to a connection generation.
pub mod prepared_statement;

/// Named parameter set for a statement.
pub mod query_params;

/// A single bound or fetched value.
pub mod query_value;

/// A fetched row.
pub mod result_row;

/// Raw result of running SQL on a session.
pub mod query_outcome;

/// Result handed back to gateway callers.
pub mod executed_statement;

/// Bounded reconnect-and-retry policy.
pub mod retry_policy;

/// Diagnostic written to the log when a statement fails.
pub mod query_failure_report;

/// `sqlx` implementation of the backend and session traits.
pub mod sqlx_backend;
