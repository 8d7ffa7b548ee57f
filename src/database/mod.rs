//! Database gateway module.
//!
//! One lazily-opened session per [`DatabaseGateway`](structs::database_gateway::DatabaseGateway),
//! shared by every caller through a [`GatewayCell`](structs::gateway_cell::GatewayCell).
//!
//! - Named `:placeholders` are rewritten to the driver's positional markers before binding.
//! - A statement failing because the server dropped the session is retried once on a fresh
//!   connection; every other failure is logged with its SQL and parameters and returned.
//! - Drivers: MySQL/MariaDB, PostgreSQL and SQLite, all through `sqlx`.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::collections::HashMap;
//! use db_gateway::database::structs::gateway_cell::GatewayCell;
//! use db_gateway::database::structs::query_params::QueryParams;
//!
//! let cell = GatewayCell::sqlx();
//! cell.set_configuration(&settings, None)?;
//! let gateway = cell.instance()?;
//! let result = gateway.execute_query("SELECT * FROM users WHERE id = :id", &QueryParams::new().with("id", 7)).await?;
//! ```

/// Database enumerations (drivers, error classes).
pub mod enums;

/// Driver, query and gateway errors.
pub mod errors;

/// Placeholder rewriting, parameter binding and failure classification.
pub mod helpers;

/// Implementation blocks for the database types.
pub mod impls;

/// Database data structures.
pub mod structs;

/// Backend and session traits.
pub mod traits;
