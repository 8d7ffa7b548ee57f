//! # db-gateway
//!
//! A single, lazily-opened database connection shared by every caller of a process.
//!
//! ## Overview
//!
//! The gateway is configured once from a plain string map (or a `config.toml`), opens its
//! session on first use, and keeps it for the lifetime of the process. Statements use named
//! `:placeholders` whatever the driver. When the server drops the session under a query,
//! the gateway reconnects and runs the query once more before reporting the failure.
//!
//! ## Features
//!
//! - **Drivers**: MySQL/MariaDB, PostgreSQL and SQLite through `sqlx`
//! - **Set-once configuration**: first writer wins, later attempts are rejected
//! - **Bounded retry**: gone-away failures get one reconnect, everything else is reported as-is
//! - **Failure reports**: SQL, parameters, class, message and backtrace written to the log
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use db_gateway::database::structs::gateway_cell::GatewayCell;
//! use db_gateway::database::structs::query_params::QueryParams;
//!
//! let cell = GatewayCell::sqlx();
//! cell.set_configuration(&settings, None)?;
//!
//! let gateway = cell.instance()?;
//! let rows = gateway
//!     .execute_query("SELECT name FROM users WHERE id = :id", &QueryParams::new().with("id", 7))
//!     .await?
//!     .into_rows();
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading, map-based configuration and validation
//! - [`database`] - The gateway, its `sqlx` backend and placeholder handling
//! - [`logging`] - Logger setup for the command-line tool
//! - [`structs`] - CLI argument parsing

/// Configuration management module.
///
/// Handles the `config.toml` file and the string-map configuration path, including
/// field renaming and validation of ports and encodings.
pub mod config;

/// Database gateway module.
///
/// Provides the lazily-connecting gateway, the set-once shared instance holder,
/// named placeholder rewriting and gone-away classification.
pub mod database;

/// Logging setup.
pub mod logging;

/// CLI argument parsing.
pub mod structs;
