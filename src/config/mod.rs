//! Configuration management module.
//!
//! Two ways in:
//! - `config.toml`, loaded by [`Configuration::load_from_file`](structs::configuration::Configuration),
//!   with a `[database]` section for the connection and a `[gateway]` section for retry and timeouts.
//! - A plain string map handed to [`GatewayConfig::from_map`](structs::gateway_config::GatewayConfig),
//!   optionally through a [`FieldMap`](structs::field_map::FieldMap) when the caller's keys differ
//!   from the canonical field names.
//!
//! # Example
//!
//! ```rust,ignore
//! use db_gateway::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations (field names, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving/validation.
pub mod impls;
