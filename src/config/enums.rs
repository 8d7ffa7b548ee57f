//! Configuration enumerations.

/// Canonical names of the gateway configuration fields.
pub mod config_field;

/// Errors raised while loading or validating configuration.
pub mod configuration_error;
