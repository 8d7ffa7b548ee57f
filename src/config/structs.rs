//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file, except
//! `FieldMap` which only exists on the map-based configuration path.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Database connection settings (`[database]`).
pub mod gateway_config;

/// Gateway behaviour settings (`[gateway]`).
pub mod gateway_settings;

/// Source-key renaming table for map-based configuration.
pub mod field_map;
