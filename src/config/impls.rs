//! Implementation blocks for configuration types.

pub mod config_field;
pub mod configuration;
pub mod field_map;
pub mod gateway_config;
pub mod gateway_settings;
