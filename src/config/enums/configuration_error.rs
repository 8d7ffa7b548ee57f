use thiserror::Error;
use crate::config::enums::config_field::ConfigField;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("{0}")]
    ParseError(#[from] toml::de::Error),

    #[error("{0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Missing required field '{0}'")]
    MissingField(ConfigField),

    #[error("Unknown configuration field '{0}'")]
    UnknownField(String),

    #[error("Unknown database driver '{0}'")]
    UnknownDriver(String),

    #[error("Invalid port '{0}'")]
    InvalidPort(String),

    #[error("Invalid character encoding '{0}'")]
    InvalidEncoding(String),

    #[error("Invalid retry policy: max_attempts must be at least 1, got {0}")]
    InvalidRetryPolicy(u32),

    #[error("Unknown log level encountered: '{0}'")]
    UnknownLogLevel(String),

    #[error("Configuration was already set")]
    AlreadyConfigured,

    #[error("Configuration must be set before the gateway is used")]
    NotConfigured,

    #[error("Configuration file {0} was created, edit it and start again")]
    ConfigCreated(String),

    #[error("Failed to initialize logging: {0}")]
    LoggingError(#[from] log::SetLoggerError),
}
