use std::fmt;
use std::io;
use thiserror::Error;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::database::enums::error_class::ErrorClass;
use crate::database::helpers::classify_driver_error;

/// Broad origin of a driver failure, kept separate from the message so classification
/// does not depend on driver wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverErrorKind {
    /// The server answered with an error (SQLSTATE / vendor code in `DriverError::code`).
    Database,
    /// The socket underneath the session failed.
    Io(io::ErrorKind),
    /// The client side of the session is gone (worker crashed, handle closed).
    Closed,
    /// Anything else reported by the driver.
    Other,
}

/// Driver-neutral view of a database client failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverError {
    pub kind: DriverErrorKind,
    pub code: Option<String>,
    pub message: String,
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}] {}", code, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for DriverError {}

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("No value bound for placeholder :{0}")]
    MissingParameter(String),

    #[error("Parameter :{0} does not match any placeholder")]
    UnusedParameter(String),

    #[error("Statement was prepared on connection #{prepared}, gateway is on connection #{current}")]
    StaleStatement { prepared: u64, current: u64 },

    #[error("Driver error: {0}")]
    Driver(#[from] DriverError),
}

impl QueryError {
    /// Label written on the `Class:` line of a failure report.
    pub fn class_label(&self) -> &'static str {
        match self {
            QueryError::MissingParameter(_) | QueryError::UnusedParameter(_) => "Binding",
            QueryError::StaleStatement { .. } => "StaleStatement",
            QueryError::Driver(error) => match classify_driver_error(error) {
                ErrorClass::GoneAway => "GoneAway",
                ErrorClass::Fatal => "Fatal",
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Cannot connect database {locator}: {source}")]
    Connection {
        locator: String,
        #[source]
        source: DriverError,
    },

    #[error("SQL error: {source} (SQL: {sql})")]
    Query {
        sql: String,
        params: String,
        #[source]
        source: QueryError,
    },
}

impl GatewayError {
    pub fn query(sql: &str, params: String, source: impl Into<QueryError>) -> GatewayError {
        GatewayError::Query {
            sql: sql.to_string(),
            params,
            source: source.into(),
        }
    }

    /// The driver failure behind this error, if the driver produced one.
    pub fn driver_error(&self) -> Option<&DriverError> {
        match self {
            GatewayError::Connection { source, .. } => Some(source),
            GatewayError::Query { source: QueryError::Driver(source), .. } => Some(source),
            _ => None,
        }
    }
}
