use crate::database::errors::{DriverError, DriverErrorKind};

impl DriverError {
    pub fn new(kind: DriverErrorKind, code: Option<String>, message: impl Into<String>) -> DriverError {
        DriverError { kind, code, message: message.into() }
    }

    pub fn database(code: impl Into<String>, message: impl Into<String>) -> DriverError {
        DriverError::new(DriverErrorKind::Database, Some(code.into()), message)
    }

    pub fn other(message: impl Into<String>) -> DriverError {
        DriverError::new(DriverErrorKind::Other, None, message)
    }
}

impl From<sqlx::Error> for DriverError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::Database(db) => DriverError::new(
                DriverErrorKind::Database,
                db.code().map(|code| code.into_owned()),
                db.message(),
            ),
            sqlx::Error::Io(io) => DriverError::new(DriverErrorKind::Io(io.kind()), None, io.to_string()),
            sqlx::Error::WorkerCrashed | sqlx::Error::PoolClosed => {
                DriverError::new(DriverErrorKind::Closed, None, error.to_string())
            }
            other => DriverError::other(other.to_string()),
        }
    }
}
