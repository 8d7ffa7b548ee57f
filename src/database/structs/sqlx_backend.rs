use std::time::Duration;
use sqlx::AnyConnection;

#[derive(Debug, Clone)]
pub struct SqlxBackend {
    pub(crate) connect_timeout: Duration,
    pub(crate) slow_statement_threshold: Duration,
}

pub struct SqlxSession {
    pub(crate) conn: Option<AnyConnection>,
}
