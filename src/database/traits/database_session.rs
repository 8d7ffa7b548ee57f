use async_trait::async_trait;
use crate::database::errors::DriverError;
use crate::database::structs::query_outcome::QueryOutcome;
use crate::database::structs::query_value::QueryValue;

/// A single server session. SQL handed to a session is already rewritten to the driver's
/// positional placeholder style and `values` are in placeholder order.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseSession: Send {
    async fn prepare(&mut self, sql: &str) -> Result<(), DriverError>;

    async fn execute(&mut self, sql: &str, values: &[QueryValue]) -> Result<QueryOutcome, DriverError>;

    async fn ping(&mut self) -> Result<(), DriverError>;

    async fn close(&mut self) -> Result<(), DriverError>;
}
