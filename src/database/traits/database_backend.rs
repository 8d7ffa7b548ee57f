use async_trait::async_trait;
use crate::database::errors::DriverError;
use crate::database::structs::data_source_locator::DataSourceLocator;
use crate::database::traits::database_session::DatabaseSession;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DatabaseBackend: Send + Sync {
    async fn connect(&self, locator: &DataSourceLocator) -> Result<Box<dyn DatabaseSession>, DriverError>;
}
