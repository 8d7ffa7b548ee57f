use std::sync::Arc;
use tokio::sync::Mutex;
use crate::config::structs::gateway_config::GatewayConfig;
use crate::database::structs::data_source_locator::DataSourceLocator;
use crate::database::structs::retry_policy::RetryPolicy;
use crate::database::traits::database_backend::DatabaseBackend;
use crate::database::traits::database_session::DatabaseSession;

pub struct DatabaseGateway {
    pub(crate) config: Arc<GatewayConfig>,
    pub(crate) locator: DataSourceLocator,
    pub(crate) backend: Arc<dyn DatabaseBackend>,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) state: Mutex<ConnectionState>,
}

#[derive(Default)]
pub(crate) struct ConnectionState {
    pub(crate) session: Option<Box<dyn DatabaseSession>>,
    pub(crate) generation: u64,
}
