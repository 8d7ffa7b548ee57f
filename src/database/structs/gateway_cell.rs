use std::sync::Arc;
use once_cell::sync::OnceCell;
use crate::config::structs::gateway_config::GatewayConfig;
use crate::database::structs::database_gateway::DatabaseGateway;
use crate::database::structs::retry_policy::RetryPolicy;
use crate::database::traits::database_backend::DatabaseBackend;

pub struct GatewayCell {
    pub(crate) config: OnceCell<GatewayConfig>,
    pub(crate) instance: OnceCell<Arc<DatabaseGateway>>,
    pub(crate) backend: Arc<dyn DatabaseBackend>,
    pub(crate) retry_policy: RetryPolicy,
}
