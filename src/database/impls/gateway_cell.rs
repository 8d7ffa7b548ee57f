use std::collections::HashMap;
use std::sync::Arc;
use log::{error, warn};
use once_cell::sync::OnceCell;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::field_map::FieldMap;
use crate::config::structs::gateway_config::GatewayConfig;
use crate::database::errors::GatewayError;
use crate::database::structs::database_gateway::DatabaseGateway;
use crate::database::structs::gateway_cell::GatewayCell;
use crate::database::structs::retry_policy::RetryPolicy;
use crate::database::structs::sqlx_backend::SqlxBackend;
use crate::database::traits::database_backend::DatabaseBackend;

impl GatewayCell {
    pub fn new(backend: Arc<dyn DatabaseBackend>) -> GatewayCell {
        GatewayCell {
            config: OnceCell::new(),
            instance: OnceCell::new(),
            backend,
            retry_policy: RetryPolicy::default(),
        }
    }

    /// Cell whose gateway runs on the default `sqlx` backend.
    pub fn sqlx() -> GatewayCell {
        GatewayCell::new(Arc::new(SqlxBackend::default()))
    }

    pub fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> GatewayCell {
        self.retry_policy = retry_policy;
        self
    }

    /// Reads the configuration out of `source`, through `fields` when the caller's keys differ
    /// from the canonical names. First writer wins: a second call is rejected with
    /// `AlreadyConfigured` and the stored configuration is left untouched.
    pub fn set_configuration(&self, source: &HashMap<String, String>, fields: Option<&FieldMap>) -> Result<(), ConfigurationError> {
        let config = GatewayConfig::from_map(source, fields)?;
        self.set_config(config)
    }

    pub fn set_config(&self, config: GatewayConfig) -> Result<(), ConfigurationError> {
        config.validate()?;
        self.config.set(config).map_err(|_| {
            warn!("[DbGateway] Configuration already set, keeping the first one");
            ConfigurationError::AlreadyConfigured
        })
    }

    pub fn configuration(&self) -> Option<&GatewayConfig> {
        self.config.get()
    }

    pub fn is_configured(&self) -> bool {
        self.config.get().is_some()
    }

    /// The shared gateway, built on first call. Every later call returns the same `Arc`.
    pub fn instance(&self) -> Result<Arc<DatabaseGateway>, GatewayError> {
        let config = self.config.get().ok_or_else(|| {
            error!("[DbGateway] set_configuration() has to be run before the gateway is used");
            ConfigurationError::NotConfigured
        })?;

        self.instance
            .get_or_try_init(|| {
                DatabaseGateway::new(config.clone(), self.backend.clone())
                    .map(|gateway| Arc::new(gateway.with_retry_policy(self.retry_policy)))
            })
            .cloned()
    }
}
