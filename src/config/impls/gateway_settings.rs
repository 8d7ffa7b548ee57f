use std::time::Duration;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::gateway_settings::GatewaySettings;
use crate::database::structs::retry_policy::RetryPolicy;

impl Default for GatewaySettings {
    fn default() -> Self {
        GatewaySettings {
            max_attempts: RetryPolicy::default().max_attempts,
            connect_timeout: 10,
            slow_statement_threshold: 1,
        }
    }
}

impl GatewaySettings {
    pub fn retry_policy(&self) -> Result<RetryPolicy, ConfigurationError> {
        RetryPolicy::new(self.max_attempts)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout)
    }

    pub fn slow_statement_threshold(&self) -> Duration {
        Duration::from_secs(self.slow_statement_threshold)
    }
}
