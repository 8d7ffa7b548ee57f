use crate::config::enums::configuration_error::ConfigurationError;
use crate::database::structs::retry_policy::RetryPolicy;

impl Default for RetryPolicy {
    /// The first try plus one retry after a reconnect.
    fn default() -> Self {
        RetryPolicy { max_attempts: 2 }
    }
}

impl RetryPolicy {
    pub fn new(max_attempts: u32) -> Result<RetryPolicy, ConfigurationError> {
        if max_attempts == 0 {
            return Err(ConfigurationError::InvalidRetryPolicy(max_attempts));
        }
        Ok(RetryPolicy { max_attempts })
    }

    pub fn no_retry() -> RetryPolicy {
        RetryPolicy { max_attempts: 1 }
    }

    pub fn allows_retry_after(&self, attempt: u32) -> bool {
        attempt < self.max_attempts
    }
}
