use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GatewaySettings {
    /// Total tries for a query hitting a gone-away error, the first one included.
    pub max_attempts: u32,
    /// Seconds.
    pub connect_timeout: u64,
    /// Seconds.
    pub slow_statement_threshold: u64,
}
