use serde::{Deserialize, Serialize};
use crate::config::structs::gateway_config::GatewayConfig;
use crate::config::structs::gateway_settings::GatewaySettings;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    pub database: GatewayConfig,
    #[serde(default)]
    pub gateway: GatewaySettings,
}
