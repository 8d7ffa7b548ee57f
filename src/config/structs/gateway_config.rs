use serde::{Deserialize, Serialize};
use crate::database::enums::database_drivers::DatabaseDrivers;

/// Connection settings. Port stays `None` when omitted; the driver default is applied
/// only when the data-source locator is built.
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    pub driver: Option<DatabaseDrivers>,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub database: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub encoding: Option<String>,
}
