use crate::database::enums::database_drivers::DatabaseDrivers;

#[derive(Clone, PartialEq, Eq)]
pub struct DataSourceLocator {
    pub driver: DatabaseDrivers,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub database: String,
    pub username: Option<String>,
    pub password: Option<String>,
}
