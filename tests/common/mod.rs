#![allow(dead_code)]
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;
use db_gateway::config::structs::configuration::Configuration;
use db_gateway::config::structs::gateway_config::GatewayConfig;
use db_gateway::database::enums::database_drivers::DatabaseDrivers;
use db_gateway::database::structs::database_gateway::DatabaseGateway;

pub type TestGateway = Arc<DatabaseGateway>;

pub fn sqlite_config(database: &str) -> GatewayConfig {
    GatewayConfig {
        driver: Some(DatabaseDrivers::sqlite3),
        database: Some(database.to_string()),
        encoding: Some(String::from("UTF-8")),
        ..GatewayConfig::default()
    }
}

pub fn sqlite_settings(database: &str) -> HashMap<String, String> {
    HashMap::from([
        (String::from("driver"), String::from("sqlite3")),
        (String::from("database"), database.to_string()),
        (String::from("encoding"), String::from("UTF-8")),
    ])
}

pub fn create_test_config(database: &str) -> Configuration {
    let mut config = Configuration::init();
    config.database = sqlite_config(database);
    config
}

/// Gateway on a SQLite file inside `dir`, so the data survives reconnects.
pub fn create_file_gateway(dir: &TempDir) -> TestGateway {
    let path = dir.path().join("gateway.db");
    let config = create_test_config(&path.to_string_lossy());
    Arc::new(DatabaseGateway::with_settings(config.database, &config.gateway).unwrap())
}

pub fn create_memory_gateway() -> TestGateway {
    let config = create_test_config(":memory:");
    Arc::new(DatabaseGateway::with_settings(config.database, &config.gateway).unwrap())
}

pub async fn create_users_table(gateway: &DatabaseGateway) {
    gateway
        .execute_query(
            "CREATE TABLE users (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, score REAL, avatar BLOB)",
            &Default::default(),
        )
        .await
        .unwrap();
}
