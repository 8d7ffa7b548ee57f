mod common;

use std::fs;
use tempfile::TempDir;
use db_gateway::config::enums::configuration_error::ConfigurationError;
use db_gateway::config::structs::configuration::Configuration;
use db_gateway::database::enums::database_drivers::DatabaseDrivers;

#[test]
fn test_config_default_values() {
    let config = Configuration::init();
    assert_eq!(config.log_level, "info");
    assert_eq!(config.database.driver, Some(DatabaseDrivers::mysql));
    assert_eq!(config.gateway.max_attempts, 2, "Default should retry once");
    assert!(config.gateway.connect_timeout > 0, "Connect timeout should be positive");
}

#[test]
fn test_config_toml_loading() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let config_content = r#"
log_level = "warn"

[database]
driver = "sqlite3"
database = "data.db"
encoding = "UTF-8"

[gateway]
max_attempts = 3
connect_timeout = 5
slow_statement_threshold = 2
"#;
    fs::write(&config_path, config_content).unwrap();

    let config = Configuration::load_from_file(&config_path.to_string_lossy(), false).unwrap();
    assert_eq!(config.database.driver, Some(DatabaseDrivers::sqlite3));
    assert_eq!(config.database.database.as_deref(), Some("data.db"));
    assert_eq!(config.gateway.retry_policy().unwrap().max_attempts, 3);
    assert_eq!(config.gateway.connect_timeout().as_secs(), 5);
}

#[test]
fn test_config_missing_file_without_create() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("missing.toml");

    let result = Configuration::load_from_file(&config_path.to_string_lossy(), false);
    assert!(matches!(result, Err(ConfigurationError::IOError(_))));
    assert!(!config_path.exists());
}

#[test]
fn test_config_create_writes_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    let path = config_path.to_string_lossy().to_string();

    assert!(matches!(
        Configuration::load_from_file(&path, true),
        Err(ConfigurationError::ConfigCreated(_))
    ));
    let created = Configuration::load_from_file(&path, false).unwrap();
    assert_eq!(created, Configuration::init());
}

#[test]
fn test_config_rejects_invalid_database_section() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "log_level = \"info\"\n\n[database]\ndriver = \"mysql\"\ndatabase = \"shop\"\nencoding = \"utf8mb4\"\n").unwrap();

    match Configuration::load_from_file(&config_path.to_string_lossy(), false) {
        Err(ConfigurationError::MissingField(field)) => assert_eq!(field.as_str(), "hostname"),
        other => panic!("unexpected: {:?}", other),
    }
}

#[test]
fn test_config_map_path_matches_toml_path() {
    let from_map = db_gateway::config::structs::gateway_config::GatewayConfig::from_map(&common::sqlite_settings("data.db"), None).unwrap();
    assert_eq!(from_map, common::sqlite_config("data.db"));
}
