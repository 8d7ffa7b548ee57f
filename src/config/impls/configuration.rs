use std::fs::File;
use std::io::Write;
use log::LevelFilter;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;
use crate::config::structs::gateway_config::GatewayConfig;
use crate::config::structs::gateway_settings::GatewaySettings;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl Configuration {
    pub fn init() -> Configuration {
        Configuration {
            log_level: String::from("info"),
            database: GatewayConfig {
                driver: Some(DatabaseDrivers::mysql),
                hostname: Some(String::from("127.0.0.1")),
                port: None,
                database: Some(String::from("app")),
                username: Some(String::from("app")),
                password: Some(String::new()),
                encoding: Some(String::from("utf8mb4")),
            },
            gateway: GatewaySettings::default(),
        }
    }

    pub fn load(data: &[u8]) -> Result<Configuration, toml::de::Error> {
        toml::from_str(&String::from_utf8_lossy(data))
    }

    pub fn load_file(path: &str) -> Result<Configuration, ConfigurationError> {
        let data = std::fs::read(path)?;
        Ok(Self::load(data.as_slice())?)
    }

    pub fn save_file(path: &str, data: String) -> Result<(), ConfigurationError> {
        let mut file = File::create(path)?;
        file.write_all(data.as_ref())?;
        Ok(())
    }

    /// Loads and validates `path`. When the file is missing or broken and `create` is set,
    /// a default file is written and `ConfigCreated` is returned so the operator can edit it.
    pub fn load_from_file(path: &str, create: bool) -> Result<Configuration, ConfigurationError> {
        let config = match Configuration::load_file(path) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("No config file found or corrupt.");
                eprintln!("[ERROR] {error}");

                if !create {
                    eprintln!("You can either create your own {path} file, or start this app using '--create-config' as parameter.");
                    return Err(error);
                }
                eprintln!("Creating config file..");

                let config_toml = toml::to_string(&Configuration::init())?;
                if let Err(error) = Configuration::save_file(path, config_toml) {
                    eprintln!("{path} file could not be created, check permissions...");
                    return Err(error);
                }
                eprintln!("Please edit {path}, exiting now...");
                return Err(ConfigurationError::ConfigCreated(path.to_string()));
            }
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.log_level_filter()?;
        self.database.validate()?;
        self.gateway.retry_policy()?;
        Ok(())
    }

    pub fn log_level_filter(&self) -> Result<LevelFilter, ConfigurationError> {
        match self.log_level.as_str() {
            "off" => Ok(LevelFilter::Off),
            "trace" => Ok(LevelFilter::Trace),
            "debug" => Ok(LevelFilter::Debug),
            "info" => Ok(LevelFilter::Info),
            "warn" => Ok(LevelFilter::Warn),
            "error" => Ok(LevelFilter::Error),
            _ => Err(ConfigurationError::UnknownLogLevel(self.log_level.clone())),
        }
    }
}
