use std::collections::{BTreeMap, HashMap};
use std::fmt;
use once_cell::sync::Lazy;
use regex::Regex;
use crate::config::enums::config_field::ConfigField;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::field_map::FieldMap;
use crate::config::structs::gateway_config::GatewayConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;

static ENCODING_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_-]{1,32}$").unwrap());

impl GatewayConfig {
    /// Reads the recognized fields out of `source`, looking each one up under the key
    /// `fields` assigns to it (identity when `fields` is `None`). Blank values count as unset.
    pub fn from_map(source: &HashMap<String, String>, fields: Option<&FieldMap>) -> Result<GatewayConfig, ConfigurationError> {
        let identity = FieldMap::new();
        let fields = fields.unwrap_or(&identity);
        let lookup = |field: ConfigField| -> Option<String> {
            source
                .get(fields.source_key(field))
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .map(str::to_string)
        };

        let driver = match lookup(ConfigField::driver) {
            Some(name) => Some(name.parse::<DatabaseDrivers>()?),
            None => None,
        };
        let port = match lookup(ConfigField::port) {
            Some(raw) => Some(parse_port(&raw)?),
            None => None,
        };

        let config = GatewayConfig {
            driver,
            hostname: lookup(ConfigField::hostname),
            port,
            database: lookup(ConfigField::database),
            username: lookup(ConfigField::username),
            password: lookup(ConfigField::password),
            encoding: lookup(ConfigField::encoding),
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce a working connection. Encoding has no
    /// default: a missing one is an error rather than a guess.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let driver = self.driver.ok_or(ConfigurationError::MissingField(ConfigField::driver))?;
        if self.database.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigurationError::MissingField(ConfigField::database));
        }
        if driver.requires_host() && self.hostname.as_deref().is_none_or(str::is_empty) {
            return Err(ConfigurationError::MissingField(ConfigField::hostname));
        }
        if self.port == Some(0) {
            return Err(ConfigurationError::InvalidPort(String::from("0")));
        }
        match self.encoding.as_deref() {
            None => Err(ConfigurationError::MissingField(ConfigField::encoding)),
            Some(encoding) if !ENCODING_NAME.is_match(encoding) => Err(ConfigurationError::InvalidEncoding(encoding.to_string())),
            Some(_) => Ok(()),
        }
    }

    pub fn get(&self, field: ConfigField) -> Option<String> {
        match field {
            ConfigField::driver => self.driver.map(|driver| driver.to_string()),
            ConfigField::hostname => self.hostname.clone(),
            ConfigField::port => self.port.map(|port| port.to_string()),
            ConfigField::database => self.database.clone(),
            ConfigField::username => self.username.clone(),
            ConfigField::password => self.password.clone(),
            ConfigField::encoding => self.encoding.clone(),
        }
    }

    /// Set fields keyed by their canonical names, whatever keys they were read from.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        ConfigField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field.as_str().to_string(), value)))
            .collect()
    }
}

fn parse_port(raw: &str) -> Result<u16, ConfigurationError> {
    match raw.parse::<u16>() {
        Ok(0) | Err(_) => Err(ConfigurationError::InvalidPort(raw.to_string())),
        Ok(port) => Ok(port),
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("driver", &self.driver)
            .field("hostname", &self.hostname)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "********"))
            .field("encoding", &self.encoding)
            .finish()
    }
}
