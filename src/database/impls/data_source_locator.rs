use std::fmt;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use crate::config::enums::config_field::ConfigField;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::gateway_config::GatewayConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::structs::data_source_locator::DataSourceLocator;

impl DataSourceLocator {
    /// Resolves the locator, applying the driver's default port when none is configured.
    pub fn from_config(config: &GatewayConfig) -> Result<DataSourceLocator, ConfigurationError> {
        let driver = config.driver.ok_or(ConfigurationError::MissingField(ConfigField::driver))?;
        let database = config.database.clone().ok_or(ConfigurationError::MissingField(ConfigField::database))?;
        Ok(DataSourceLocator {
            driver,
            hostname: config.hostname.clone(),
            port: config.port.or(driver.default_port()),
            database,
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    /// PDO-style locator without credentials, for diagnostics.
    pub fn dsn(&self) -> String {
        match self.driver {
            DatabaseDrivers::sqlite3 => format!("{}:{}", self.driver.dsn_prefix(), self.database),
            _ => format!(
                "{}:host={};port={};dbname={}",
                self.driver.dsn_prefix(),
                self.hostname.as_deref().unwrap_or_default(),
                self.port.map(|port| port.to_string()).unwrap_or_default(),
                self.database
            ),
        }
    }

    /// `sqlx` connection URL, credentials percent-encoded.
    pub fn connection_url(&self) -> String {
        if self.driver == DatabaseDrivers::sqlite3 {
            return match self.database.as_str() {
                ":memory:" => String::from("sqlite::memory:"),
                path => format!("sqlite://{path}?mode=rwc"),
            };
        }

        let mut credentials = String::new();
        if let Some(username) = self.username.as_deref() {
            credentials.push_str(&encode(username));
            if let Some(password) = self.password.as_deref().filter(|password| !password.is_empty()) {
                credentials.push(':');
                credentials.push_str(&encode(password));
            }
            credentials.push('@');
        }

        let port = self.port.map(|port| format!(":{port}")).unwrap_or_default();
        format!(
            "{}://{}{}{}/{}",
            self.driver.url_scheme(),
            credentials,
            self.hostname.as_deref().unwrap_or_default(),
            port,
            encode(&self.database)
        )
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

impl fmt::Display for DataSourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dsn())
    }
}

impl fmt::Debug for DataSourceLocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataSourceLocator")
            .field("dsn", &self.dsn())
            .field("username", &self.username)
            .finish()
    }
}
