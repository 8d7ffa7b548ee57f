use std::fmt;
use std::str::FromStr;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::database::enums::database_drivers::DatabaseDrivers;

impl DatabaseDrivers {
    /// Prefix of the PDO-style locator (`mysql:host=...`).
    pub fn dsn_prefix(&self) -> &'static str {
        match self {
            DatabaseDrivers::mysql => "mysql",
            DatabaseDrivers::pgsql => "pgsql",
            DatabaseDrivers::sqlite3 => "sqlite",
        }
    }

    /// Scheme of the `sqlx` connection URL.
    pub fn url_scheme(&self) -> &'static str {
        match self {
            DatabaseDrivers::mysql => "mysql",
            DatabaseDrivers::pgsql => "postgres",
            DatabaseDrivers::sqlite3 => "sqlite",
        }
    }

    pub fn default_port(&self) -> Option<u16> {
        match self {
            DatabaseDrivers::mysql => Some(3306),
            DatabaseDrivers::pgsql => Some(5432),
            DatabaseDrivers::sqlite3 => None,
        }
    }

    pub fn requires_host(&self) -> bool {
        !matches!(self, DatabaseDrivers::sqlite3)
    }

    /// Marker for the `index`th bound value, 1-based.
    pub fn positional_placeholder(&self, index: usize) -> String {
        match self {
            DatabaseDrivers::mysql | DatabaseDrivers::sqlite3 => String::from("?"),
            DatabaseDrivers::pgsql => format!("${index}"),
        }
    }

    /// Session directive run right after connecting. `encoding` is validated at configuration time.
    pub fn init_command(&self, encoding: &str) -> String {
        match self {
            DatabaseDrivers::mysql => format!("SET NAMES {encoding}"),
            DatabaseDrivers::pgsql => format!("SET client_encoding TO '{encoding}'"),
            DatabaseDrivers::sqlite3 => format!("PRAGMA encoding = '{encoding}'"),
        }
    }
}

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::mysql => write!(f, "mysql"),
            DatabaseDrivers::pgsql => write!(f, "pgsql"),
            DatabaseDrivers::sqlite3 => write!(f, "sqlite3"),
        }
    }
}

impl FromStr for DatabaseDrivers {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mysql" | "mariadb" => Ok(DatabaseDrivers::mysql),
            "pgsql" | "postgres" | "postgresql" => Ok(DatabaseDrivers::pgsql),
            "sqlite3" | "sqlite" => Ok(DatabaseDrivers::sqlite3),
            _ => Err(ConfigurationError::UnknownDriver(s.to_string())),
        }
    }
}
