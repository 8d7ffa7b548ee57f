use std::fmt;
use std::str::FromStr;
use crate::config::enums::config_field::ConfigField;
use crate::config::enums::configuration_error::ConfigurationError;

impl ConfigField {
    pub const ALL: [ConfigField; 7] = [
        ConfigField::driver,
        ConfigField::hostname,
        ConfigField::port,
        ConfigField::database,
        ConfigField::username,
        ConfigField::password,
        ConfigField::encoding,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigField::driver => "driver",
            ConfigField::hostname => "hostname",
            ConfigField::port => "port",
            ConfigField::database => "database",
            ConfigField::username => "username",
            ConfigField::password => "password",
            ConfigField::encoding => "encoding",
        }
    }
}

impl fmt::Display for ConfigField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigField {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownField(s.to_string()))
    }
}
