use std::collections::BTreeMap;
use crate::config::enums::config_field::ConfigField;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::field_map::FieldMap;

impl FieldMap {
    /// Identity mapping: every field is read from the key of the same name.
    pub fn new() -> FieldMap {
        FieldMap::default()
    }

    pub fn rename(mut self, field: ConfigField, source_key: impl Into<String>) -> FieldMap {
        self.overrides.insert(field, source_key.into());
        self
    }

    /// Builds a map from `(canonical name, source key)` pairs, rejecting unknown canonical names.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<FieldMap, ConfigurationError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut overrides = BTreeMap::new();
        for (field, source_key) in pairs {
            overrides.insert(field.as_ref().parse::<ConfigField>()?, source_key.into());
        }
        Ok(FieldMap { overrides })
    }

    pub fn source_key(&self, field: ConfigField) -> &str {
        self.overrides
            .get(&field)
            .map(String::as_str)
            .unwrap_or_else(|| field.as_str())
    }
}
