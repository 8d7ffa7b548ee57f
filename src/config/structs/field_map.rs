use std::collections::BTreeMap;
use crate::config::enums::config_field::ConfigField;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    pub(crate) overrides: BTreeMap<ConfigField, String>,
}
