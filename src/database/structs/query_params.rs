use std::collections::BTreeMap;
use serde::Serialize;
use crate::database::structs::query_value::QueryValue;

#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct QueryParams {
    pub(crate) values: BTreeMap<String, QueryValue>,
}
