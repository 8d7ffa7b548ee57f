use std::sync::Arc;
use crate::database::structs::query_value::QueryValue;

#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub(crate) columns: Arc<[String]>,
    pub(crate) values: Vec<QueryValue>,
}
