use std::sync::Arc;
use serde::ser::{Serialize, SerializeMap, Serializer};
use crate::database::structs::query_value::QueryValue;
use crate::database::structs::result_row::ResultRow;

impl ResultRow {
    pub fn new(columns: Arc<[String]>, values: Vec<QueryValue>) -> ResultRow {
        ResultRow { columns, values }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[QueryValue] {
        &self.values
    }

    pub fn get(&self, column: &str) -> Option<&QueryValue> {
        self.columns
            .iter()
            .position(|name| name == column)
            .and_then(|index| self.values.get(index))
    }

    pub fn get_index(&self, index: usize) -> Option<&QueryValue> {
        self.values.get(index)
    }
}

impl Serialize for ResultRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.values.len()))?;
        for (column, value) in self.columns.iter().zip(&self.values) {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
