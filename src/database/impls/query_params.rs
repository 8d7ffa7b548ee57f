use std::collections::BTreeMap;
use crate::database::structs::query_params::QueryParams;
use crate::database::structs::query_value::QueryValue;

impl QueryParams {
    pub fn new() -> QueryParams {
        QueryParams::default()
    }

    /// Adds a value. The name may carry PDO's leading colon (`:id` and `id` are the same key).
    pub fn with(mut self, name: &str, value: impl Into<QueryValue>) -> QueryParams {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &str, value: impl Into<QueryValue>) -> Option<QueryValue> {
        self.values.insert(normalize(name).to_string(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.values.get(normalize(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// JSON rendering used in failure logs.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.values).unwrap_or_else(|_| format!("{:?}", self.values))
    }
}

fn normalize(name: &str) -> &str {
    name.strip_prefix(':').unwrap_or(name)
}

impl<K: AsRef<str>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (name, value) in iter {
            params.insert(name.as_ref(), value);
        }
        params
    }
}

impl From<BTreeMap<String, QueryValue>> for QueryParams {
    fn from(values: BTreeMap<String, QueryValue>) -> Self {
        values.into_iter().collect()
    }
}
