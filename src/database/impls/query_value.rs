use std::fmt;
use crate::database::structs::query_value::QueryValue;

impl QueryValue {
    /// Reads a command-line literal: `null`, `true`/`false`, integers and floats keep their
    /// type, anything else is text. Wrap in single quotes to force text (`'42'`).
    pub fn from_literal(raw: &str) -> QueryValue {
        if let Some(text) = raw.strip_prefix('\'').and_then(|rest| rest.strip_suffix('\'')) {
            return QueryValue::Text(text.to_string());
        }
        match raw {
            "null" | "NULL" => QueryValue::Null,
            "true" => QueryValue::Bool(true),
            "false" => QueryValue::Bool(false),
            _ => {
                if let Ok(int) = raw.parse::<i64>() {
                    QueryValue::Int(int)
                } else if let Ok(float) = raw.parse::<f64>() {
                    QueryValue::Float(float)
                } else {
                    QueryValue::Text(raw.to_string())
                }
            }
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, QueryValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            QueryValue::Int(value) => Some(*value),
            QueryValue::Bool(value) => Some(i64::from(*value)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            QueryValue::Text(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::Null => write!(f, "NULL"),
            QueryValue::Bool(value) => write!(f, "{value}"),
            QueryValue::Int(value) => write!(f, "{value}"),
            QueryValue::Float(value) => write!(f, "{value}"),
            QueryValue::Text(value) => write!(f, "'{value}'"),
            QueryValue::Bytes(value) => write!(f, "0x{}", hex::encode(value)),
        }
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Int(value)
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Int(i64::from(value))
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<Vec<u8>> for QueryValue {
    fn from(value: Vec<u8>) -> Self {
        QueryValue::Bytes(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(QueryValue::Null, Into::into)
    }
}
