//! Forgiving decoding of request bodies
//!
//! Keys match case-insensitively (underscores ignored) and each field is
//! decoded on its own: a value of the wrong type leaves only that field at
//! its zero value. A body that is not a JSON object decodes to all zeroes.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Top-level members of a JSON object, keyed by folded name
#[derive(Debug, Default)]
pub struct JsonFields(Map<String, Value>);

/// A request type built from [`JsonFields`]
pub trait FromJsonFields: Default {
    fn from_fields(fields: &JsonFields) -> Self;
}

/// `CallNumber`, `callnumber` and `call_number` all fold to `callnumber`
fn fold_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl JsonFields {
    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(value) => Self::from_value(value),
            Err(e) => {
                tracing::debug!("Ignoring undecodable request body: {}", e);
                Self::default()
            }
        }
    }

    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map.into_iter().map(|(k, v)| (fold_key(&k), v)).collect()),
            other => {
                tracing::debug!("Ignoring non-object JSON value: {}", other);
                Self::default()
            }
        }
    }

    /// Decode one field; missing or mistyped values give the zero value
    pub fn get<T: DeserializeOwned + Default>(&self, name: &str) -> T {
        let Some(value) = self.0.get(&fold_key(name)) else {
            return T::default();
        };
        T::deserialize(value).unwrap_or_else(|e| {
            tracing::debug!(field = name, "Ignoring field: {}", e);
            T::default()
        })
    }

    /// Decode an array of nested objects; anything but an array gives an empty list
    pub fn list<T: FromJsonFields>(&self, name: &str) -> Vec<T> {
        match self.0.get(&fold_key(name)) {
            Some(Value::Array(items)) => items
                .iter()
                .map(|item| T::from_fields(&Self::from_value(item.clone())))
                .collect(),
            _ => Vec::new(),
        }
    }
}
