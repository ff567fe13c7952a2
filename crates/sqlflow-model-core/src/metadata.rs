//! Training metadata attached to a model (attributes, feature columns, ...).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ModelError;

/// JSON object with unique string keys. Values may be primitives, arrays or
/// nested objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accepts only JSON objects; arrays and scalars are rejected.
    pub fn from_value(value: Value) -> Result<Self, ModelError> {
        match value {
            Value::Object(map) => Ok(Metadata(map)),
            other => Err(ModelError::InvalidMetadata {
                reason: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ModelError> {
        let value: Value = serde_json::from_str(s).map_err(|e| ModelError::InvalidMetadata {
            reason: e.to_string(),
        })?;
        Self::from_value(value)
    }

    /// Inserts or replaces `key`, returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Metadata(map)
    }
}

/// Builds the conventional metadata document for a finished training run:
/// `{"train_params": {...}, "model_params": {...}}`.
pub fn collect_model_metadata(
    train_params: Map<String, Value>,
    model_params: Map<String, Value>,
) -> Metadata {
    let mut meta = Metadata::new();
    meta.insert("train_params", Value::Object(train_params));
    meta.insert("model_params", Value::Object(model_params));
    meta
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
