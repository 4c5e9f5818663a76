use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value::is_error_like;
use crate::value::truthy;

/// An immutable tagged envelope describing one state transition request.
///
/// `payload` and `meta` follow the omit-empty rule: supplying `Value::Null`
/// collapses to `None`, and `None` fields never appear in serialized output.
/// `kind` (the `"type"` discriminant) is always present; `error` defaults to
/// whether the payload looks like an error value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(default = "default_error")]
    pub error: Value,
}

fn default_error() -> Value {
    Value::Bool(false)
}

impl Action {
    pub(crate) fn build(kind: String, payload: Value, meta: Value, error: Value) -> Self {
        let error = if truthy(&error) {
            error
        } else {
            Value::Bool(is_error_like(&payload))
        };
        Self {
            kind,
            payload: present(payload),
            meta: present(meta),
            error,
        }
    }
}

fn present(value: Value) -> Option<Value> {
    match value {
        Value::Null => None,
        other => Some(other),
    }
}
