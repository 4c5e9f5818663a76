use serde_json::Value;

/// Script-style truthiness over a JSON value: `Null`, `false`, zero and the
/// empty string are falsy; arrays and objects are always truthy.
pub(crate) fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Error-shape capability check: an object carrying string `name` and
/// `message` fields counts as an error value.
pub(crate) fn is_error_like(value: &Value) -> bool {
    let Value::Object(map) = value else {
        return false;
    };
    matches!(map.get("name"), Some(Value::String(_)))
        && matches!(map.get("message"), Some(Value::String(_)))
}

/// Shallow object merge, `overlay` fields winning. A non-object overlay
/// contributes nothing; a non-object base counts as empty.
pub(crate) fn shallow_merge(base: &Value, overlay: Option<&Value>) -> Value {
    let mut merged = match base {
        Value::Object(map) => map.clone(),
        _ => serde_json::Map::new(),
    };
    if let Some(Value::Object(overlay)) = overlay {
        for (key, value) in overlay {
            merged.insert(key.clone(), value.clone());
        }
    }
    Value::Object(merged)
}
