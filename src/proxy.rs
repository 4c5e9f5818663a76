use serde_json::{Map, Value};

use crate::action::Action;
use crate::reducer_pair::ReducerPair;

/// Mounts a pair's reducer at one key of a larger state object. The returned
/// function rewrites only that slot and moves every sibling through
/// untouched. An absent slot reduces from the pair's initial state; a `null`
/// slot is passed through as an explicit value. Non-object input state is
/// treated as an empty object.
pub fn proxy_reduce(
    state_key: impl Into<String>,
    pair: ReducerPair<Value>,
) -> impl Fn(Value, Option<&Action>) -> Value {
    let state_key = state_key.into();
    move |state: Value, action: Option<&Action>| {
        let mut tree = match state {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let slot = tree.remove(&state_key);
        let next = pair.reducer.reduce(slot, action);
        tree.insert(state_key.clone(), next);
        Value::Object(tree)
    }
}
