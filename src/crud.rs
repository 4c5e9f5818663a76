use serde_json::Value;

use crate::action::Action;
use crate::handler_map::HandlerMap;
use crate::value::shallow_merge;

fn payload_id(action: &Action) -> Option<&Value> {
    action.payload.as_ref()?.get("id")
}

fn id_matches(record: &Value, id: &Value) -> bool {
    record.get("id").is_some_and(|record_id| record_id == id)
}

/// Builds the `{name}Create` / `{name}Update` / `{name}Delete` handler set
/// over a sequence of id-keyed records. Meant to be merged into a larger
/// handler mapping by the caller; nothing wires it to a pair automatically.
///
/// Create appends a shallow merge of the default record and the payload
/// (payload fields win). Update shallow-merges the payload into every record
/// whose `id` equals the payload's, leaving the rest untouched. Delete drops
/// every matching record, order preserved. A payload without an `id` matches
/// nothing.
pub fn crud_reduce(name: &str, default_record: Value) -> HandlerMap<Vec<Value>> {
    HandlerMap::new()
        .on(
            format!("{name}Create"),
            move |mut state: Vec<Value>, action: &Action| {
                state.push(shallow_merge(&default_record, action.payload.as_ref()));
                state
            },
        )
        .on(
            format!("{name}Update"),
            |state: Vec<Value>, action: &Action| {
                let Some(id) = payload_id(action).cloned() else {
                    return state;
                };
                state
                    .into_iter()
                    .map(|record| {
                        if id_matches(&record, &id) {
                            shallow_merge(&record, action.payload.as_ref())
                        } else {
                            record
                        }
                    })
                    .collect()
            },
        )
        .on(
            format!("{name}Delete"),
            |state: Vec<Value>, action: &Action| {
                let Some(id) = payload_id(action).cloned() else {
                    return state;
                };
                state
                    .into_iter()
                    .filter(|record| !id_matches(record, &id))
                    .collect()
            },
        )
}
