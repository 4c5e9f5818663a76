use serde_json::Value;

use crate::action::Action;
use crate::action_creator::Actions;
use crate::handler_map::HandlerMap;
use crate::reducer::{reducer, Reducer};
use crate::reducer_pair::ReducerPair;

/// A reducer pair over a sequence, preconfigured with `add`/`remove` handlers
/// and an empty initial state.
///
/// `add` appends the item reducer's output when one is supplied (run from its
/// own initial state with the action passed through), otherwise the raw
/// payload. `remove` keeps only the elements equal to the payload; this
/// filter direction is historical and deliberately left as-is (see
/// DESIGN.md).
pub fn array_reducer(item: Option<Reducer<Value>>, ns: Option<&str>) -> ReducerPair<Vec<Value>> {
    let handlers = HandlerMap::new()
        .on("add", move |mut state: Vec<Value>, action: &Action| {
            let element = match &item {
                Some(item) => item.reduce(None, Some(action)),
                None => action.payload.clone().unwrap_or(Value::Null),
            };
            state.push(element);
            state
        })
        .on("remove", |state: Vec<Value>, action: &Action| {
            let target = action.payload.clone().unwrap_or(Value::Null);
            state.into_iter().filter(|element| *element == target).collect()
        });
    let action = Actions::from_names_unchecked(["add", "remove"], ns);
    let reducer = reducer(handlers, Vec::new(), ns);
    ReducerPair { action, reducer }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::reduxr;
    use serde_json::json;

    fn counted_items() -> Reducer<Value> {
        let pair = reduxr(
            HandlerMap::new().on("add", |_: Value, _: &Action| json!({"id": 1})),
            json!({"id": null}),
            None,
        )
        .expect("item pair");
        pair.reducer
    }

    #[test]
    fn add_appends_through_the_item_reducer() {
        let ar = array_reducer(Some(counted_items()), None);
        let add = ar.action.get("add").expect("creator").empty();
        let state = ar.reducer.reduce(None, Some(&add));
        assert_eq!(state, vec![json!({"id": 1})]);
    }

    #[test]
    fn add_appends_the_payload_without_an_item_reducer() {
        let ar = array_reducer(None, None);
        let add = ar.action.get("add").expect("creator").payload(json!("x"));
        let state = ar.reducer.reduce(None, Some(&add));
        assert_eq!(state, vec![json!("x")]);
    }

    #[test]
    fn remove_against_a_fresh_state_is_empty() {
        let ar = array_reducer(Some(counted_items()), None);
        let add = ar.action.get("add").expect("creator").empty();
        let state = ar.reducer.reduce(None, Some(&add));
        let element = state[0].clone();
        let remove = ar.action.get("remove").expect("creator").payload(element);
        assert_eq!(ar.reducer.reduce(None, Some(&remove)).len(), 0);
    }

    #[test]
    fn remove_keeps_elements_equal_to_the_payload() {
        let ar = array_reducer(None, None);
        let state = vec![json!("a"), json!("b"), json!("a")];
        let remove = ar.action.get("remove").expect("creator").payload(json!("a"));
        let next = ar.reducer.reduce(Some(state), Some(&remove));
        assert_eq!(next, vec![json!("a"), json!("a")]);
    }

    #[test]
    fn namespaced_array_emits_namespaced_kinds() {
        let ar = array_reducer(None, Some("list"));
        let add = ar.action.get("add").expect("creator").payload(json!(1));
        assert_eq!(add.kind, "list_add");
        assert_eq!(ar.reducer.reduce(None, Some(&add)), vec![json!(1)]);
    }
}
