use crate::action::Action;
use crate::handler_map::HandlerMap;

/// A dispatch-by-tag reducing function: each action's `kind` is looked up in
/// the table, and anything unmatched leaves the state as it was.
pub struct Reducer<S> {
    table: HandlerMap<S>,
    initial: S,
}

impl<S: Clone> Reducer<S> {
    /// Runs one reduction step. A missing state substitutes the configured
    /// initial value; a missing action, an empty tag, or an unmatched tag
    /// returns the state unchanged.
    pub fn reduce(&self, state: Option<S>, action: Option<&Action>) -> S {
        let state = state.unwrap_or_else(|| self.initial.clone());
        let Some(action) = action else {
            return state;
        };
        if action.kind.is_empty() {
            return state;
        }
        match self.table.get(&action.kind) {
            Some(handler) => (**handler)(state, action),
            None => {
                log::trace!("no handler for action type {:?}", action.kind);
                state
            }
        }
    }

    /// The state a fresh reduction starts from.
    pub fn initial(&self) -> &S {
        &self.initial
    }
}

impl<S: Clone> Clone for Reducer<S> {
    fn clone(&self) -> Self {
        Self {
            table: self.table.clone(),
            initial: self.initial.clone(),
        }
    }
}

/// Builds the dispatching function for a handler mapping. With a namespace
/// the table is rebuilt under `"{ns}_{name}"` keys, so only namespaced
/// actions resolve and bare ones fall through.
pub fn reducer<S: Clone>(handlers: HandlerMap<S>, initial: S, ns: Option<&str>) -> Reducer<S> {
    let table = match ns {
        Some(ns) => handlers.into_namespaced(ns),
        None => handlers,
    };
    Reducer { table, initial }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::create_actions;
    use crate::value::truthy;
    use serde_json::{json, Map, Value};

    fn stub_handlers() -> HandlerMap<Value> {
        HandlerMap::new().on("test", |state: Value, action: &Action| {
            let mutate = action
                .payload
                .as_ref()
                .and_then(|payload| payload.get("mutate"))
                .cloned()
                .unwrap_or(Value::Null);
            if truthy(&mutate) {
                let mut map = match state {
                    Value::Object(map) => map,
                    _ => Map::new(),
                };
                map.insert("mutated".into(), mutate);
                Value::Object(map)
            } else {
                state
            }
        })
    }

    #[test]
    fn reduces_state_through_the_matching_handler() {
        let stub = reducer(stub_handlers(), Value::Null, None);
        let actions = create_actions(&stub_handlers(), None).expect("actions");
        let action = actions
            .get("test")
            .expect("creator")
            .payload(json!({"mutate": true}));
        let next = stub.reduce(Some(json!({"mutated": false})), Some(&action));
        assert_eq!(next, json!({"mutated": true}));
    }

    #[test]
    fn missing_action_is_identity() {
        let stub = reducer(stub_handlers(), Value::Null, None);
        let state = json!({"mutated": false});
        assert_eq!(stub.reduce(Some(state.clone()), None), state);
    }

    #[test]
    fn missing_state_substitutes_the_initial_value() {
        let initial = json!({"foo": "bar"});
        let stub = reducer(stub_handlers(), initial.clone(), None);
        assert_eq!(stub.reduce(None, None), initial);
    }

    #[test]
    fn unmatched_tag_is_a_silent_no_op() {
        let stub = reducer(stub_handlers(), Value::Null, None);
        let action = Action::build("unknown".into(), json!(1), Value::Null, Value::Null);
        let state = json!({"mutated": false});
        assert_eq!(stub.reduce(Some(state.clone()), Some(&action)), state);
    }

    #[test]
    fn empty_tag_never_dispatches() {
        let handlers: HandlerMap<Value> = HandlerMap::new().on("", |_, _| json!("boom"));
        let stub = reducer(handlers, Value::Null, None);
        let action = Action::build(String::new(), Value::Null, Value::Null, Value::Null);
        let state = json!("untouched");
        assert_eq!(stub.reduce(Some(state.clone()), Some(&action)), state);
    }

    #[test]
    fn state_may_be_any_value() {
        let stub = reducer(stub_handlers(), Value::Null, None);
        for state in [
            json!("test"),
            json!(1),
            json!(["a", 1, {"b": "c"}]),
            json!(true),
            json!(false),
            Value::Null,
        ] {
            assert_eq!(stub.reduce(Some(state.clone()), None), state);
        }
    }

    #[test]
    fn works_with_typed_state() {
        #[derive(Debug, Clone, PartialEq, Default)]
        struct Counter {
            count: i64,
        }

        let handlers = HandlerMap::new().on("increment", |state: Counter, _: &Action| Counter {
            count: state.count + 1,
        });
        let stub = reducer(handlers, Counter::default(), None);
        let action = Action::build("increment".into(), Value::Null, Value::Null, Value::Null);
        let next = stub.reduce(None, Some(&action));
        assert_eq!(next, Counter { count: 1 });
    }
}
