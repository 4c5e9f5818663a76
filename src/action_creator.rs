use std::collections::HashMap;

use serde_json::Value;

use crate::action::Action;
use crate::error::Error;
use crate::handler_map::HandlerMap;

/// Builds actions for one tag. The namespace prefixes the emitted `kind`
/// only; creator names stay bare so callers keep natural lookups.
#[derive(Debug, Clone)]
pub struct ActionCreator {
    kind: String,
}

impl ActionCreator {
    pub(crate) fn new_unchecked(tag: &str, ns: Option<&str>) -> Self {
        let kind = match ns {
            Some(ns) => format!("{ns}_{tag}"),
            None => tag.to_owned(),
        };
        Self { kind }
    }

    /// The full tag this creator stamps on its actions.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Builds an action from the full payload/meta/error arity. `Value::Null`
    /// stands in for an absent argument and is stripped from the record.
    pub fn call(&self, payload: Value, meta: Value, error: Value) -> Action {
        Action::build(self.kind.clone(), payload, meta, error)
    }

    /// Builds an action carrying only a payload.
    pub fn payload(&self, payload: impl Into<Value>) -> Action {
        self.call(payload.into(), Value::Null, Value::Null)
    }

    /// Builds a bare action.
    pub fn empty(&self) -> Action {
        self.call(Value::Null, Value::Null, Value::Null)
    }
}

/// Builds one action creator, failing up front on a blank tag.
pub fn create_action(tag: &str, ns: Option<&str>) -> Result<ActionCreator, Error> {
    if tag.is_empty() {
        return Err(Error::BlankActionType);
    }
    Ok(ActionCreator::new_unchecked(tag, ns))
}

/// One action creator per handler name, keyed by the bare name.
#[derive(Debug, Clone, Default)]
pub struct Actions {
    creators: HashMap<String, ActionCreator>,
}

impl Actions {
    pub fn get(&self, name: &str) -> Option<&ActionCreator> {
        self.creators.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creators.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.creators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creators.is_empty()
    }

    pub(crate) fn from_names_unchecked<'a>(
        names: impl IntoIterator<Item = &'a str>,
        ns: Option<&str>,
    ) -> Self {
        let creators = names
            .into_iter()
            .map(|name| (name.to_owned(), ActionCreator::new_unchecked(name, ns)))
            .collect();
        Self { creators }
    }
}

/// Derives one creator per handler in the mapping.
pub fn create_actions<S>(handlers: &HandlerMap<S>, ns: Option<&str>) -> Result<Actions, Error> {
    let mut creators = HashMap::new();
    for name in handlers.names() {
        let creator = create_action(name, ns)?;
        creators.insert(name.to_owned(), creator);
    }
    Ok(Actions { creators })
}
