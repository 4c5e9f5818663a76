use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::Arc;

use crate::action::Action;

/// A pure transition function: current state and action in, next state out.
pub type HandlerFn<S> = Arc<dyn Fn(S, &Action) -> S + Send + Sync>;

/// Name-keyed mapping of transition functions. One mapping feeds both the
/// action batch builder (names become tags) and the dispatch table.
pub struct HandlerMap<S> {
    handlers: HashMap<String, HandlerFn<S>>,
}

impl<S> HandlerMap<S> {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers a handler under `name`, replacing any earlier one of the
    /// same name.
    pub fn on<F>(mut self, name: impl Into<String>, handler: F) -> Self
    where
        F: Fn(S, &Action) -> S + Send + Sync + 'static,
    {
        self.handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Folds `other` in; `other`'s handlers win on duplicate names.
    pub fn merge(mut self, other: HandlerMap<S>) -> Self {
        self.handlers.extend(other.handlers);
        self
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub(crate) fn get(&self, tag: &str) -> Option<&HandlerFn<S>> {
        self.handlers.get(tag)
    }

    /// A fresh mapping with every key rewritten to `"{ns}_{key}"`.
    pub(crate) fn into_namespaced(self, ns: &str) -> Self {
        let handlers = self
            .handlers
            .into_iter()
            .map(|(name, handler)| (format!("{ns}_{name}"), handler))
            .collect();
        Self { handlers }
    }
}

impl<S> Default for HandlerMap<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> Clone for HandlerMap<S> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<S> Debug for HandlerMap<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.handlers.keys()).finish()
    }
}
