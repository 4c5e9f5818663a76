use crate::action_creator::{create_actions, Actions};
use crate::error::Error;
use crate::handler_map::HandlerMap;
use crate::reducer::{reducer, Reducer};

/// The bundled `{action, reducer}` result for one handler mapping. Creators
/// and dispatch table share the same names and namespace, so every creator's
/// output resolves back to its handler.
pub struct ReducerPair<S> {
    pub action: Actions,
    pub reducer: Reducer<S>,
}

/// Builds a [`ReducerPair`] over one handler mapping, initial state, and
/// optional namespace.
pub fn reduxr<S: Clone>(
    handlers: HandlerMap<S>,
    initial: S,
    ns: Option<&str>,
) -> Result<ReducerPair<S>, Error> {
    let action = create_actions(&handlers, ns)?;
    let reducer = reducer(handlers, initial, ns);
    Ok(ReducerPair { action, reducer })
}
