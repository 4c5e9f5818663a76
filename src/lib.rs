//! Helpers for the unidirectional state-management pattern: one handler
//! mapping (name → pure transition function) yields both action creators and
//! a dispatch-by-tag reducing function, plus conveniences for namespacing,
//! array collections, id-keyed CRUD handler sets, and mounting a reducer at a
//! named slot of a larger state tree.
//!
//! Everything here is a pure, synchronous computation; driving the produced
//! reducer with a store or runtime loop is the caller's concern.

mod action;
mod action_creator;
mod array_reducer;
mod crud;
mod error;
mod handler_map;
mod proxy;
mod reducer;
mod reducer_pair;
mod value;

pub use action::Action;
pub use action_creator::create_action;
pub use action_creator::create_actions;
pub use action_creator::ActionCreator;
pub use action_creator::Actions;
pub use array_reducer::array_reducer;
pub use crud::crud_reduce;
pub use error::Error;
pub use handler_map::HandlerFn;
pub use handler_map::HandlerMap;
pub use proxy::proxy_reduce;
pub use reducer::reducer;
pub use reducer::Reducer;
pub use reducer_pair::reduxr;
pub use reducer_pair::ReducerPair;
