#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Action creators cannot be built from a blank tag name. Raised at
    /// construction time, never at call time.
    #[error("type argument to create_action cannot be blank")]
    BlankActionType,
}
