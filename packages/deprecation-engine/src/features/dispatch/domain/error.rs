use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("no overload of `{name}` matches the given arguments ({candidates} candidates tried)")]
    NoMatchingOverload { name: String, candidates: usize },
}
