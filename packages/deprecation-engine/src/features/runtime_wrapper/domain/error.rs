//! Runtime wrapper errors

use thiserror::Error;

/// Failure to bind call arguments to a signature
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("takes {expected} positional arguments but {got} were given")]
    TooManyPositional { expected: usize, got: usize },

    #[error("got an unexpected keyword argument '{name}'")]
    UnexpectedKeyword { name: String },

    #[error("got multiple values for argument '{name}'")]
    DuplicateArgument { name: String },

    #[error("missing required argument '{name}'")]
    MissingArgument { name: String },
}

/// Failure to install a runtime wrapper
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WrapError {
    /// The declaration's placement does not admit runtime wrapping
    #[error("cannot wrap `{name}`: {reason}")]
    InvalidWrapTarget { name: String, reason: String },

    /// Parameter guard requested for a signature with no deprecated parameter
    #[error("`{function}` has no deprecated parameters")]
    NoDeprecatedParameters { function: String },
}
