//! Error types for deprecation-engine
//!
//! Provides unified error handling across the crate.

use crate::config::ConfigError;
use crate::features::dispatch::DispatchError;
use crate::features::qualifier::domain::ValidationError;
use crate::features::runtime_wrapper::domain::{BindError, WrapError};
use thiserror::Error;

/// Main error type for deprecation-engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    /// Annotation parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Placement validation error
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Argument binding error
    #[error("Binding error: {0}")]
    Bind(#[from] BindError),

    /// Wrapper installation error
    #[error("Wrap error: {0}")]
    Wrap(#[from] WrapError),

    /// Overload dispatch error
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl EngineError {
    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        EngineError::Parse(msg.into())
    }
}

/// Result type alias for deprecation-engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
