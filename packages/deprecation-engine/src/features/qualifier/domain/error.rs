//! Static validation errors for `Deprecated` placements
//!
//! These are reported as data so an analyzer can collect every problem of a
//! module in one pass instead of stopping at the first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Placement or qualifier validation failure
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "kebab-case")]
pub enum ValidationError {
    /// Bare `Deprecated` with no contextual type to infer from
    #[error("cannot infer the type qualified by bare `Deprecated`: no declared type is available")]
    InferenceError,

    /// `Deprecated` is not the outermost type wrapper
    #[error("qualifier must be outermost: `Deprecated` appears inside `{found}`")]
    OrderingError { found: String },

    /// Return-position (or type-parameter) qualifier on a non-invocable type
    #[error("only return types denoting an invocable or a type-parameter bound to one may be marked deprecated, found `{found}`")]
    IllegalReturnQualifier { found: String },

    /// Deprecated parameter without a default value
    #[error("deprecated parameters must have a default: `{parameter}`")]
    MissingDefaultError { parameter: String },

    /// Every overload sharing a name is marked deprecated
    #[error("every overload of `{name}` is deprecated, leaving no non-deprecated fallback")]
    AllOverloadsDeprecated { name: String },
}

impl ValidationError {
    /// Stable diagnostic code
    pub fn code(&self) -> &'static str {
        match self {
            ValidationError::InferenceError => "inference-error",
            ValidationError::OrderingError { .. } => "ordering-error",
            ValidationError::IllegalReturnQualifier { .. } => "illegal-return-qualifier",
            ValidationError::MissingDefaultError { .. } => "missing-default-error",
            ValidationError::AllOverloadsDeprecated { .. } => "all-overloads-deprecated",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_serde_tags() {
        let err = ValidationError::MissingDefaultError {
            parameter: "localtime.isdst".to_string(),
        };
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], err.code());
        assert_eq!(json["parameter"], "localtime.isdst");

        let json = serde_json::to_value(ValidationError::InferenceError).unwrap();
        assert_eq!(json["code"], "inference-error");
    }

    #[test]
    fn test_messages() {
        let err = ValidationError::OrderingError {
            found: "Final[Deprecated[int]]".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "qualifier must be outermost: `Deprecated` appears inside `Final[Deprecated[int]]`"
        );
    }
}
