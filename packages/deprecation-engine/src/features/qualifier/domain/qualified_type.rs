//! Qualified type: an inner type paired with its deprecation marker

use super::error::ValidationError;
use super::marker::DeprecationMarker;
use super::type_expr::TypeExpr;
use serde::{Deserialize, Serialize};

/// `Deprecated[inner]` after the qualifier has been applied.
///
/// Invariant: `inner` never contains another `Deprecated` node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QualifiedType {
    inner: TypeExpr,
    marker: DeprecationMarker,
}

impl QualifiedType {
    /// Pair `inner` with `marker`, rejecting stacked qualifiers
    pub fn new(inner: TypeExpr, marker: DeprecationMarker) -> Result<Self, ValidationError> {
        if inner.contains_deprecated() {
            return Err(ValidationError::OrderingError {
                found: TypeExpr::deprecated(inner, marker).to_string(),
            });
        }
        Ok(Self { inner, marker })
    }

    /// The type exactly as written inside `Deprecated[...]`
    pub fn inner(&self) -> &TypeExpr {
        &self.inner
    }

    /// The inner type with `Final` / `ClassVar` wrappers removed
    pub fn resolved_inner(&self) -> &TypeExpr {
        self.inner.strip_type_qualifiers()
    }

    pub fn marker(&self) -> &DeprecationMarker {
        &self.marker
    }

    /// Back to annotation form
    pub fn to_type_expr(&self) -> TypeExpr {
        TypeExpr::deprecated(self.inner.clone(), self.marker.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolved_inner_strips_final() {
        let q = QualifiedType::new(
            TypeExpr::final_of(TypeExpr::simple("int")),
            DeprecationMarker::default(),
        )
        .unwrap();
        assert_eq!(q.inner().to_string(), "Final[int]");
        assert_eq!(q.resolved_inner(), &TypeExpr::simple("int"));
        assert_eq!(q.to_type_expr().to_string(), "Deprecated[Final[int]]");
    }

    #[test]
    fn test_stacked_qualifier_rejected() {
        let stacked = TypeExpr::deprecated(TypeExpr::simple("int"), DeprecationMarker::default());
        let err = QualifiedType::new(stacked, DeprecationMarker::default()).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OrderingError {
                found: "Deprecated[Deprecated[int]]".to_string()
            }
        );
    }
}
