//! Placement shapes
//!
//! How a qualifier is attached to a declaration. Determined structurally by
//! the validator, never declared by the author.

use crate::features::qualifier::{DeprecationMarker, QualifiedType};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementShape {
    /// `x: Deprecated[int]` on a variable, constant, attribute, or field
    ValueQualifier,
    /// `-> Deprecated[Callable[..., R]]`, or a qualified type parameter
    ReturnWrapper,
    /// `param: Deprecated[bool] = False`
    ParameterQualifier,
    /// One overload among several sharing a name
    OverloadSelector,
}

impl PlacementShape {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementShape::ValueQualifier => "value_qualifier",
            PlacementShape::ReturnWrapper => "return_wrapper",
            PlacementShape::ParameterQualifier => "parameter_qualifier",
            PlacementShape::OverloadSelector => "overload_selector",
        }
    }

    /// Whether a runtime wrapper may be installed for this shape.
    ///
    /// Value reads and writes are left to the owning container system.
    pub fn is_wrappable(&self) -> bool {
        !matches!(self, PlacementShape::ValueQualifier)
    }
}

impl fmt::Display for PlacementShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Successful validation outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub shape: PlacementShape,
    pub marker: DeprecationMarker,
    /// Absent for declaration-level (overload) placements
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qualified: Option<QualifiedType>,
}

impl Placement {
    /// Type-level placement
    pub fn typed(shape: PlacementShape, qualified: QualifiedType) -> Self {
        Self {
            shape,
            marker: qualified.marker().clone(),
            qualified: Some(qualified),
        }
    }

    /// Declaration-level placement
    pub fn declaration(shape: PlacementShape, marker: DeprecationMarker) -> Self {
        Self {
            shape,
            marker,
            qualified: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_value_placements_are_unwrappable() {
        assert!(!PlacementShape::ValueQualifier.is_wrappable());
        for shape in [
            PlacementShape::ReturnWrapper,
            PlacementShape::ParameterQualifier,
            PlacementShape::OverloadSelector,
        ] {
            assert!(shape.is_wrappable(), "{} should be wrappable", shape);
        }
    }
}
