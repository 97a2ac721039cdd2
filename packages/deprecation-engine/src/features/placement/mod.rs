//! Placement Validator
//!
//! Legality and shape rules for where `Deprecated` may be attached.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    Declaration, DeclarationKind, OverloadGroup, OverloadSignature, Placement, PlacementShape,
    TypeScope, ValidationError, ValueKind,
};
pub use infrastructure::{is_invocable, PlacementResult, PlacementValidator};
