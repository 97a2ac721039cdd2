//! Qualifier
//!
//! The `Deprecated[X]` type constructor: a marker that is transparent to
//! ordinary type reasoning but can be read back by the placement validator
//! and the runtime wrapper.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{extract_qualifier, qualify};
pub use domain::{DeprecationMarker, QualifiedType, TypeExpr, ValidationError};
pub use infrastructure::{parse_annotation, AnnotationParser};
