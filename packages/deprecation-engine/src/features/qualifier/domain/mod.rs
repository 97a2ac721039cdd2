pub mod error;
pub mod marker;
pub mod qualified_type;
pub mod type_expr;

pub use error::ValidationError;
pub use marker::DeprecationMarker;
pub use qualified_type::QualifiedType;
pub use type_expr::TypeExpr;
