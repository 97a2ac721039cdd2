pub mod declaration;
pub mod overload;
pub mod scope;
pub mod shape;

pub use crate::features::qualifier::domain::ValidationError;
pub use declaration::{Declaration, DeclarationKind, ValueKind};
pub use overload::{OverloadGroup, OverloadSignature};
pub use scope::TypeScope;
pub use shape::{Placement, PlacementShape};
