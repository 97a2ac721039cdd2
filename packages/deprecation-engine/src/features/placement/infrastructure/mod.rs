pub mod invocable;
pub mod validator;

pub use invocable::is_invocable;
pub use validator::{PlacementResult, PlacementValidator};
