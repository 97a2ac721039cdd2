pub mod acceptance;
pub mod error;

pub use acceptance::accepts;
pub use error::DispatchError;
