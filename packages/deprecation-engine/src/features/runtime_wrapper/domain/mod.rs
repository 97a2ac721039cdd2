pub mod arguments;
pub mod error;
pub mod signal;
pub mod signature;

pub use arguments::{Arguments, BoundArguments};
pub use error::{BindError, WrapError};
pub use signal::{DeprecationSignal, SignalCategory};
pub use signature::{Parameter, ParameterKind, Signature};
