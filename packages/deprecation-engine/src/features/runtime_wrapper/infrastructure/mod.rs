pub mod callable;
pub mod class;
pub mod deprecator;
pub mod emitter;
pub mod installer;
pub mod parameter_guard;
pub mod sinks;

pub use callable::{DeprecatedCallable, FunctionDef};
pub use class::{ClassDef, DeprecatedClass};
pub use deprecator::Deprecator;
pub use emitter::SignalEmitter;
pub use installer::WrapInstaller;
pub use parameter_guard::ParameterGuard;
pub use sinks::{CollectingSink, FixedStacklevel, NullSink, TracingSink};
