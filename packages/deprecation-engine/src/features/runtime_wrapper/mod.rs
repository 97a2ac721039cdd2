//! Runtime Wrapper
//!
//! Substitutes deprecated functions, classes, and functions with
//! deprecated parameters by wrappers that emit a deprecation signal and
//! then delegate to the original unchanged.

pub mod domain;
pub mod infrastructure;
pub mod ports;

pub use domain::{
    Arguments, BindError, BoundArguments, DeprecationSignal, Parameter, ParameterKind,
    SignalCategory, Signature, WrapError,
};
pub use infrastructure::{
    ClassDef, CollectingSink, DeprecatedCallable, DeprecatedClass, Deprecator, FixedStacklevel,
    FunctionDef, NullSink, ParameterGuard, SignalEmitter, TracingSink, WrapInstaller,
};
pub use ports::{SignalSink, StacklevelProvider};
