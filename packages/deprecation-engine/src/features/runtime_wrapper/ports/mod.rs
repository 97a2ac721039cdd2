//! Runtime Wrapper Ports
//!
//! Host-side collaborators the wrapper emits through. The engine calls them
//! and never inspects a result.

use crate::features::runtime_wrapper::domain::DeprecationSignal;

/// Host signal sink
///
/// Implementors serialize their own writes if needed; wrappers may emit
/// from many threads at once.
pub trait SignalSink: Send + Sync {
    fn emit(&self, signal: &DeprecationSignal);
}

/// Stacklevel provider used to attribute a signal to its call site
pub trait StacklevelProvider: Send + Sync {
    fn current_call_depth(&self) -> i32;
}

impl<F> StacklevelProvider for F
where
    F: Fn() -> i32 + Send + Sync,
{
    fn current_call_depth(&self) -> i32 {
        self()
    }
}
