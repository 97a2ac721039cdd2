//! Signal sink and stacklevel adapters

use crate::features::runtime_wrapper::domain::DeprecationSignal;
use crate::features::runtime_wrapper::ports::{SignalSink, StacklevelProvider};
use parking_lot::Mutex;

/// Logs every signal through `tracing` at WARN level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl SignalSink for TracingSink {
    fn emit(&self, signal: &DeprecationSignal) {
        tracing::warn!(
            category = signal.category.as_str(),
            version = %signal.version,
            stacklevel = signal.stacklevel,
            "{}",
            signal.message
        );
    }
}

/// Drops every signal
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl SignalSink for NullSink {
    fn emit(&self, _signal: &DeprecationSignal) {}
}

/// Records signals in memory, in emission order
#[derive(Debug, Default)]
pub struct CollectingSink {
    signals: Mutex<Vec<DeprecationSignal>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far
    pub fn signals(&self) -> Vec<DeprecationSignal> {
        self.signals.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.signals.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.lock().is_empty()
    }

    /// Drain recorded signals
    pub fn take(&self) -> Vec<DeprecationSignal> {
        std::mem::take(&mut *self.signals.lock())
    }
}

impl SignalSink for CollectingSink {
    fn emit(&self, signal: &DeprecationSignal) {
        self.signals.lock().push(signal.clone());
    }
}

/// Constant attribution depth
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedStacklevel(pub i32);

impl Default for FixedStacklevel {
    /// The wrapper frame plus the caller
    fn default() -> Self {
        Self(2)
    }
}

impl StacklevelProvider for FixedStacklevel {
    fn current_call_depth(&self) -> i32 {
        self.0
    }
}
