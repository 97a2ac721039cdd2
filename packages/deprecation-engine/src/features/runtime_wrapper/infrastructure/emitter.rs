//! Signal emitter
//!
//! Shared by every wrapper: builds the signal from a marker and hands it to
//! the host sink. Emission happens-before delegation to the original.

use crate::config::WrapConfig;
use crate::features::qualifier::DeprecationMarker;
use crate::features::runtime_wrapper::domain::DeprecationSignal;
use crate::features::runtime_wrapper::infrastructure::sinks::{FixedStacklevel, TracingSink};
use crate::features::runtime_wrapper::ports::{SignalSink, StacklevelProvider};
use std::fmt;
use std::sync::Arc;

#[derive(Clone)]
pub struct SignalEmitter {
    sink: Arc<dyn SignalSink>,
    stacklevel: Arc<dyn StacklevelProvider>,
    offset: i32,
}

impl SignalEmitter {
    pub fn new(sink: Arc<dyn SignalSink>) -> Self {
        Self {
            sink,
            stacklevel: Arc::new(FixedStacklevel::default()),
            offset: 0,
        }
    }

    /// Emitter that logs through `tracing`
    pub fn tracing() -> Self {
        Self::new(Arc::new(TracingSink))
    }

    pub fn with_stacklevel(mut self, provider: Arc<dyn StacklevelProvider>) -> Self {
        self.stacklevel = provider;
        self
    }

    /// Apply `wrap.stacklevel_offset`
    pub fn with_config(mut self, config: &WrapConfig) -> Self {
        self.offset = i32::try_from(config.stacklevel_offset).unwrap_or(i32::MAX);
        self
    }

    pub fn emit(&self, subject: &str, marker: &DeprecationMarker) {
        let depth = self
            .stacklevel
            .current_call_depth()
            .saturating_add(self.offset);
        self.sink.emit(&DeprecationSignal::new(subject, marker, depth));
    }
}

impl Default for SignalEmitter {
    fn default() -> Self {
        Self::tracing()
    }
}

impl fmt::Debug for SignalEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignalEmitter")
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::runtime_wrapper::infrastructure::sinks::CollectingSink;

    #[test]
    fn test_stacklevel_offset_applied() {
        let sink = Arc::new(CollectingSink::new());
        let config = WrapConfig {
            fail_fast: false,
            stacklevel_offset: 3,
        };
        let emitter = SignalEmitter::new(sink.clone())
            .with_stacklevel(Arc::new(|| 4))
            .with_config(&config);

        emitter.emit("f", &DeprecationMarker::new("", "1.0"));
        let signals = sink.signals();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].stacklevel, 7);
    }
}
