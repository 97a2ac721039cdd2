//! Deprecation factory
//!
//! Holds one marker and stamps wrappers with it, the way a decorator
//! factory would.

use super::callable::{DeprecatedCallable, FunctionDef};
use super::class::{ClassDef, DeprecatedClass};
use super::emitter::SignalEmitter;
use crate::features::qualifier::DeprecationMarker;

#[derive(Debug, Clone)]
pub struct Deprecator {
    marker: DeprecationMarker,
    emitter: SignalEmitter,
}

impl Deprecator {
    pub fn new(marker: DeprecationMarker, emitter: SignalEmitter) -> Self {
        Self { marker, emitter }
    }

    /// For a construct that now lives under `new_name`
    pub fn renamed(new_name: impl Into<String>, version: impl Into<String>, emitter: SignalEmitter) -> Self {
        Self::new(DeprecationMarker::renamed(new_name, version), emitter)
    }

    pub fn marker(&self) -> &DeprecationMarker {
        &self.marker
    }

    pub fn function<F>(&self, original: FunctionDef<F>) -> DeprecatedCallable<F> {
        DeprecatedCallable::new(original, self.marker.clone(), self.emitter.clone())
    }

    pub fn class<K, F>(&self, original: ClassDef<K, F>) -> DeprecatedClass<K, F> {
        DeprecatedClass::new(original, self.marker.clone(), self.emitter.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::runtime_wrapper::domain::Signature;
    use crate::features::runtime_wrapper::infrastructure::sinks::CollectingSink;
    use std::sync::Arc;

    #[test]
    fn test_renamed_factory() {
        let sink = Arc::new(CollectingSink::new());
        let deprecate = Deprecator::renamed("new_name", "1.4", SignalEmitter::new(sink.clone()));

        let old = deprecate.function(FunctionDef::new("pkg.old_name", Signature::default(), |(): ()| "ok"));
        let cls = deprecate.class(ClassDef::new("pkg.OldThing", Signature::default(), |(): ()| 1u8));

        assert_eq!(old.call(()), "ok");
        assert_eq!(cls.instantiate(()), 1);

        let messages: Vec<String> = sink.signals().into_iter().map(|s| s.message).collect();
        assert_eq!(
            messages,
            vec![
                "`pkg.old_name` is deprecated. It has been renamed to `new_name`.",
                "`pkg.OldThing` is deprecated. It has been renamed to `new_name`.",
            ]
        );
    }
}
