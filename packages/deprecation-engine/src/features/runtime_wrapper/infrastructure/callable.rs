//! Function wrappers

use super::emitter::SignalEmitter;
use crate::features::qualifier::DeprecationMarker;
use crate::features::runtime_wrapper::domain::Signature;
use std::fmt;

/// A host function with the metadata a wrapper must preserve
pub struct FunctionDef<F> {
    qualified_name: String,
    signature: Signature,
    func: F,
}

impl<F> FunctionDef<F> {
    pub fn new(qualified_name: impl Into<String>, signature: Signature, func: F) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            signature,
            func,
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        (self.func)(args)
    }
}

impl<F> fmt::Debug for FunctionDef<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionDef")
            .field("qualified_name", &self.qualified_name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Substitute for a deprecated function.
///
/// Same name and signature as the original; every call emits exactly one
/// signal and then delegates, passing arguments and the return value
/// through unchanged.
pub struct DeprecatedCallable<F> {
    original: FunctionDef<F>,
    marker: DeprecationMarker,
    emitter: SignalEmitter,
}

impl<F> DeprecatedCallable<F> {
    pub fn new(original: FunctionDef<F>, marker: DeprecationMarker, emitter: SignalEmitter) -> Self {
        tracing::debug!(function = original.qualified_name(), "installed deprecation wrapper");
        Self {
            original,
            marker,
            emitter,
        }
    }

    pub fn qualified_name(&self) -> &str {
        self.original.qualified_name()
    }

    pub fn signature(&self) -> &Signature {
        self.original.signature()
    }

    pub fn marker(&self) -> &DeprecationMarker {
        &self.marker
    }

    pub fn call<A, R>(&self, args: A) -> R
    where
        F: Fn(A) -> R,
    {
        self.emitter.emit(self.original.qualified_name(), &self.marker);
        self.original.call(args)
    }
}

impl<F> fmt::Debug for DeprecatedCallable<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeprecatedCallable")
            .field("original", &self.original)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}
