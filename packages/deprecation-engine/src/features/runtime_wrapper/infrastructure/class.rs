//! Class wrappers
//!
//! A class is modelled as a named constructor producing instances of `K`.
//! Instances of a deprecated class are ordinary `K` values, so attribute
//! access and method dispatch behave exactly as for the unwrapped class.

use super::emitter::SignalEmitter;
use crate::features::qualifier::DeprecationMarker;
use crate::features::runtime_wrapper::domain::Signature;
use std::fmt;
use std::marker::PhantomData;

pub struct ClassDef<K, F> {
    qualified_name: String,
    signature: Signature,
    constructor: F,
    _instance: PhantomData<fn() -> K>,
}

impl<K, F> ClassDef<K, F> {
    pub fn new(qualified_name: impl Into<String>, signature: Signature, constructor: F) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            signature,
            constructor,
            _instance: PhantomData,
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Constructor signature
    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    pub fn instantiate<A>(&self, args: A) -> K
    where
        F: Fn(A) -> K,
    {
        (self.constructor)(args)
    }
}

impl<K, F> fmt::Debug for ClassDef<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassDef")
            .field("qualified_name", &self.qualified_name)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// Substitute for a deprecated class; emits once per instantiation
pub struct DeprecatedClass<K, F> {
    class: ClassDef<K, F>,
    marker: DeprecationMarker,
    emitter: SignalEmitter,
}

impl<K, F> DeprecatedClass<K, F> {
    pub fn new(class: ClassDef<K, F>, marker: DeprecationMarker, emitter: SignalEmitter) -> Self {
        tracing::debug!(class = class.qualified_name(), "installed deprecation wrapper");
        Self {
            class,
            marker,
            emitter,
        }
    }

    pub fn qualified_name(&self) -> &str {
        self.class.qualified_name()
    }

    pub fn signature(&self) -> &Signature {
        self.class.signature()
    }

    pub fn marker(&self) -> &DeprecationMarker {
        &self.marker
    }

    /// The unwrapped class; constructing through it emits nothing
    pub fn class(&self) -> &ClassDef<K, F> {
        &self.class
    }

    pub fn instantiate<A>(&self, args: A) -> K
    where
        F: Fn(A) -> K,
    {
        self.emitter.emit(self.class.qualified_name(), &self.marker);
        self.class.instantiate(args)
    }
}

impl<K, F> fmt::Debug for DeprecatedClass<K, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeprecatedClass")
            .field("class", &self.class)
            .field("marker", &self.marker)
            .finish_non_exhaustive()
    }
}
