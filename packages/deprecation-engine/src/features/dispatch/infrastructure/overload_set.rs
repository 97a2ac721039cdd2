//! Overload dispatcher
//!
//! Resolves a call against same-named candidates in declaration order.
//! Deprecated candidates are stored already wrapped, so a signal fires only
//! when resolution actually selects one.

use crate::features::dispatch::domain::{accepts, DispatchError};
use crate::features::placement::OverloadGroup;
use crate::features::qualifier::DeprecationMarker;
use crate::features::runtime_wrapper::domain::{
    Arguments, BoundArguments, ParameterKind, Signature,
};
use crate::features::runtime_wrapper::infrastructure::{
    DeprecatedCallable, FunctionDef, SignalEmitter,
};
use serde_json::Value;
use std::fmt;

pub type OverloadFn<R> = Box<dyn Fn(BoundArguments) -> R + Send + Sync>;

enum Candidate<R> {
    Plain(FunctionDef<OverloadFn<R>>),
    Deprecated(DeprecatedCallable<OverloadFn<R>>),
}

impl<R> Candidate<R> {
    fn signature(&self) -> &Signature {
        match self {
            Candidate::Plain(def) => def.signature(),
            Candidate::Deprecated(wrapped) => wrapped.signature(),
        }
    }

    fn marker(&self) -> Option<&DeprecationMarker> {
        match self {
            Candidate::Plain(_) => None,
            Candidate::Deprecated(wrapped) => Some(wrapped.marker()),
        }
    }

    fn invoke(&self, bound: BoundArguments) -> R {
        match self {
            Candidate::Plain(def) => def.call(bound),
            Candidate::Deprecated(wrapped) => wrapped.call(bound),
        }
    }
}

pub struct OverloadSet<R> {
    name: String,
    candidates: Vec<Candidate<R>>,
    emitter: SignalEmitter,
}

impl<R> OverloadSet<R> {
    pub fn new(name: impl Into<String>, emitter: SignalEmitter) -> Self {
        Self {
            name: name.into(),
            candidates: Vec::new(),
            emitter,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn overload<F>(mut self, signature: Signature, func: F) -> Self
    where
        F: Fn(BoundArguments) -> R + Send + Sync + 'static,
    {
        let def = FunctionDef::new(self.name.clone(), signature, Box::new(func) as OverloadFn<R>);
        self.candidates.push(Candidate::Plain(def));
        self
    }

    pub fn deprecated_overload<F>(
        mut self,
        signature: Signature,
        marker: DeprecationMarker,
        func: F,
    ) -> Self
    where
        F: Fn(BoundArguments) -> R + Send + Sync + 'static,
    {
        let def = FunctionDef::new(self.name.clone(), signature, Box::new(func) as OverloadFn<R>);
        let wrapped = DeprecatedCallable::new(def, marker, self.emitter.clone());
        self.candidates.push(Candidate::Deprecated(wrapped));
        self
    }

    /// Index and bound arguments of the first matching candidate
    pub fn resolve(&self, args: &Arguments) -> Result<(usize, BoundArguments), DispatchError> {
        self.candidates
            .iter()
            .enumerate()
            .find_map(|(index, candidate)| {
                let bound = candidate.signature().bind(args.clone()).ok()?;
                matches_annotations(candidate.signature(), &bound).then_some((index, bound))
            })
            .ok_or_else(|| DispatchError::NoMatchingOverload {
                name: self.name.clone(),
                candidates: self.candidates.len(),
            })
    }

    pub fn call(&self, args: Arguments) -> Result<R, DispatchError> {
        let (index, bound) = self.resolve(&args)?;
        let candidate = &self.candidates[index];
        tracing::debug!(
            function = %self.name,
            overload = index,
            deprecated = candidate.marker().is_some(),
            "resolved overload"
        );
        Ok(candidate.invoke(bound))
    }

    /// The family as seen by the placement validator
    pub fn group(&self) -> OverloadGroup {
        self.candidates
            .iter()
            .fold(OverloadGroup::new(self.name.clone()), |group, candidate| {
                let label = candidate.signature().to_string();
                match candidate.marker() {
                    Some(marker) => group.with_deprecated_signature(label, marker.clone()),
                    None => group.with_signature(label),
                }
            })
    }
}

impl<R> fmt::Debug for OverloadSet<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverloadSet")
            .field("name", &self.name)
            .field("candidates", &self.candidates.len())
            .finish_non_exhaustive()
    }
}

/// Explicitly supplied values must inhabit their parameter annotations
fn matches_annotations(signature: &Signature, bound: &BoundArguments) -> bool {
    signature.parameters.iter().all(|param| {
        let (Some(annotation), Some(value)) = (&param.annotation, bound.get(&param.name)) else {
            return true;
        };
        if !bound.was_supplied(&param.name) {
            return true;
        }
        match (param.kind, value) {
            (ParameterKind::VarPositional, Value::Array(items)) => {
                items.iter().all(|item| accepts(annotation, item))
            }
            (ParameterKind::VarKeyword, Value::Object(entries)) => {
                entries.values().all(|item| accepts(annotation, item))
            }
            _ => accepts(annotation, value),
        }
    })
}
