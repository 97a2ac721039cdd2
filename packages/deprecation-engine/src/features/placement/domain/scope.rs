//! Type-parameter scope
//!
//! Maps type-variable names to their declared upper bound so the validator
//! can decide whether `Deprecated[T]` denotes something invocable.

use crate::features::qualifier::{AnnotationParser, TypeExpr};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeScope {
    bounds: BTreeMap<String, Option<TypeExpr>>,
}

impl TypeScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a type variable with an optional upper bound
    pub fn with_type_var(mut self, name: impl Into<String>, bound: Option<TypeExpr>) -> Self {
        self.declare(name, bound);
        self
    }

    pub fn declare(&mut self, name: impl Into<String>, bound: Option<TypeExpr>) {
        self.bounds.insert(name.into(), bound);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bounds.contains_key(name)
    }

    /// Upper bound of `name`; `None` when undeclared or unbounded
    pub fn bound_of(&self, name: &str) -> Option<&TypeExpr> {
        self.bounds.get(name).and_then(Option::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bounds.keys().map(String::as_str)
    }

    /// Annotation parser that recognizes this scope's type variables
    pub fn parser(&self) -> AnnotationParser {
        AnnotationParser::new().with_type_vars(self.names())
    }
}
