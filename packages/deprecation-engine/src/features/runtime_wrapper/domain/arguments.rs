//! Call arguments
//!
//! Dynamic argument values are `serde_json::Value`s.

use serde_json::{Map, Value};
use std::collections::HashSet;

/// Arguments as supplied at a call site
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    pub positional: Vec<Value>,
    /// In call-site order; duplicates are detected at bind time
    pub keyword: Vec<(String, Value)>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    pub fn kwarg(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.keyword.push((name.into(), value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keyword.is_empty()
    }
}

/// Arguments after binding to a signature, defaults applied
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArguments {
    values: Vec<(String, Value)>,
    supplied: HashSet<String>,
}

impl BoundArguments {
    pub(crate) fn new(values: Vec<(String, Value)>, supplied: HashSet<String>) -> Self {
        Self { values, supplied }
    }

    /// Value bound to `name`; var-positional binds an array, var-keyword an object
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values
            .iter()
            .find(|(param, _)| param == name)
            .map(|(_, value)| value)
    }

    /// Was `name` given explicitly at the call site (as opposed to defaulted)
    pub fn was_supplied(&self, name: &str) -> bool {
        self.supplied.contains(name)
    }

    /// Bound values in signature order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All bound values as a JSON object
    pub fn to_object(&self) -> Map<String, Value> {
        self.values.iter().cloned().collect()
    }
}
