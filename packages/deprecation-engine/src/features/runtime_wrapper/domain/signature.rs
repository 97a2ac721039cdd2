//! Call signature model
//!
//! Carried unchanged from an original construct to its wrapper so that
//! parameter names, kinds, defaults, and annotations stay introspectable.

use super::arguments::{Arguments, BoundArguments};
use super::error::BindError;
use crate::features::qualifier::{DeprecationMarker, TypeExpr};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterKind {
    PositionalOnly,
    PositionalOrKeyword,
    KeywordOnly,
    /// `*args`
    VarPositional,
    /// `**kwargs`
    VarKeyword,
}

impl ParameterKind {
    fn accepts_positional(&self) -> bool {
        matches!(
            self,
            ParameterKind::PositionalOnly | ParameterKind::PositionalOrKeyword
        )
    }

    fn accepts_keyword(&self) -> bool {
        matches!(
            self,
            ParameterKind::PositionalOrKeyword | ParameterKind::KeywordOnly
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub kind: ParameterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotation: Option<TypeExpr>,
}

impl Parameter {
    pub fn new(name: impl Into<String>, kind: ParameterKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            annotation: None,
        }
    }

    pub fn positional(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOrKeyword)
    }

    pub fn positional_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::PositionalOnly)
    }

    pub fn keyword_only(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::KeywordOnly)
    }

    pub fn var_positional(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VarPositional)
    }

    pub fn var_keyword(name: impl Into<String>) -> Self {
        Self::new(name, ParameterKind::VarKeyword)
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn annotated(mut self, annotation: TypeExpr) -> Self {
        self.annotation = Some(annotation);
        self
    }

    /// Marker when the annotation is `Deprecated[...]`
    pub fn deprecation(&self) -> Option<&DeprecationMarker> {
        self.annotation.as_ref().and_then(TypeExpr::outer_marker)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ParameterKind::VarPositional => write!(f, "*")?,
            ParameterKind::VarKeyword => write!(f, "**")?,
            _ => {}
        }
        write!(f, "{}", self.name)?;
        if let Some(annotation) = &self.annotation {
            write!(f, ": {}", annotation)?;
        }
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Signature {
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_annotation: Option<TypeExpr>,
}

impl Signature {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self {
            parameters,
            return_annotation: None,
        }
    }

    pub fn returns(mut self, annotation: TypeExpr) -> Self {
        self.return_annotation = Some(annotation);
        self
    }

    pub fn parameter(&self, name: &str) -> Option<&Parameter> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Parameters annotated `Deprecated[...]`, with their markers
    pub fn deprecated_parameters(&self) -> impl Iterator<Item = (&Parameter, &DeprecationMarker)> {
        self.parameters
            .iter()
            .filter_map(|p| p.deprecation().map(|marker| (p, marker)))
    }

    /// Bind call-site arguments, filling defaults.
    ///
    /// Mirrors ordinary call semantics: positionals fill positional
    /// parameters in order, extras go to `*args`, keywords match by name,
    /// unknown keywords go to `**kwargs`.
    pub fn bind(&self, args: Arguments) -> Result<BoundArguments, BindError> {
        let mut slots: Vec<Option<Value>> = vec![None; self.parameters.len()];
        let mut supplied = HashSet::new();
        let mut extra_keywords = Map::new();

        let positional_capacity = self
            .parameters
            .iter()
            .filter(|p| p.kind.accepts_positional())
            .count();
        let var_positional = self
            .parameters
            .iter()
            .position(|p| p.kind == ParameterKind::VarPositional);
        let var_keyword = self
            .parameters
            .iter()
            .position(|p| p.kind == ParameterKind::VarKeyword);

        let got = args.positional.len();
        let mut positional = args.positional.into_iter();
        for (slot, param) in slots.iter_mut().zip(&self.parameters) {
            if !param.kind.accepts_positional() {
                continue;
            }
            match positional.next() {
                Some(value) => {
                    *slot = Some(value);
                    supplied.insert(param.name.clone());
                }
                None => break,
            }
        }

        let rest: Vec<Value> = positional.collect();
        match var_positional {
            Some(index) => {
                if !rest.is_empty() {
                    supplied.insert(self.parameters[index].name.clone());
                }
                slots[index] = Some(Value::Array(rest));
            }
            None if !rest.is_empty() => {
                return Err(BindError::TooManyPositional {
                    expected: positional_capacity,
                    got,
                });
            }
            None => {}
        }

        for (name, value) in args.keyword {
            let target = self
                .parameters
                .iter()
                .position(|p| p.name == name && p.kind.accepts_keyword());
            match target {
                Some(index) => {
                    if slots[index].is_some() {
                        return Err(BindError::DuplicateArgument { name });
                    }
                    slots[index] = Some(value);
                    supplied.insert(name);
                }
                None if var_keyword.is_some() => {
                    if extra_keywords.contains_key(&name) {
                        return Err(BindError::DuplicateArgument { name });
                    }
                    extra_keywords.insert(name, value);
                }
                None => return Err(BindError::UnexpectedKeyword { name }),
            }
        }

        if let Some(index) = var_keyword {
            if !extra_keywords.is_empty() {
                supplied.insert(self.parameters[index].name.clone());
            }
            slots[index] = Some(Value::Object(extra_keywords));
        }

        let mut values = Vec::with_capacity(self.parameters.len());
        for (slot, param) in slots.into_iter().zip(&self.parameters) {
            let value = match slot {
                Some(value) => value,
                None => match &param.default {
                    Some(default) => default.clone(),
                    None => {
                        return Err(BindError::MissingArgument {
                            name: param.name.clone(),
                        })
                    }
                },
            };
            values.push((param.name.clone(), value));
        }

        Ok(BoundArguments::new(values, supplied))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, ")")?;
        if let Some(ret) = &self.return_annotation {
            write!(f, " -> {}", ret)?;
        }
        Ok(())
    }
}
