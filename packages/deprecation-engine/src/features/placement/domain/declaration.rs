//! Declaration domain model
//!
//! A declaration is anything an author can attach `Deprecated` to: a return
//! type, a parameter, a plain value, or a type parameter.

use crate::features::qualifier::{DeprecationMarker, TypeExpr};
use crate::shared::models::Span;
use serde::{Deserialize, Serialize};

/// Kind of value declaration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Variable,
    Constant,
    ClassAttribute,
    /// Field of a record/container type
    Field,
}

/// Syntactic role of the annotated position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DeclarationKind {
    /// Declared return type of a function or method
    Return,
    /// A single parameter within a signature
    Parameter { has_default: bool },
    /// Variable, constant, class attribute, or field
    Value { kind: ValueKind },
    /// A type parameter itself (not a use of it)
    TypeParameter { bound: Option<TypeExpr> },
}

impl DeclarationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationKind::Return => "return",
            DeclarationKind::Parameter { .. } => "parameter",
            DeclarationKind::Value { kind } => match kind {
                ValueKind::Variable => "variable",
                ValueKind::Constant => "constant",
                ValueKind::ClassAttribute => "class_attribute",
                ValueKind::Field => "field",
            },
            DeclarationKind::TypeParameter { .. } => "type_parameter",
        }
    }
}

/// An annotated declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Declaration {
    /// Dotted name, e.g. `module.Class.attr` or `module.func`
    pub qualified_name: String,
    pub kind: DeclarationKind,
    /// The annotation as written; may contain `Deprecated`
    pub annotation: Option<TypeExpr>,
    /// The declaration's own declared type, used to infer bare `Deprecated`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<TypeExpr>,
    #[serde(default)]
    pub span: Span,
}

impl Declaration {
    pub fn new(qualified_name: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            kind,
            annotation: None,
            declared_type: None,
            span: Span::zero(),
        }
    }

    pub fn value(qualified_name: impl Into<String>, kind: ValueKind, annotation: TypeExpr) -> Self {
        Self::new(qualified_name, DeclarationKind::Value { kind }).annotated(annotation)
    }

    /// Return-type position of `function`
    pub fn return_type(function: impl Into<String>, annotation: TypeExpr) -> Self {
        Self::new(function, DeclarationKind::Return).annotated(annotation)
    }

    pub fn parameter(
        qualified_name: impl Into<String>,
        annotation: TypeExpr,
        has_default: bool,
    ) -> Self {
        Self::new(qualified_name, DeclarationKind::Parameter { has_default }).annotated(annotation)
    }

    pub fn type_parameter(
        name: impl Into<String>,
        bound: Option<TypeExpr>,
        annotation: TypeExpr,
    ) -> Self {
        Self::new(name, DeclarationKind::TypeParameter { bound }).annotated(annotation)
    }

    pub fn annotated(mut self, annotation: TypeExpr) -> Self {
        self.annotation = Some(annotation);
        self
    }

    pub fn with_declared_type(mut self, declared_type: TypeExpr) -> Self {
        self.declared_type = Some(declared_type);
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attach `marker` to every `Deprecated` node of the annotation
    pub fn with_marker(mut self, marker: &DeprecationMarker) -> Self {
        if let Some(annotation) = self.annotation.as_mut() {
            annotation.set_markers(marker);
        }
        self
    }

    /// Last segment of the qualified name
    pub fn name(&self) -> &str {
        self.qualified_name
            .rsplit('.')
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Does the annotation mention `Deprecated` anywhere
    pub fn is_marked(&self) -> bool {
        self.annotation
            .as_ref()
            .map_or(false, TypeExpr::contains_deprecated)
    }
}
