//! Record schema
//!
//! Field-level marker lookup for container/validation frameworks. Whether
//! assigning a deprecated field warns or fails is the framework's call;
//! nothing here intercepts access.

use crate::features::qualifier::{extract_qualifier, DeprecationMarker, TypeExpr};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordField {
    pub name: String,
    pub annotation: TypeExpr,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub name: String,
    pub fields: Vec<RecordField>,
}

impl RecordSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: impl Into<String>, annotation: TypeExpr) -> Self {
        self.fields.push(RecordField {
            name: name.into(),
            annotation,
        });
        self
    }

    /// Marker of `field` when its annotation is `Deprecated[...]` on the outside
    pub fn is_deprecated(&self, field: &str) -> Option<&DeprecationMarker> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .and_then(|f| f.annotation.outer_marker())
    }

    pub fn deprecated_fields(&self) -> impl Iterator<Item = (&str, &DeprecationMarker)> {
        self.fields
            .iter()
            .filter_map(|f| f.annotation.outer_marker().map(|m| (f.name.as_str(), m)))
    }

    /// Field type with the qualifier removed; `None` for unknown fields
    pub fn field_type(&self, field: &str) -> Option<TypeExpr> {
        let annotation = &self.fields.iter().find(|f| f.name == field)?.annotation;
        match extract_qualifier(annotation, None) {
            Ok(Some(qualified)) => Some(qualified.inner().clone()),
            _ => Some(annotation.clone()),
        }
    }
}
