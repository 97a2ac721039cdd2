//! Overload group domain model

use crate::features::qualifier::DeprecationMarker;
use crate::shared::models::Span;
use serde::{Deserialize, Serialize};

/// One signature of an overload family
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadSignature {
    /// Parameter list text, e.g. `(x: str) -> int`
    pub label: String,
    /// Set when this whole signature is deprecated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<DeprecationMarker>,
    #[serde(default)]
    pub span: Span,
}

/// Same-named signatures in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverloadGroup {
    pub name: String,
    pub signatures: Vec<OverloadSignature>,
}

impl OverloadGroup {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            signatures: Vec::new(),
        }
    }

    pub fn with_signature(mut self, label: impl Into<String>) -> Self {
        self.signatures.push(OverloadSignature {
            label: label.into(),
            marker: None,
            span: Span::zero(),
        });
        self
    }

    pub fn with_deprecated_signature(
        mut self,
        label: impl Into<String>,
        marker: DeprecationMarker,
    ) -> Self {
        self.signatures.push(OverloadSignature {
            label: label.into(),
            marker: Some(marker),
            span: Span::zero(),
        });
        self
    }

    /// A single signature is an ordinary function, not an overload family
    pub fn is_family(&self) -> bool {
        self.signatures.len() > 1
    }

    pub fn marked_count(&self) -> usize {
        self.signatures.iter().filter(|s| s.marker.is_some()).count()
    }

    /// Report name of the signature at `index`
    pub fn signature_name(&self, index: usize) -> String {
        match self.signatures.get(index) {
            Some(signature) => format!("{}{}", self.name, signature.label),
            None => self.name.clone(),
        }
    }
}
