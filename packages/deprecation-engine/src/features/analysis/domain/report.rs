//! Analysis report
//!
//! Per-declaration tuple `(has_marker, marker, shape, error)` that a
//! separate pass reads to flag usage sites.

use crate::features::placement::{
    Declaration, OverloadGroup, PlacementResult, PlacementShape, ValidationError,
};
use crate::features::qualifier::DeprecationMarker;
use crate::shared::models::Span;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclarationReport {
    pub qualified_name: String,
    pub span: Span,
    pub has_marker: bool,
    pub marker: Option<DeprecationMarker>,
    pub shape: Option<PlacementShape>,
    pub error: Option<ValidationError>,
}

impl DeclarationReport {
    pub fn from_declaration(declaration: &Declaration, result: PlacementResult) -> Self {
        let fallback = declaration
            .annotation
            .as_ref()
            .and_then(|annotation| annotation.find_marker())
            .cloned();
        Self::build(
            declaration.qualified_name.clone(),
            declaration.span,
            fallback,
            result,
        )
    }

    pub fn from_overload(group: &OverloadGroup, index: usize, result: PlacementResult) -> Self {
        let signature = group.signatures.get(index);
        Self::build(
            group.signature_name(index),
            signature.map(|s| s.span).unwrap_or_default(),
            signature.and_then(|s| s.marker.clone()),
            result,
        )
    }

    /// `fallback` is the marker as written, reported even when placement failed
    fn build(
        qualified_name: String,
        span: Span,
        fallback: Option<DeprecationMarker>,
        result: PlacementResult,
    ) -> Self {
        let (marker, shape, error) = match result {
            Ok(Some(placement)) => (Some(placement.marker), Some(placement.shape), None),
            Ok(None) => (None, None, None),
            Err(error) => (fallback, None, Some(error)),
        };
        Self {
            qualified_name,
            span,
            has_marker: marker.is_some() || error.is_some(),
            marker,
            shape,
            error,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// A validation error located at its declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: String,
    pub message: String,
    pub qualified_name: String,
    pub span: Span,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Declarations built without a source location carry a zero span
        if !self.span.is_zero() {
            write!(f, "{} ", self.span)?;
        }
        write!(f, "[{}] {}: {}", self.code, self.qualified_name, self.message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub module: String,
    /// Declarations first, then overload signatures, each in input order
    pub declarations: Vec<DeclarationReport>,
}

impl AnalysisReport {
    pub fn new(module: impl Into<String>, declarations: Vec<DeclarationReport>) -> Self {
        Self {
            module: module.into(),
            declarations,
        }
    }

    pub fn lookup(&self, qualified_name: &str) -> Option<&DeclarationReport> {
        self.declarations
            .iter()
            .find(|d| d.qualified_name == qualified_name)
    }

    /// Declarations that carry a marker, valid or not
    pub fn deprecated(&self) -> impl Iterator<Item = &DeclarationReport> {
        self.declarations.iter().filter(|d| d.has_marker)
    }

    pub fn errors(&self) -> impl Iterator<Item = (&DeclarationReport, &ValidationError)> {
        self.declarations
            .iter()
            .filter_map(|d| d.error.as_ref().map(|e| (d, e)))
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.errors()
            .map(|(decl, error)| Diagnostic {
                code: error.code().to_string(),
                message: error.to_string(),
                qualified_name: decl.qualified_name.clone(),
                span: decl.span,
            })
            .collect()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::placement::{Placement, ValueKind};
    use crate::features::qualifier::TypeExpr;

    #[test]
    fn test_error_report_keeps_written_marker() {
        let marker = DeprecationMarker::new("Use `y`.", "1.0");
        let decl = Declaration::value(
            "m.x",
            ValueKind::Variable,
            TypeExpr::bare_deprecated(marker.clone()),
        );
        let report =
            DeclarationReport::from_declaration(&decl, Err(ValidationError::InferenceError));
        assert!(report.has_marker);
        assert_eq!(report.marker, Some(marker));
        assert_eq!(report.shape, None);
        assert!(!report.is_valid());
    }

    #[test]
    fn test_unmarked_report() {
        let decl = Declaration::value("m.x", ValueKind::Variable, TypeExpr::simple("int"));
        let report = DeclarationReport::from_declaration(&decl, Ok(None));
        assert!(!report.has_marker);
        assert_eq!(report.marker, None);
    }

    #[test]
    fn test_diagnostics_and_lookup() {
        let marker = DeprecationMarker::default();
        let ok = DeclarationReport::from_declaration(
            &Declaration::value("m.a", ValueKind::Constant, TypeExpr::simple("int")),
            Ok(Some(Placement::declaration(PlacementShape::ValueQualifier, marker))),
        );
        let bad = DeclarationReport::from_declaration(
            &Declaration::parameter("m.f.p", TypeExpr::simple("int"), false),
            Err(ValidationError::MissingDefaultError {
                parameter: "m.f.p".into(),
            }),
        );
        let report = AnalysisReport::new("m", vec![ok, bad]);

        assert_eq!(report.lookup("m.a").and_then(|d| d.shape), Some(PlacementShape::ValueQualifier));
        let diagnostics = report.diagnostics();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "missing-default-error");
        assert_eq!(diagnostics[0].qualified_name, "m.f.p");
        assert!(report.to_json().unwrap().contains("\"missing-default-error\""));
        assert!(report.has_errors());
        assert!(diagnostics[0].to_string().starts_with("[missing-default-error] m.f.p: "));

        let clean = AnalysisReport::new("m", vec![report.declarations[0].clone()]);
        assert!(!clean.has_errors());
    }

    #[test]
    fn test_diagnostic_display_includes_known_location() {
        let diagnostic = Diagnostic {
            code: "inference-error".to_string(),
            message: "cannot infer".to_string(),
            qualified_name: "m.x".to_string(),
            span: Span::line(3),
        };
        assert_eq!(diagnostic.to_string(), "3:0 [inference-error] m.x: cannot infer");
    }
}
