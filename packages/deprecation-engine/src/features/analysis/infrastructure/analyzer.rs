//! Deprecation Analyzer
//!
//! Validates every declaration and overload signature of a module and
//! collects all outcomes; one failure never stops the pass.

use crate::config::AnalysisConfig;
use crate::features::analysis::domain::{AnalysisReport, DeclarationReport, ModuleDecls};
use crate::features::placement::{Declaration, PlacementValidator};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct DeprecationAnalyzer {
    #[cfg_attr(not(feature = "parallel"), allow(dead_code))]
    config: AnalysisConfig,
}

impl DeprecationAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn analyze(&self, module: &ModuleDecls) -> AnalysisReport {
        let validator = PlacementValidator::new(&module.scope);

        let mut reports = self.validate_declarations(&validator, &module.declarations);
        for group in &module.overload_groups {
            let results = validator.validate_overloads(group);
            reports.extend(
                results
                    .into_iter()
                    .enumerate()
                    .map(|(index, result)| DeclarationReport::from_overload(group, index, result)),
            );
        }

        let report = AnalysisReport::new(module.name.clone(), reports);
        tracing::info!(
            module = %module.name,
            declarations = report.declarations.len(),
            deprecated = report.deprecated().count(),
            errors = report.errors().count(),
            "deprecation analysis complete"
        );
        report
    }

    /// Analyze several modules; reports keep input order
    pub fn analyze_all(&self, modules: &[ModuleDecls]) -> Vec<AnalysisReport> {
        modules.iter().map(|module| self.analyze(module)).collect()
    }

    #[cfg(feature = "parallel")]
    fn validate_declarations(
        &self,
        validator: &PlacementValidator<'_>,
        declarations: &[Declaration],
    ) -> Vec<DeclarationReport> {
        if !self.config.parallel {
            return validate_sequential(validator, declarations);
        }
        declarations
            .par_iter()
            .map(|decl| DeclarationReport::from_declaration(decl, validator.validate(decl)))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    fn validate_declarations(
        &self,
        validator: &PlacementValidator<'_>,
        declarations: &[Declaration],
    ) -> Vec<DeclarationReport> {
        validate_sequential(validator, declarations)
    }
}

fn validate_sequential(
    validator: &PlacementValidator<'_>,
    declarations: &[Declaration],
) -> Vec<DeclarationReport> {
    declarations
        .iter()
        .map(|decl| DeclarationReport::from_declaration(decl, validator.validate(decl)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::placement::{OverloadGroup, PlacementShape, ValidationError, ValueKind};
    use crate::features::qualifier::{DeprecationMarker, TypeExpr};

    fn marker() -> DeprecationMarker {
        DeprecationMarker::new("Use `bar`.", "1.0")
    }

    fn module() -> ModuleDecls {
        ModuleDecls::new("m")
            .declare(Declaration::value(
                "m.MAGIC",
                ValueKind::Constant,
                TypeExpr::deprecated(TypeExpr::final_of(TypeExpr::simple("int")), marker()),
            ))
            .declare(Declaration::return_type(
                "m.foo",
                TypeExpr::deprecated(TypeExpr::simple("int"), marker()),
            ))
            .declare(Declaration::value(
                "m.plain",
                ValueKind::Variable,
                TypeExpr::simple("int"),
            ))
            .overloads(
                OverloadGroup::new("m.f")
                    .with_signature("(x: int)")
                    .with_deprecated_signature("(x: str)", marker()),
            )
    }

    #[test]
    fn test_collects_every_outcome() {
        for parallel in [true, false] {
            let report = DeprecationAnalyzer::new(AnalysisConfig { parallel }).analyze(&module());

            assert_eq!(report.declarations.len(), 5);
            assert_eq!(
                report.lookup("m.MAGIC").and_then(|d| d.shape),
                Some(PlacementShape::ValueQualifier)
            );
            assert_eq!(
                report.lookup("m.foo").and_then(|d| d.error.clone()),
                Some(ValidationError::IllegalReturnQualifier {
                    found: "int".into()
                })
            );
            assert!(!report.lookup("m.plain").map_or(true, |d| d.has_marker));
            assert_eq!(
                report.lookup("m.f(x: str)").and_then(|d| d.shape),
                Some(PlacementShape::OverloadSelector)
            );
            assert_eq!(report.diagnostics().len(), 1);
        }
    }
}
