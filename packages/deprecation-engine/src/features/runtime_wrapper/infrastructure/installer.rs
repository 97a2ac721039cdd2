//! Wrapper installer
//!
//! Installs wrappers only for declarations the analyzer accepted with a
//! wrappable shape. With `wrap.fail_fast` off, an unsuitable target is
//! logged and wrapped anyway.

use super::callable::{DeprecatedCallable, FunctionDef};
use super::class::{ClassDef, DeprecatedClass};
use super::emitter::SignalEmitter;
use super::parameter_guard::ParameterGuard;
use crate::config::WrapConfig;
use crate::features::analysis::DeclarationReport;
use crate::features::placement::PlacementShape;
use crate::features::qualifier::DeprecationMarker;
use crate::features::runtime_wrapper::domain::WrapError;

#[derive(Debug, Clone)]
pub struct WrapInstaller {
    emitter: SignalEmitter,
    fail_fast: bool,
}

impl WrapInstaller {
    pub fn new(emitter: SignalEmitter, config: &WrapConfig) -> Self {
        Self {
            emitter: emitter.with_config(config),
            fail_fast: config.fail_fast,
        }
    }

    pub fn emitter(&self) -> &SignalEmitter {
        &self.emitter
    }

    pub fn install_function<F>(
        &self,
        report: &DeclarationReport,
        original: FunctionDef<F>,
    ) -> Result<DeprecatedCallable<F>, WrapError> {
        let marker = self.admit(
            report,
            &[PlacementShape::ReturnWrapper, PlacementShape::OverloadSelector],
        )?;
        Ok(DeprecatedCallable::new(original, marker, self.emitter.clone()))
    }

    pub fn install_class<K, F>(
        &self,
        report: &DeclarationReport,
        original: ClassDef<K, F>,
    ) -> Result<DeprecatedClass<K, F>, WrapError> {
        let marker = self.admit(report, &[PlacementShape::ReturnWrapper])?;
        Ok(DeprecatedClass::new(original, marker, self.emitter.clone()))
    }

    /// Markers come from the signature's own annotations
    pub fn install_parameters<F>(&self, original: FunctionDef<F>) -> Result<ParameterGuard<F>, WrapError> {
        ParameterGuard::new(original, self.emitter.clone())
    }

    fn admit(
        &self,
        report: &DeclarationReport,
        shapes: &[PlacementShape],
    ) -> Result<DeprecationMarker, WrapError> {
        let marker = report
            .marker
            .clone()
            .ok_or_else(|| WrapError::InvalidWrapTarget {
                name: report.qualified_name.clone(),
                reason: "declaration carries no deprecation marker".to_string(),
            })?;

        let problem = match (&report.error, report.shape) {
            (Some(error), _) => Some(error.to_string()),
            (None, Some(shape)) if !shape.is_wrappable() => {
                Some(format!("`{}` placements are never wrapped", shape))
            }
            (None, Some(shape)) if !shapes.contains(&shape) => {
                Some(format!("`{}` placements cannot be wrapped here", shape))
            }
            (None, Some(_)) => None,
            (None, None) => Some("declaration has no placement".to_string()),
        };

        if let Some(reason) = problem {
            if self.fail_fast {
                return Err(WrapError::InvalidWrapTarget {
                    name: report.qualified_name.clone(),
                    reason,
                });
            }
            tracing::warn!(
                target_name = %report.qualified_name,
                %reason,
                "wrapping invalid deprecation target"
            );
        }
        Ok(marker)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::placement::ValidationError;
    use crate::features::runtime_wrapper::domain::Signature;
    use crate::features::runtime_wrapper::infrastructure::sinks::CollectingSink;
    use crate::shared::models::Span;
    use std::sync::Arc;

    fn report(shape: Option<PlacementShape>, error: Option<ValidationError>) -> DeclarationReport {
        DeclarationReport {
            qualified_name: "pkg.f".to_string(),
            span: Span::zero(),
            has_marker: true,
            marker: Some(DeprecationMarker::new("Use `g`.", "1.0")),
            shape,
            error,
        }
    }

    fn installer(fail_fast: bool, sink: Arc<CollectingSink>) -> WrapInstaller {
        WrapInstaller::new(
            SignalEmitter::new(sink),
            &WrapConfig {
                fail_fast,
                stacklevel_offset: 0,
            },
        )
    }

    #[test]
    fn test_valid_return_wrapper_installs() {
        let sink = Arc::new(CollectingSink::new());
        let wrapped = installer(true, sink.clone())
            .install_function(
                &report(Some(PlacementShape::ReturnWrapper), None),
                FunctionDef::new("pkg.f", Signature::default(), |(): ()| 1),
            )
            .unwrap();
        assert_eq!(wrapped.call(()), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_fail_fast_rejects_invalid_target() {
        let sink = Arc::new(CollectingSink::new());
        let err = installer(true, sink)
            .install_function(
                &report(None, Some(ValidationError::InferenceError)),
                FunctionDef::new("pkg.f", Signature::default(), |(): ()| 1),
            )
            .unwrap_err();
        assert!(matches!(err, WrapError::InvalidWrapTarget { ref name, .. } if name == "pkg.f"));
    }

    #[test]
    fn test_value_shape_is_not_wrappable() {
        let sink = Arc::new(CollectingSink::new());
        let result = installer(true, sink).install_class(
            &report(Some(PlacementShape::ValueQualifier), None),
            ClassDef::<(), _>::new("pkg.C",Signature::default(), |(): ()| ()),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_value_shape_refused_by_function_installer() {
        let sink = Arc::new(CollectingSink::new());
        let err = installer(true, sink)
            .install_function(
                &report(Some(PlacementShape::ValueQualifier), None),
                FunctionDef::new("pkg.f", Signature::default(), |(): ()| 1),
            )
            .unwrap_err();
        assert!(
            matches!(err, WrapError::InvalidWrapTarget { ref reason, .. } if reason.contains("never wrapped"))
        );
    }

    #[test]
    fn test_lenient_mode_wraps_anyway() {
        let sink = Arc::new(CollectingSink::new());
        let wrapped = installer(false, sink.clone())
            .install_function(
                &report(None, Some(ValidationError::InferenceError)),
                FunctionDef::new("pkg.f", Signature::default(), |(): ()| 1),
            )
            .unwrap();
        assert_eq!(wrapped.call(()), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_unmarked_declaration_rejected_in_any_mode() {
        let sink = Arc::new(CollectingSink::new());
        let mut unmarked = report(None, None);
        unmarked.has_marker = false;
        unmarked.marker = None;
        let result = installer(false, sink).install_function(
            &unmarked,
            FunctionDef::new("pkg.f", Signature::default(), |(): ()| 1),
        );
        assert!(result.is_err());
    }
}
