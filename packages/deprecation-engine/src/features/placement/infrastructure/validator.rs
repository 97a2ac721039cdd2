//! Placement Validator
//!
//! Decides whether a `Deprecated` qualifier is legal where it appears and,
//! if so, which [`PlacementShape`] applies.
//!
//! Rules by syntactic role:
//! 1. Return type: the inner type must be invocable → `ReturnWrapper`
//! 2. Parameter: must have a default → `ParameterQualifier`
//! 3. Variable / constant / attribute / field: always legal → `ValueQualifier`
//! 4. Overload: at least one sibling must stay undeprecated → `OverloadSelector`
//!
//! Pure and synchronous: the same input always yields the same outcome.

use crate::features::placement::domain::{
    Declaration, DeclarationKind, OverloadGroup, Placement, PlacementShape, TypeScope,
    ValidationError,
};
use crate::features::placement::infrastructure::invocable::is_invocable;
use crate::features::qualifier::{extract_qualifier, QualifiedType, TypeExpr};

/// `Ok(None)` means the declaration carries no qualifier
pub type PlacementResult = Result<Option<Placement>, ValidationError>;

/// Placement Validator
///
/// Borrows the type-parameter scope of the module being analyzed; holds no
/// other state.
#[derive(Debug, Clone, Copy)]
pub struct PlacementValidator<'a> {
    scope: &'a TypeScope,
}

impl<'a> PlacementValidator<'a> {
    pub fn new(scope: &'a TypeScope) -> Self {
        Self { scope }
    }

    /// Validate a single declaration
    pub fn validate(&self, decl: &Declaration) -> PlacementResult {
        let result = match &decl.annotation {
            Some(annotation) => self.check(decl, annotation),
            None => Ok(None),
        };

        match &result {
            Ok(Some(placement)) => tracing::debug!(
                "placement {} -> {}",
                decl.qualified_name,
                placement.shape
            ),
            Ok(None) => {}
            Err(e) => tracing::debug!("placement {} rejected: {}", decl.qualified_name, e.code()),
        }
        result
    }

    /// Validate every signature of an overload group, in order
    pub fn validate_overloads(&self, group: &OverloadGroup) -> Vec<PlacementResult> {
        let all_marked = group.signatures.iter().all(|s| s.marker.is_some());

        group
            .signatures
            .iter()
            .map(|signature| match &signature.marker {
                None => Ok(None),
                // A lone signature is just a deprecated function
                Some(marker) if !group.is_family() => Ok(Some(Placement::declaration(
                    PlacementShape::ReturnWrapper,
                    marker.clone(),
                ))),
                Some(_) if all_marked => Err(ValidationError::AllOverloadsDeprecated {
                    name: group.name.clone(),
                }),
                Some(marker) => Ok(Some(Placement::declaration(
                    PlacementShape::OverloadSelector,
                    marker.clone(),
                ))),
            })
            .collect()
    }

    fn check(&self, decl: &Declaration, annotation: &TypeExpr) -> PlacementResult {
        match &decl.kind {
            DeclarationKind::Return => self.check_return(decl, annotation),
            DeclarationKind::Parameter { has_default } => {
                self.check_parameter(decl, annotation, *has_default)
            }
            DeclarationKind::Value { .. } => Ok(self
                .qualifier(decl, annotation)?
                .map(|q| Placement::typed(PlacementShape::ValueQualifier, q))),
            DeclarationKind::TypeParameter { bound } => {
                self.check_type_parameter(decl, annotation, bound.as_ref())
            }
        }
    }

    fn check_return(&self, decl: &Declaration, annotation: &TypeExpr) -> PlacementResult {
        let Some(qualified) = self.qualifier(decl, annotation)? else {
            return Ok(None);
        };

        if !is_invocable(qualified.resolved_inner(), self.scope) {
            return Err(ValidationError::IllegalReturnQualifier {
                found: qualified.inner().to_string(),
            });
        }
        Ok(Some(Placement::typed(PlacementShape::ReturnWrapper, qualified)))
    }

    fn check_parameter(
        &self,
        decl: &Declaration,
        annotation: &TypeExpr,
        has_default: bool,
    ) -> PlacementResult {
        let Some(qualified) = self.qualifier(decl, annotation)? else {
            return Ok(None);
        };

        if !has_default {
            return Err(ValidationError::MissingDefaultError {
                parameter: decl.qualified_name.clone(),
            });
        }
        Ok(Some(Placement::typed(
            PlacementShape::ParameterQualifier,
            qualified,
        )))
    }

    /// `Deprecated` applied to a type parameter itself.
    ///
    /// The bare form qualifies the parameter; legality follows the return
    /// rule applied to the parameter's bound.
    fn check_type_parameter(
        &self,
        decl: &Declaration,
        annotation: &TypeExpr,
        bound: Option<&TypeExpr>,
    ) -> PlacementResult {
        let itself = TypeExpr::type_var(decl.name());
        let Some(qualified) = extract_qualifier(annotation, Some(&itself))? else {
            return Ok(None);
        };

        match bound {
            Some(bound) if is_invocable(bound, self.scope) => Ok(Some(Placement::typed(
                PlacementShape::ReturnWrapper,
                qualified,
            ))),
            Some(bound) => Err(ValidationError::IllegalReturnQualifier {
                found: bound.to_string(),
            }),
            None => Err(ValidationError::IllegalReturnQualifier {
                found: decl.name().to_string(),
            }),
        }
    }

    fn qualifier(
        &self,
        decl: &Declaration,
        annotation: &TypeExpr,
    ) -> Result<Option<QualifiedType>, ValidationError> {
        extract_qualifier(annotation, decl.declared_type.as_ref())
    }
}
