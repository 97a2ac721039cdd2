//! Qualifier application
//!
//! Two-phase resolution of `Deprecated`:
//! 1. Collect the declaration's own unqualified type, if any
//! 2. Apply the qualifier, inferring the inner type from (1) for the bare form
//!    and for a bare `Final` / `ClassVar` inside it
//!
//! Fails closed with `InferenceError` rather than defaulting to `Any`.

use crate::features::qualifier::domain::{
    DeprecationMarker, QualifiedType, TypeExpr, ValidationError,
};

/// Apply the qualifier with zero (`inner == None`) or one type argument.
///
/// `context` is the surrounding declaration's declared type.
pub fn qualify(
    inner: Option<TypeExpr>,
    marker: DeprecationMarker,
    context: Option<&TypeExpr>,
) -> Result<QualifiedType, ValidationError> {
    let inner = match inner {
        Some(TypeExpr::Final(None)) => TypeExpr::final_of(infer_wrapped(context)?),
        Some(TypeExpr::ClassVar(None)) => TypeExpr::class_var_of(infer_wrapped(context)?),
        Some(inner) => inner,
        None => infer_inner(context)?,
    };
    QualifiedType::new(inner, marker)
}

/// Read the qualifier back out of an annotation.
///
/// Returns `Ok(None)` for annotations that do not mention `Deprecated`.
pub fn extract_qualifier(
    annotation: &TypeExpr,
    context: Option<&TypeExpr>,
) -> Result<Option<QualifiedType>, ValidationError> {
    match annotation {
        TypeExpr::Deprecated { inner, marker } => qualify(
            inner.as_deref().cloned(),
            marker.clone(),
            context,
        )
        .map(Some),
        other if other.contains_deprecated() => Err(ValidationError::OrderingError {
            found: other.to_string(),
        }),
        _ => Ok(None),
    }
}

fn infer_inner(context: Option<&TypeExpr>) -> Result<TypeExpr, ValidationError> {
    match context {
        // A declared type that is itself qualified contributes its inner type
        Some(TypeExpr::Deprecated {
            inner: Some(inner), ..
        }) => Ok((**inner).clone()),
        Some(TypeExpr::Deprecated { inner: None, .. }) | None => {
            Err(ValidationError::InferenceError)
        }
        Some(declared) => Ok(declared.clone()),
    }
}

/// Inner type for `Deprecated[Final]` / `Deprecated[ClassVar]`
fn infer_wrapped(context: Option<&TypeExpr>) -> Result<TypeExpr, ValidationError> {
    match infer_inner(context)?.strip_type_qualifiers() {
        TypeExpr::Final(None) | TypeExpr::ClassVar(None) => Err(ValidationError::InferenceError),
        resolved => Ok(resolved.clone()),
    }
}
