//! Parameter guard
//!
//! Wraps a function whose signature has `Deprecated[...]` parameters and
//! emits one signal per deprecated parameter the caller supplied
//! explicitly. Relying on the default never emits.

use super::callable::FunctionDef;
use super::emitter::SignalEmitter;
use crate::features::qualifier::DeprecationMarker;
use crate::features::runtime_wrapper::domain::{
    Arguments, BindError, BoundArguments, ParameterKind, Signature, WrapError,
};
use std::fmt;

pub struct ParameterGuard<F> {
    original: FunctionDef<F>,
    /// Deprecated parameters in signature order
    deprecated: Vec<(String, DeprecationMarker)>,
    emitter: SignalEmitter,
}

impl<F> ParameterGuard<F> {
    /// Every deprecated parameter must have a default, otherwise callers
    /// could never avoid the deprecated argument.
    pub fn new(original: FunctionDef<F>, emitter: SignalEmitter) -> Result<Self, WrapError> {
        let mut deprecated = Vec::new();
        for (param, marker) in original.signature().deprecated_parameters() {
            let variadic = matches!(
                param.kind,
                ParameterKind::VarPositional | ParameterKind::VarKeyword
            );
            if param.default.is_none() && !variadic {
                return Err(WrapError::InvalidWrapTarget {
                    name: subject(original.qualified_name(), &param.name),
                    reason: "deprecated parameter has no default value".to_string(),
                });
            }
            deprecated.push((param.name.clone(), marker.clone()));
        }

        if deprecated.is_empty() {
            return Err(WrapError::NoDeprecatedParameters {
                function: original.qualified_name().to_string(),
            });
        }

        tracing::debug!(
            function = original.qualified_name(),
            parameters = deprecated.len(),
            "installed parameter guard"
        );
        Ok(Self {
            original,
            deprecated,
            emitter,
        })
    }

    pub fn qualified_name(&self) -> &str {
        self.original.qualified_name()
    }

    pub fn signature(&self) -> &Signature {
        self.original.signature()
    }

    pub fn deprecated_parameters(&self) -> impl Iterator<Item = &str> {
        self.deprecated.iter().map(|(name, _)| name.as_str())
    }

    /// Bind, emit for explicitly supplied deprecated parameters, delegate.
    ///
    /// Nothing is emitted when binding fails.
    pub fn call<R>(&self, args: Arguments) -> Result<R, BindError>
    where
        F: Fn(BoundArguments) -> R,
    {
        let bound = self.original.signature().bind(args)?;
        for (name, marker) in &self.deprecated {
            if bound.was_supplied(name) {
                self.emitter
                    .emit(&subject(self.original.qualified_name(), name), marker);
            }
        }
        Ok(self.original.call(bound))
    }
}

impl<F> fmt::Debug for ParameterGuard<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParameterGuard")
            .field("original", &self.original)
            .field("deprecated", &self.deprecated)
            .finish_non_exhaustive()
    }
}

/// `localtime(isdst)`
fn subject(function: &str, parameter: &str) -> String {
    format!("{}({})", function, parameter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::qualifier::TypeExpr;
    use crate::features::runtime_wrapper::domain::Parameter;
    use crate::features::runtime_wrapper::infrastructure::sinks::CollectingSink;
    use serde_json::{json, Value};
    use std::sync::Arc;

    fn isdst() -> Parameter {
        Parameter::positional("isdst").annotated(TypeExpr::deprecated(
            TypeExpr::simple("bool"),
            DeprecationMarker::new("Use `isdst` instead.", "3.12"),
        ))
    }

    fn localtime(
        sink: Arc<CollectingSink>,
    ) -> ParameterGuard<impl Fn(BoundArguments) -> Value> {
        let def = FunctionDef::new(
            "time.localtime",
            Signature::new(vec![Parameter::positional("dt"), isdst().with_default(false)]),
            |bound: BoundArguments| bound.get("isdst").cloned().unwrap_or(Value::Null),
        );
        ParameterGuard::new(def, SignalEmitter::new(sink)).unwrap()
    }

    #[test]
    fn test_default_does_not_emit() {
        let sink = Arc::new(CollectingSink::new());
        let guard = localtime(sink.clone());

        let result = guard.call(Arguments::new().arg("now")).unwrap();
        assert_eq!(result, json!(false));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_explicit_argument_emits_once() {
        let sink = Arc::new(CollectingSink::new());
        let guard = localtime(sink.clone());

        let result = guard
            .call(Arguments::new().arg("now").kwarg("isdst", true))
            .unwrap();
        assert_eq!(result, json!(true));

        let signals = sink.signals();
        assert_eq!(signals.len(), 1);
        assert_eq!(signals[0].subject, "time.localtime(isdst)");
        assert_eq!(
            signals[0].message,
            "`time.localtime(isdst)` is deprecated. Use `isdst` instead."
        );
    }

    #[test]
    fn test_explicit_value_equal_to_default_still_emits() {
        let sink = Arc::new(CollectingSink::new());
        let guard = localtime(sink.clone());

        guard.call(Arguments::new().arg("now").arg(false)).unwrap();
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_bind_failure_emits_nothing() {
        let sink = Arc::new(CollectingSink::new());
        let guard = localtime(sink.clone());

        let err = guard
            .call(Arguments::new().arg("now").kwarg("tz", "UTC"))
            .unwrap_err();
        assert_eq!(err, BindError::UnexpectedKeyword { name: "tz".into() });
        assert!(sink.is_empty());
    }

    #[test]
    fn test_deprecated_parameter_without_default_rejected() {
        let def = FunctionDef::new(
            "time.localtime",
            Signature::new(vec![Parameter::positional("dt"), isdst()]),
            |_: BoundArguments| (),
        );
        let err = ParameterGuard::new(def, SignalEmitter::default()).unwrap_err();
        assert!(matches!(err, WrapError::InvalidWrapTarget { ref name, .. } if name == "time.localtime(isdst)"));
    }

    #[test]
    fn test_no_deprecated_parameters_rejected() {
        let def = FunctionDef::new(
            "f",
            Signature::new(vec![Parameter::positional("x")]),
            |_: BoundArguments| (),
        );
        let err = ParameterGuard::new(def, SignalEmitter::default()).unwrap_err();
        assert_eq!(err, WrapError::NoDeprecatedParameters { function: "f".into() });
    }
}
