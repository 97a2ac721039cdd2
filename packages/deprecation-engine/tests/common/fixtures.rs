//! Test fixtures
//!
//! Declarations modelled on the usual ways a library deprecates things:
//! constants, decorator factories, classes, parameters, and overloads.

use deprecation_engine::features::qualifier::AnnotationParser;
use deprecation_engine::{
    Declaration, DeprecationMarker, ModuleDecls, OverloadGroup, Parameter, Signature, TypeExpr,
    TypeScope, ValueKind,
};

pub fn marker() -> DeprecationMarker {
    DeprecationMarker::new("Use `my_function` instead.", "0.20.4")
}

/// `T: Callable[..., int]` and `_T_T: type[Any]`
pub fn callable_scope() -> TypeScope {
    TypeScope::new()
        .with_type_var("T", Some(TypeExpr::callable_any(TypeExpr::simple("int"))))
        .with_type_var("_T_T", Some(TypeExpr::class_object(TypeExpr::Any)))
}

/// Parse `text` with the fixture marker and scope
pub fn annotation(text: &str) -> TypeExpr {
    parser().parse(text).unwrap()
}

pub fn parser() -> AnnotationParser {
    callable_scope().parser().with_marker(marker())
}

/// `def localtime(dt: datetime, isdst: Deprecated[bool] = False) -> datetime`
pub fn localtime_signature() -> Signature {
    Signature::new(vec![
        Parameter::positional("dt").annotated(TypeExpr::simple("datetime")),
        Parameter::positional("isdst")
            .annotated(annotation("Deprecated[bool]"))
            .with_default(false),
    ])
    .returns(TypeExpr::simple("datetime"))
}

/// A module mixing valid and invalid placements
pub fn sample_module() -> ModuleDecls {
    ModuleDecls::new("examples")
        .with_scope(callable_scope())
        .declare(Declaration::value(
            "examples.MAGIC_NUMBER",
            ValueKind::Constant,
            annotation("Deprecated[int]"),
        ))
        .declare(Declaration::value(
            "examples.MAGIC_NUMBER_FINAL",
            ValueKind::Constant,
            annotation("Deprecated[Final[int]]"),
        ))
        .declare(Declaration::value(
            "examples.MAGIC_NUMBER_NO_INNER",
            ValueKind::Constant,
            annotation("Deprecated"),
        ))
        .declare(Declaration::return_type(
            "examples.foo_bare",
            annotation("Deprecated"),
        ))
        .declare(Declaration::return_type(
            "examples.foo_int",
            annotation("Deprecated[int]"),
        ))
        .declare(Declaration::return_type(
            "examples.foo_nested",
            annotation("Callable[..., Deprecated[int]]"),
        ))
        .declare(Declaration::return_type(
            "examples.foo_callable",
            annotation("Deprecated[Callable[..., int]]"),
        ))
        .declare(Declaration::return_type(
            "examples.foo_typevar",
            annotation("Deprecated[T]"),
        ))
        .declare(Declaration::return_type(
            "examples.foo_klass",
            annotation("Deprecated[_T_T]"),
        ))
        .declare(Declaration::parameter(
            "examples.localtime.isdst",
            annotation("Deprecated[bool]"),
            true,
        ))
        .declare(Declaration::parameter(
            "examples.strict_localtime.isdst",
            annotation("Deprecated[bool]"),
            false,
        ))
        .overloads(
            OverloadGroup::new("examples.f")
                .with_signature("(x: int) -> int")
                .with_deprecated_signature("(x: str) -> int", marker()),
        )
        .overloads(
            OverloadGroup::new("examples.g")
                .with_deprecated_signature("(x: int) -> int", marker())
                .with_deprecated_signature("(x: str) -> int", marker()),
        )
}
