//! Runtime annotation checks used to pick an overload
//!
//! Answers "could this JSON value inhabit this annotation". Names the
//! checker does not know accept every value.

use crate::features::qualifier::TypeExpr;
use serde_json::Value;

pub fn accepts(annotation: &TypeExpr, value: &Value) -> bool {
    match annotation {
        TypeExpr::Any | TypeExpr::TypeVar(_) => true,
        TypeExpr::None => value.is_null(),
        TypeExpr::Simple(name) => accepts_named(name, value),
        TypeExpr::Union(members) => members.iter().any(|member| accepts(member, value)),
        TypeExpr::Generic { base, params } => accepts_generic(base, params, value),
        // JSON values are never invocable
        TypeExpr::Callable { .. } | TypeExpr::ClassObject(_) => false,
        TypeExpr::Final(inner) | TypeExpr::ClassVar(inner) => {
            inner.as_deref().map_or(true, |inner| accepts(inner, value))
        }
        TypeExpr::Deprecated { inner, .. } => {
            inner.as_deref().map_or(true, |inner| accepts(inner, value))
        }
    }
}

fn accepts_named(name: &str, value: &Value) -> bool {
    match base_name(name) {
        "int" => value.is_i64() || value.is_u64(),
        "float" => value.is_number(),
        "str" => value.is_string(),
        "bool" => value.is_boolean(),
        "list" | "List" | "tuple" | "Tuple" | "Sequence" => value.is_array(),
        "dict" | "Dict" | "Mapping" => value.is_object(),
        _ => true,
    }
}

fn accepts_generic(base: &str, params: &[TypeExpr], value: &Value) -> bool {
    match (base_name(base), value) {
        ("list" | "List" | "Sequence", Value::Array(items)) => match params {
            [item] => items.iter().all(|v| accepts(item, v)),
            _ => true,
        },
        ("tuple" | "Tuple", Value::Array(items)) => {
            items.len() == params.len() && params.iter().zip(items).all(|(ty, v)| accepts(ty, v))
        }
        ("dict" | "Dict" | "Mapping", Value::Object(entries)) => match params {
            [_, item] => entries.values().all(|v| accepts(item, v)),
            _ => true,
        },
        ("list" | "List" | "Sequence" | "tuple" | "Tuple" | "dict" | "Dict" | "Mapping", _) => {
            false
        }
        _ => true,
    }
}

fn base_name(name: &str) -> &str {
    name.rsplit('.').next().unwrap_or(name)
}
