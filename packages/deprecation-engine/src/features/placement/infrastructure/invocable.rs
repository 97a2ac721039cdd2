//! Invocability check
//!
//! A type is invocable when it denotes something that can be called or
//! constructed:
//! - a callable type: `Callable[..., R]`
//! - a class object: `type[X]`
//! - a type variable whose upper bound is invocable
//! - a union whose every member is invocable
//!
//! `Any` is deliberately not invocable; the check fails closed.

use crate::features::placement::domain::TypeScope;
use crate::features::qualifier::TypeExpr;
use std::collections::HashSet;

pub fn is_invocable(ty: &TypeExpr, scope: &TypeScope) -> bool {
    let mut visiting = HashSet::new();
    check(ty, scope, &mut visiting)
}

fn check<'a>(ty: &'a TypeExpr, scope: &'a TypeScope, visiting: &mut HashSet<&'a str>) -> bool {
    match ty.strip_type_qualifiers() {
        TypeExpr::Callable { .. } | TypeExpr::ClassObject(_) => true,
        TypeExpr::TypeVar(name) => {
            // Cyclic bounds (T bound to U bound to T) are not invocable
            if !visiting.insert(name.as_str()) {
                return false;
            }
            let invocable = scope
                .bound_of(name)
                .map_or(false, |bound| check(bound, scope, visiting));
            visiting.remove(name.as_str());
            invocable
        }
        TypeExpr::Union(members) => {
            !members.is_empty() && members.iter().all(|m| check(m, scope, visiting))
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int() -> TypeExpr {
        TypeExpr::simple("int")
    }

    #[test]
    fn test_direct_invocables() {
        let scope = TypeScope::new();
        assert!(is_invocable(&TypeExpr::callable_any(int()), &scope));
        assert!(is_invocable(&TypeExpr::class_object(TypeExpr::Any), &scope));
        assert!(!is_invocable(&int(), &scope));
        assert!(!is_invocable(&TypeExpr::Any, &scope));
        assert!(!is_invocable(&TypeExpr::None, &scope));
    }

    #[test]
    fn test_type_var_bounds() {
        let scope = TypeScope::new()
            .with_type_var("T", Some(TypeExpr::callable_any(int())))
            .with_type_var("K", Some(TypeExpr::class_object(TypeExpr::Any)))
            .with_type_var("U", Some(TypeExpr::type_var("T")))
            .with_type_var("N", Some(int()))
            .with_type_var("Free", None);

        assert!(is_invocable(&TypeExpr::type_var("T"), &scope));
        assert!(is_invocable(&TypeExpr::type_var("K"), &scope));
        assert!(is_invocable(&TypeExpr::type_var("U"), &scope));
        assert!(!is_invocable(&TypeExpr::type_var("N"), &scope));
        assert!(!is_invocable(&TypeExpr::type_var("Free"), &scope));
        assert!(!is_invocable(&TypeExpr::type_var("Undeclared"), &scope));
    }

    #[test]
    fn test_cyclic_bounds_terminate() {
        let scope = TypeScope::new()
            .with_type_var("A", Some(TypeExpr::type_var("B")))
            .with_type_var("B", Some(TypeExpr::type_var("A")));
        assert!(!is_invocable(&TypeExpr::type_var("A"), &scope));
    }

    #[test]
    fn test_unions() {
        let scope = TypeScope::new();
        let all_callable = TypeExpr::union(vec![
            TypeExpr::callable_any(int()),
            TypeExpr::class_object(TypeExpr::simple("Model")),
        ]);
        assert!(is_invocable(&all_callable, &scope));

        let optional = TypeExpr::optional(TypeExpr::callable_any(int()));
        assert!(!is_invocable(&optional, &scope));
    }
}
