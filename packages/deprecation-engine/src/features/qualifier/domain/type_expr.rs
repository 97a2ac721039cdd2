//! Type expression model
//!
//! Annotation-level representation of the types a declaration can carry:
//! - Plain and generic types: `int`, `list[int]`
//! - Unions: `int | None`
//! - Callables: `Callable[[int], str]`, `Callable[..., int]`
//! - Class objects: `type[Model]`
//! - Type variables: `T`
//! - Type qualifiers: `Final`, `ClassVar`, `Deprecated`
//!
//! `Deprecated` carries its [`DeprecationMarker`] inside the expression so
//! static analysis data never has to be patched onto runtime objects.

use super::marker::DeprecationMarker;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Type expression
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum TypeExpr {
    /// Named type: int, str, MyClass
    Simple(String),
    /// Any type (top type)
    Any,
    /// None type
    None,
    /// Generic type: list[T], dict[K, V]
    Generic { base: String, params: Vec<TypeExpr> },
    /// Union type: int | str | None
    Union(Vec<TypeExpr>),
    /// Callable type; `params == None` is the `...` form
    Callable {
        params: Option<Vec<TypeExpr>>,
        ret: Box<TypeExpr>,
    },
    /// Class object: type[X]
    ClassObject(Box<TypeExpr>),
    /// Type variable: T
    TypeVar(String),
    /// Final or Final[X]
    Final(Option<Box<TypeExpr>>),
    /// ClassVar or ClassVar[X]
    ClassVar(Option<Box<TypeExpr>>),
    /// Deprecated or Deprecated[X]
    Deprecated {
        inner: Option<Box<TypeExpr>>,
        marker: DeprecationMarker,
    },
}

impl TypeExpr {
    pub fn simple(name: impl Into<String>) -> Self {
        TypeExpr::Simple(name.into())
    }

    pub fn generic(base: impl Into<String>, params: Vec<TypeExpr>) -> Self {
        TypeExpr::Generic {
            base: base.into(),
            params,
        }
    }

    /// Create union type (flattened, deduplicated, single member collapsed)
    pub fn union(types: Vec<TypeExpr>) -> Self {
        let mut flattened = Vec::new();
        for ty in types {
            match ty {
                TypeExpr::Union(inner) => flattened.extend(inner),
                other => flattened.push(other),
            }
        }

        let mut seen = HashSet::new();
        let mut unique: Vec<TypeExpr> = flattened
            .into_iter()
            .filter(|ty| seen.insert(ty.clone()))
            .collect();

        if unique.len() == 1 {
            return unique.remove(0);
        }
        TypeExpr::Union(unique)
    }

    /// `X | None`
    pub fn optional(inner: TypeExpr) -> Self {
        Self::union(vec![inner, TypeExpr::None])
    }

    pub fn callable(params: Vec<TypeExpr>, ret: TypeExpr) -> Self {
        TypeExpr::Callable {
            params: Some(params),
            ret: Box::new(ret),
        }
    }

    /// `Callable[..., R]`
    pub fn callable_any(ret: TypeExpr) -> Self {
        TypeExpr::Callable {
            params: None,
            ret: Box::new(ret),
        }
    }

    pub fn class_object(inner: TypeExpr) -> Self {
        TypeExpr::ClassObject(Box::new(inner))
    }

    pub fn type_var(name: impl Into<String>) -> Self {
        TypeExpr::TypeVar(name.into())
    }

    pub fn final_of(inner: TypeExpr) -> Self {
        TypeExpr::Final(Some(Box::new(inner)))
    }

    pub fn class_var_of(inner: TypeExpr) -> Self {
        TypeExpr::ClassVar(Some(Box::new(inner)))
    }

    /// `Deprecated[inner]`
    pub fn deprecated(inner: TypeExpr, marker: DeprecationMarker) -> Self {
        TypeExpr::Deprecated {
            inner: Some(Box::new(inner)),
            marker,
        }
    }

    /// Bare `Deprecated`; the inner type comes from the declaration context
    pub fn bare_deprecated(marker: DeprecationMarker) -> Self {
        TypeExpr::Deprecated {
            inner: None,
            marker,
        }
    }

    /// Is the outermost node a `Deprecated` qualifier
    pub fn is_deprecated(&self) -> bool {
        matches!(self, TypeExpr::Deprecated { .. })
    }

    /// Does `Deprecated` appear anywhere in this expression
    pub fn contains_deprecated(&self) -> bool {
        self.is_deprecated() || self.children().any(TypeExpr::contains_deprecated)
    }

    /// Marker of the outermost `Deprecated` node
    pub fn outer_marker(&self) -> Option<&DeprecationMarker> {
        match self {
            TypeExpr::Deprecated { marker, .. } => Some(marker),
            _ => None,
        }
    }

    /// First marker found in depth-first order
    pub fn find_marker(&self) -> Option<&DeprecationMarker> {
        self.outer_marker()
            .or_else(|| self.children().find_map(TypeExpr::find_marker))
    }

    /// Replace the marker of every `Deprecated` node
    pub fn set_markers(&mut self, new_marker: &DeprecationMarker) {
        if let TypeExpr::Deprecated { marker, .. } = self {
            *marker = new_marker.clone();
        }
        for child in self.children_mut() {
            child.set_markers(new_marker);
        }
    }

    /// Strip `Final[X]` / `ClassVar[X]` wrappers down to `X`.
    ///
    /// Bare `Final` / `ClassVar` have nothing to strip and are returned as is.
    pub fn strip_type_qualifiers(&self) -> &TypeExpr {
        match self {
            TypeExpr::Final(Some(inner)) | TypeExpr::ClassVar(Some(inner)) => {
                inner.strip_type_qualifiers()
            }
            other => other,
        }
    }

    /// Direct sub-expressions
    pub fn children(&self) -> Box<dyn Iterator<Item = &TypeExpr> + '_> {
        match self {
            TypeExpr::Generic { params, .. } => Box::new(params.iter()),
            TypeExpr::Union(members) => Box::new(members.iter()),
            TypeExpr::Callable { params, ret } => Box::new(
                params
                    .iter()
                    .flat_map(|p| p.iter())
                    .chain(std::iter::once(&**ret)),
            ),
            TypeExpr::ClassObject(inner) => Box::new(std::iter::once(&**inner)),
            TypeExpr::Final(inner)
            | TypeExpr::ClassVar(inner)
            | TypeExpr::Deprecated { inner, .. } => Box::new(inner.iter().map(|b| &**b)),
            TypeExpr::Simple(_) | TypeExpr::Any | TypeExpr::None | TypeExpr::TypeVar(_) => {
                Box::new(std::iter::empty())
            }
        }
    }

    fn children_mut(&mut self) -> Vec<&mut TypeExpr> {
        match self {
            TypeExpr::Generic { params, .. } => params.iter_mut().collect(),
            TypeExpr::Union(members) => members.iter_mut().collect(),
            TypeExpr::Callable { params, ret } => {
                let mut children: Vec<&mut TypeExpr> =
                    params.iter_mut().flat_map(|p| p.iter_mut()).collect();
                children.push(&mut **ret);
                children
            }
            TypeExpr::ClassObject(inner) => vec![&mut **inner],
            TypeExpr::Final(inner)
            | TypeExpr::ClassVar(inner)
            | TypeExpr::Deprecated { inner, .. } => {
                inner.iter_mut().map(|b| &mut **b).collect()
            }
            TypeExpr::Simple(_) | TypeExpr::Any | TypeExpr::None | TypeExpr::TypeVar(_) => {
                Vec::new()
            }
        }
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, items: &[TypeExpr], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "{}", sep)?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

fn write_wrapper(f: &mut fmt::Formatter<'_>, name: &str, inner: &Option<Box<TypeExpr>>) -> fmt::Result {
    match inner {
        Some(inner) => write!(f, "{}[{}]", name, inner),
        None => write!(f, "{}", name),
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Simple(name) => write!(f, "{}", name),
            TypeExpr::Any => write!(f, "Any"),
            TypeExpr::None => write!(f, "None"),
            TypeExpr::Generic { base, params } => {
                write!(f, "{}", base)?;
                if !params.is_empty() {
                    write!(f, "[")?;
                    write_list(f, params, ", ")?;
                    write!(f, "]")?;
                }
                Ok(())
            }
            TypeExpr::Union(members) => write_list(f, members, " | "),
            TypeExpr::Callable { params, ret } => match params {
                Some(params) => {
                    write!(f, "Callable[[")?;
                    write_list(f, params, ", ")?;
                    write!(f, "], {}]", ret)
                }
                None => write!(f, "Callable[..., {}]", ret),
            },
            TypeExpr::ClassObject(inner) => write!(f, "type[{}]", inner),
            TypeExpr::TypeVar(name) => write!(f, "{}", name),
            TypeExpr::Final(inner) => write_wrapper(f, "Final", inner),
            TypeExpr::ClassVar(inner) => write_wrapper(f, "ClassVar", inner),
            TypeExpr::Deprecated { inner, .. } => write_wrapper(f, "Deprecated", inner),
        }
    }
}
