//! Annotation string parser
//!
//! Turns annotation text such as `Deprecated[Final[int]]` or
//! `Callable[..., int] | None` into a [`TypeExpr`].

use crate::errors::{EngineError, Result};
use crate::features::qualifier::domain::{DeprecationMarker, TypeExpr};
use std::collections::HashSet;

/// Deepest bracket nesting accepted before parsing starts
pub const MAX_NESTING_DEPTH: usize = 64;

/// Parse an annotation with default settings
pub fn parse_annotation(text: &str) -> Result<TypeExpr> {
    AnnotationParser::new().parse(text)
}

/// Annotation parser
///
/// Names registered through [`AnnotationParser::with_type_vars`] and single
/// upper-case letters (`T`, `_R`) parse as type variables. Every
/// `Deprecated` node produced carries the parser's marker.
#[derive(Debug, Clone, Default)]
pub struct AnnotationParser {
    type_vars: HashSet<String>,
    marker: DeprecationMarker,
}

impl AnnotationParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type_vars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.type_vars.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn with_marker(mut self, marker: DeprecationMarker) -> Self {
        self.marker = marker;
        self
    }

    pub fn parse(&self, text: &str) -> Result<TypeExpr> {
        if nesting_depth(text) > MAX_NESTING_DEPTH {
            return Err(EngineError::parse_error(format!(
                "annotation nests deeper than {} levels",
                MAX_NESTING_DEPTH
            )));
        }
        self.parse_expr(text)
    }

    fn parse_expr(&self, text: &str) -> Result<TypeExpr> {
        let normalized = text.trim();
        if normalized.is_empty() {
            return Err(EngineError::parse_error("empty type expression"));
        }

        // Check for union syntax (T | U)
        let members = split_top_level(normalized, '|')?;
        if members.len() > 1 {
            let parsed = members
                .iter()
                .map(|member| self.parse_expr(member))
                .collect::<Result<Vec<_>>>()?;
            return Ok(TypeExpr::union(parsed));
        }

        match normalized.find('[') {
            Some(open) => {
                if !normalized.ends_with(']') {
                    return Err(EngineError::parse_error(format!(
                        "unexpected text after ']' in `{}`",
                        normalized
                    )));
                }
                let base = normalized[..open].trim();
                if base.is_empty() {
                    return Err(EngineError::parse_error(format!(
                        "missing type name before '[' in `{}`",
                        normalized
                    )));
                }
                let args_text = &normalized[open + 1..normalized.len() - 1];
                self.parse_subscript(base, args_text)
            }
            None if normalized.contains(']') => Err(EngineError::parse_error(format!(
                "unbalanced ']' in `{}`",
                normalized
            ))),
            None => self.parse_name(normalized),
        }
    }

    fn parse_subscript(&self, base: &str, args_text: &str) -> Result<TypeExpr> {
        let args = split_top_level(args_text, ',')?;
        if args.iter().all(|arg| arg.is_empty()) {
            return Err(EngineError::parse_error(format!(
                "`{}[]` needs at least one type argument",
                base
            )));
        }

        match special_form(base) {
            "Deprecated" => Ok(TypeExpr::deprecated(
                self.single_arg(base, &args)?,
                self.marker.clone(),
            )),
            "Final" => Ok(TypeExpr::final_of(self.single_arg(base, &args)?)),
            "ClassVar" => Ok(TypeExpr::class_var_of(self.single_arg(base, &args)?)),
            "Optional" => Ok(TypeExpr::optional(self.single_arg(base, &args)?)),
            "type" | "Type" => Ok(TypeExpr::class_object(self.single_arg(base, &args)?)),
            "Union" => Ok(TypeExpr::union(self.parse_all(&args)?)),
            "Callable" => self.parse_callable(&args),
            _ => Ok(TypeExpr::generic(base, self.parse_all(&args)?)),
        }
    }

    fn parse_callable(&self, args: &[&str]) -> Result<TypeExpr> {
        if args.len() != 2 {
            return Err(EngineError::parse_error(
                "Callable takes a parameter list and a return type",
            ));
        }

        let ret = self.parse_expr(args[1])?;
        let params = args[0];
        // A ParamSpec (`Callable[P, R]`) constrains nothing the validator reads
        if params == "..." || is_identifier(params) {
            return Ok(TypeExpr::callable_any(ret));
        }

        match params
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
        {
            Some(list) if list.trim().is_empty() => Ok(TypeExpr::callable(Vec::new(), ret)),
            Some(list) => {
                let params = split_top_level(list, ',')?;
                Ok(TypeExpr::callable(self.parse_all(&params)?, ret))
            }
            None => Err(EngineError::parse_error(format!(
                "Callable parameters must be `...` or a bracketed list, found `{}`",
                params
            ))),
        }
    }

    fn parse_name(&self, name: &str) -> Result<TypeExpr> {
        if name == "..." {
            return Err(EngineError::parse_error(
                "`...` is only valid as Callable parameters",
            ));
        }
        if !name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        {
            return Err(EngineError::parse_error(format!(
                "invalid type name `{}`",
                name
            )));
        }

        let ty = match special_form(name) {
            "Any" => TypeExpr::Any,
            "None" => TypeExpr::None,
            "Deprecated" => TypeExpr::bare_deprecated(self.marker.clone()),
            "Final" => TypeExpr::Final(None),
            "ClassVar" => TypeExpr::ClassVar(None),
            "Callable" => TypeExpr::callable_any(TypeExpr::Any),
            "type" | "Type" => TypeExpr::class_object(TypeExpr::Any),
            _ if self.is_type_var(name) => TypeExpr::type_var(name),
            _ => TypeExpr::simple(name),
        };
        Ok(ty)
    }

    fn single_arg(&self, base: &str, args: &[&str]) -> Result<TypeExpr> {
        match args {
            [only] => self.parse_expr(only),
            _ => Err(EngineError::parse_error(format!(
                "{} takes exactly one type argument, got {}",
                base,
                args.len()
            ))),
        }
    }

    fn parse_all(&self, args: &[&str]) -> Result<Vec<TypeExpr>> {
        args.iter().map(|arg| self.parse_expr(arg)).collect()
    }

    fn is_type_var(&self, name: &str) -> bool {
        if self.type_vars.contains(name) {
            return true;
        }
        let stem = name.trim_start_matches('_');
        stem.len() == 1 && stem.chars().all(|c| c.is_ascii_uppercase())
    }
}

fn nesting_depth(text: &str) -> usize {
    let mut depth = 0usize;
    let mut deepest = 0usize;
    for ch in text.chars() {
        match ch {
            '[' => {
                depth += 1;
                deepest = deepest.max(depth);
            }
            ']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    deepest
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    matches!(chars.next(), Some(c) if c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// `typing.Final` and `Final` name the same special form
fn special_form(base: &str) -> &str {
    base.rsplit('.').next().unwrap_or(base)
}

/// Split by `sep` at bracket depth zero (respecting nested brackets)
fn split_top_level(text: &str, sep: char) -> Result<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth: i32 = 0;
    let mut start = 0;

    for (i, ch) in text.char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth < 0 {
                    return Err(EngineError::parse_error(format!(
                        "unbalanced ']' in `{}`",
                        text
                    )));
                }
            }
            c if c == sep && depth == 0 => {
                parts.push(text[start..i].trim());
                start = i + c.len_utf8();
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(EngineError::parse_error(format!(
            "unbalanced '[' in `{}`",
            text
        )));
    }

    parts.push(text[start..].trim());
    Ok(parts)
}
