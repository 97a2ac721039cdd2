//! Module declarations: the analyzer's input

use crate::features::placement::{Declaration, OverloadGroup, TypeScope};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleDecls {
    pub name: String,
    /// Type parameters visible to every declaration of the module
    #[serde(default)]
    pub scope: TypeScope,
    #[serde(default)]
    pub declarations: Vec<Declaration>,
    #[serde(default)]
    pub overload_groups: Vec<OverloadGroup>,
}

impl ModuleDecls {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_scope(mut self, scope: TypeScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn declare(mut self, declaration: Declaration) -> Self {
        self.declarations.push(declaration);
        self
    }

    pub fn overloads(mut self, group: OverloadGroup) -> Self {
        self.overload_groups.push(group);
        self
    }

    /// Declarations plus overload signatures
    pub fn len(&self) -> usize {
        self.declarations.len()
            + self
                .overload_groups
                .iter()
                .map(|g| g.signatures.len())
                .sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
