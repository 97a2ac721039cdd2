//! Deprecation marker domain model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable deprecation metadata attached to a type or declaration.
///
/// Created once when the qualifier is applied and never mutated afterwards.
/// Each declaration owns its own copy; there is no process-wide registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeprecationMarker {
    /// Free-form guidance shown after "`<name>` is deprecated."
    pub message: String,
    /// Version in which the construct was deprecated
    pub version: String,
    /// Name of the construct that replaces this one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement: Option<String>,
}

impl DeprecationMarker {
    pub fn new(message: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            version: version.into(),
            replacement: None,
        }
    }

    /// Marker for a construct that was renamed or moved
    pub fn renamed(new_name: impl Into<String>, version: impl Into<String>) -> Self {
        let new_name = new_name.into();
        Self {
            message: format!("It has been renamed to `{}`.", new_name),
            version: version.into(),
            replacement: Some(new_name),
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = Some(replacement.into());
        self
    }

    /// Guidance text including the replacement hint unless the message
    /// already names the replacement in backticks
    pub fn guidance(&self) -> String {
        let message = self.message.trim();
        match &self.replacement {
            Some(replacement) if !message.contains(&format!("`{}`", replacement)) => {
                let hint = format!("It has been renamed to `{}`.", replacement);
                if message.is_empty() {
                    hint
                } else {
                    format!("{} {}", message, hint)
                }
            }
            _ => message.to_string(),
        }
    }
}

impl fmt::Display for DeprecationMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guidance = self.guidance();
        match (guidance.is_empty(), self.version.is_empty()) {
            (true, true) => write!(f, "deprecated"),
            (true, false) => write!(f, "deprecated since {}", self.version),
            (false, true) => write!(f, "{}", guidance),
            (false, false) => write!(f, "{} (since {})", guidance, self.version),
        }
    }
}
