//! Deprecation signal

use crate::features::qualifier::DeprecationMarker;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalCategory {
    Deprecation,
}

impl SignalCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignalCategory::Deprecation => "Deprecation",
        }
    }
}

impl fmt::Display for SignalCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a wrapper hands to the host sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeprecationSignal {
    /// Qualified name of the deprecated construct
    pub subject: String,
    pub message: String,
    pub category: SignalCategory,
    /// Version tag, equal to the marker's version
    pub version: String,
    /// Attribution depth; opaque to the engine
    pub stacklevel: i32,
}

impl DeprecationSignal {
    pub fn new(subject: impl Into<String>, marker: &DeprecationMarker, stacklevel: i32) -> Self {
        let subject = subject.into();
        Self {
            message: Self::format_message(&subject, marker),
            subject,
            category: SignalCategory::Deprecation,
            version: marker.version.clone(),
            stacklevel,
        }
    }

    /// `` `<subject>` is deprecated. <guidance> ``
    pub fn format_message(subject: &str, marker: &DeprecationMarker) -> String {
        let guidance = marker.guidance();
        if guidance.is_empty() {
            format!("`{}` is deprecated.", subject)
        } else {
            format!("`{}` is deprecated. {}", subject, guidance)
        }
    }
}

impl fmt::Display for DeprecationSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.category, self.message)
    }
}
