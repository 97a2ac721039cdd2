//! Configuration I/O
//!
//! YAML schema types. Loading and saving live on `EngineConfig`.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1); optional here so a missing field
    /// gets its own error
    #[serde(default)]
    pub version: Option<u32>,

    /// Base preset
    #[serde(default)]
    pub preset: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wrap: Option<WrapConfigPatch>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<AnalysisConfigPatch>,
}

/// Patch type for WrapConfig (all fields optional)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrapConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_fast: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stacklevel_offset: Option<u32>,
}

/// Patch type for AnalysisConfig
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AnalysisConfigPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,
}
