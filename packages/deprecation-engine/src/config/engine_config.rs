//! Engine configuration
//!
//! Preset first, then per-section overrides:
//!
//! ```rust,ignore
//! use deprecation_engine::config::{EngineConfig, Preset};
//!
//! let config = EngineConfig::preset(Preset::Strict);
//! let config = EngineConfig::from_yaml("deprecations.yaml")?;
//! ```

use super::error::{ConfigError, ConfigResult};
use super::io::{AnalysisConfigPatch, ConfigExportV1, WrapConfigPatch};
use super::preset::Preset;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Supported YAML schema versions
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Upper bound for `wrap.stacklevel_offset`
pub const MAX_STACKLEVEL_OFFSET: u32 = 32;

/// Runtime wrapper settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrapConfig {
    /// Reject invalid wrap targets instead of logging and wrapping anyway
    pub fail_fast: bool,
    /// Added to the provider's call depth on every signal
    pub stacklevel_offset: u32,
}

impl WrapConfig {
    pub fn from_preset(preset: Preset) -> Self {
        Self {
            fail_fast: preset.fail_fast(),
            stacklevel_offset: 0,
        }
    }

    pub fn fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    pub fn stacklevel_offset(mut self, offset: u32) -> Self {
        self.stacklevel_offset = offset;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.stacklevel_offset > MAX_STACKLEVEL_OFFSET {
            return Err(ConfigError::StacklevelOffset {
                offset: self.stacklevel_offset,
                max: MAX_STACKLEVEL_OFFSET,
            });
        }
        Ok(())
    }

    fn apply(&mut self, patch: WrapConfigPatch) {
        if let Some(v) = patch.fail_fast {
            self.fail_fast = v;
        }
        if let Some(v) = patch.stacklevel_offset {
            self.stacklevel_offset = v;
        }
    }
}

impl Default for WrapConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

/// Static analysis settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Validate declarations in parallel (needs the `parallel` feature)
    pub parallel: bool,
}

impl AnalysisConfig {
    pub fn from_preset(_preset: Preset) -> Self {
        Self { parallel: true }
    }

    fn apply(&mut self, patch: AnalysisConfigPatch) {
        if let Some(v) = patch.parallel {
            self.parallel = v;
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub version: u32,
    pub preset: Preset,
    pub wrap: WrapConfig,
    pub analysis: AnalysisConfig,
}

impl EngineConfig {
    pub fn preset(preset: Preset) -> Self {
        Self {
            version: 1,
            preset,
            wrap: WrapConfig::from_preset(preset),
            analysis: AnalysisConfig::from_preset(preset),
        }
    }

    /// Override wrap settings
    pub fn wrap(mut self, f: impl FnOnce(WrapConfig) -> WrapConfig) -> Self {
        self.wrap = f(self.wrap);
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.analysis.parallel = parallel;
        self
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if !SUPPORTED_VERSIONS.contains(&self.version) {
            return Err(ConfigError::UnsupportedVersion {
                found: self.version,
            });
        }
        self.wrap.validate()
    }

    /// Load from a YAML file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            preset = %config.preset,
            "loaded engine configuration"
        );
        Ok(config)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        // Version check
        let version = export.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion { found: version });
        }

        let preset = match export.preset.as_deref() {
            Some(name) => name.parse()?,
            None => Preset::default(),
        };

        let mut config = Self::preset(preset);
        if let Some(wrap) = export.wrap {
            config.wrap.apply(wrap);
        }
        if let Some(analysis) = export.analysis {
            config.analysis.apply(analysis);
        }

        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(self.version),
            preset: Some(self.preset.to_string()),
            wrap: Some(WrapConfigPatch {
                fail_fast: Some(self.wrap.fail_fast),
                stacklevel_offset: Some(self.wrap.stacklevel_offset),
            }),
            analysis: Some(AnalysisConfigPatch {
                parallel: Some(self.analysis.parallel),
            }),
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Write as YAML to `path`
    pub fn save_yaml(&self, path: impl AsRef<Path>) -> ConfigResult<()> {
        std::fs::write(path, self.to_yaml()?)?;
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}
