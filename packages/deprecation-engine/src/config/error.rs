//! Configuration errors
//!
//! Everything that can go wrong between a YAML file on disk and a
//! validated [`EngineConfig`](super::EngineConfig).

use super::engine_config::SUPPORTED_VERSIONS;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// `wrap.stacklevel_offset` above [`MAX_STACKLEVEL_OFFSET`](super::MAX_STACKLEVEL_OFFSET)
    #[error("wrap.stacklevel_offset = {offset} exceeds the maximum of {max}; signals would point past the caller")]
    StacklevelOffset { offset: u32, max: u32 },

    #[error("config has no `version` key (this release reads version {})", supported_versions())]
    MissingVersion,

    #[error("config version {found} is not readable by this release (expected {})", supported_versions())]
    UnsupportedVersion { found: u32 },

    #[error("no preset named `{0}` (expected `lenient` or `strict`)")]
    UnknownPreset(String),

    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed YAML, wrong value types, or keys outside the v1 schema
    #[error("malformed config: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

fn supported_versions() -> String {
    SUPPORTED_VERSIONS
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" or ")
}
