//! Configuration System
//!
//! Two tiers:
//! - Level 1: Preset (`lenient` / `strict`)
//! - Level 2: YAML v1 with per-section overrides
//!
//! ```yaml
//! version: 1
//! preset: strict
//! wrap:
//!   stacklevel_offset: 1
//! analysis:
//!   parallel: false
//! ```

pub mod engine_config;
pub mod error;
pub mod io;
pub mod preset;

// Re-exports
pub use engine_config::{
    AnalysisConfig, EngineConfig, WrapConfig, MAX_STACKLEVEL_OFFSET, SUPPORTED_VERSIONS,
};
pub use error::{ConfigError, ConfigResult};
pub use io::{AnalysisConfigPatch, ConfigExportV1, WrapConfigPatch};
pub use preset::Preset;
