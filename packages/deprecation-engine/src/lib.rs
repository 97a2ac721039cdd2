/*
 * Deprecation Engine - Deprecation qualifier and enforcement
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Span)
 * - features/    : Vertical slices (qualifier → placement → analysis → runtime_wrapper → dispatch)
 * - config/      : Presets and YAML configuration
 *
 * Static side: `Deprecated[X]` annotations are validated per declaration and
 * reported as data. Runtime side: wrappers emit a signal through a host sink
 * and then delegate to the original unchanged.
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models
pub mod shared;

/// Feature modules
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{EngineConfig, Preset};
pub use errors::{EngineError, Result};

pub use features::analysis::{
    AnalysisReport, DeclarationReport, DeprecationAnalyzer, Diagnostic, ModuleDecls, RecordSchema,
};
pub use features::dispatch::{DispatchError, OverloadSet};
pub use features::placement::{
    is_invocable, Declaration, DeclarationKind, OverloadGroup, Placement, PlacementShape,
    PlacementValidator, TypeScope, ValidationError, ValueKind,
};
pub use features::qualifier::{
    extract_qualifier, parse_annotation, qualify, DeprecationMarker, QualifiedType, TypeExpr,
};
pub use features::runtime_wrapper::{
    Arguments, BoundArguments, ClassDef, CollectingSink, DeprecatedCallable, DeprecatedClass,
    DeprecationSignal, Deprecator, FunctionDef, Parameter, ParameterGuard, Signature,
    SignalEmitter, SignalSink, StacklevelProvider, TracingSink, WrapInstaller,
};
pub use shared::models::Span;
