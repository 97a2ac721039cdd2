//! Static Analysis Surface
//!
//! Per-declaration deprecation facts for a module, queried by a separate
//! pass that flags usage sites, and field-level marker lookup for record
//! systems.

pub mod domain;
pub mod infrastructure;

pub use domain::{
    AnalysisReport, DeclarationReport, Diagnostic, ModuleDecls, RecordField, RecordSchema,
};
pub use infrastructure::DeprecationAnalyzer;
