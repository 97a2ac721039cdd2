pub mod module;
pub mod record;
pub mod report;

pub use module::ModuleDecls;
pub use record::{RecordField, RecordSchema};
pub use report::{AnalysisReport, DeclarationReport, Diagnostic};
