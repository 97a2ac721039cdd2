pub mod analyzer;

pub use analyzer::DeprecationAnalyzer;
