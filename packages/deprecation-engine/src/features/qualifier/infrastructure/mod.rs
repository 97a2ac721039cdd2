pub mod annotation_parser;

pub use annotation_parser::{parse_annotation, AnnotationParser};
