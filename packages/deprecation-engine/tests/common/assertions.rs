//! Custom assertions for test verification

use deprecation_engine::{
    AnalysisReport, CollectingSink, PlacementShape, PlacementValidator, Declaration,
    ValidationError,
};

pub fn assert_shape(validator: &PlacementValidator<'_>, decl: &Declaration, expected: PlacementShape) {
    match validator.validate(decl) {
        Ok(Some(placement)) => assert_eq!(
            placement.shape, expected,
            "{} validated to the wrong shape",
            decl.qualified_name
        ),
        other => panic!("{}: expected {}, got {:?}", decl.qualified_name, expected, other),
    }
}

pub fn assert_error_code(validator: &PlacementValidator<'_>, decl: &Declaration, code: &str) {
    match validator.validate(decl) {
        Err(error) => assert_eq!(error.code(), code, "{}: {}", decl.qualified_name, error),
        other => panic!("{}: expected {}, got {:?}", decl.qualified_name, code, other),
    }
}

pub fn assert_report_error(report: &AnalysisReport, name: &str, expected: &ValidationError) {
    let decl = report
        .lookup(name)
        .unwrap_or_else(|| panic!("no report for {}", name));
    assert_eq!(decl.error.as_ref(), Some(expected), "{}", name);
}

/// Assert the sink saw exactly these messages, in order
pub fn assert_messages(sink: &CollectingSink, expected: &[&str]) {
    let messages: Vec<String> = sink.signals().into_iter().map(|s| s.message).collect();
    assert_eq!(messages, expected);
}
