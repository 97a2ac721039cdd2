//! Overload dispatch: deprecation fires only when resolution picks the
//! marked overload

mod common;

use common::*;
use deprecation_engine::features::dispatch::DispatchError;
use deprecation_engine::{
    Arguments, CollectingSink, OverloadSet, Parameter, PlacementShape, PlacementValidator,
    Signature, SignalEmitter, TypeScope,
};
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::sync::Arc;

/// `localtime(dt, *, isdst: None)` and deprecated `localtime(dt, isdst: bool = False)`
fn localtime(sink: Arc<CollectingSink>) -> OverloadSet<String> {
    OverloadSet::new("time.localtime", SignalEmitter::new(sink))
        .overload(
            Signature::new(vec![
                Parameter::positional("dt").annotated(annotation("str")),
                Parameter::keyword_only("isdst").annotated(annotation("None")),
            ]),
            |_| "aware".to_string(),
        )
        .deprecated_overload(
            Signature::new(vec![
                Parameter::positional("dt").annotated(annotation("str")),
                Parameter::positional("isdst")
                    .annotated(annotation("bool"))
                    .with_default(false),
            ]),
            marker(),
            |b| format!("isdst={}", b.get("isdst").and_then(Value::as_bool).unwrap_or_default()),
        )
}

#[test]
fn test_int_and_str_overloads() {
    let sink = Arc::new(CollectingSink::new());
    let f = OverloadSet::new("f", SignalEmitter::new(sink.clone()))
        .overload(
            Signature::new(vec![Parameter::positional("x").annotated(annotation("int"))]),
            |b| b.get("x").and_then(Value::as_i64).unwrap_or_default(),
        )
        .deprecated_overload(
            Signature::new(vec![Parameter::positional("x").annotated(annotation("str"))]),
            marker(),
            |b| b.get("x").and_then(Value::as_str).map_or(0, |s| s.len() as i64),
        );

    assert_eq!(f.call(Arguments::new().arg(1)).unwrap(), 1);
    assert!(sink.is_empty());

    assert_eq!(f.call(Arguments::new().arg("a")).unwrap(), 1);
    assert_messages(&sink, &["`f` is deprecated. Use `my_function` instead."]);
}

#[test]
fn test_keyword_selects_overload() {
    let sink = Arc::new(CollectingSink::new());
    let localtime = localtime(sink.clone());

    let aware = localtime
        .call(Arguments::new().arg("now").kwarg("isdst", Value::Null))
        .unwrap();
    assert_eq!(aware, "aware");
    assert!(sink.is_empty());

    let legacy = localtime
        .call(Arguments::new().arg("now").kwarg("isdst", true))
        .unwrap();
    assert_eq!(legacy, "isdst=true");
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_first_match_wins() {
    let sink = Arc::new(CollectingSink::new());
    let localtime = localtime(sink.clone());

    // Only the deprecated overload binds without `isdst`
    assert_eq!(localtime.call(Arguments::new().arg("now")).unwrap(), "isdst=false");
    assert_eq!(localtime.resolve(&Arguments::new().arg("now")).map(|(i, _)| i), Ok(1));
    assert_eq!(sink.len(), 1);
}

#[test]
fn test_no_matching_overload() {
    let sink = Arc::new(CollectingSink::new());
    let err = localtime(sink.clone())
        .call(Arguments::new().arg(3))
        .unwrap_err();
    assert_eq!(
        err,
        DispatchError::NoMatchingOverload {
            name: "time.localtime".to_string(),
            candidates: 2
        }
    );
    assert!(sink.is_empty());
}

#[test]
fn test_exported_group_validates_as_selector() {
    let localtime = localtime(Arc::new(CollectingSink::new()));
    let group = localtime.group();
    let scope = TypeScope::new();
    let results = PlacementValidator::new(&scope).validate_overloads(&group);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0], Ok(None));
    assert_eq!(
        results[1].as_ref().map(|p| p.as_ref().map(|p| p.shape)),
        Ok(Some(PlacementShape::OverloadSelector))
    );
    assert_eq!(group.signatures[1].label, "(dt: str, isdst: bool = false)");
}
