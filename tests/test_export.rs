//! Integration tests for the flat-pair and nested-object projections,
//! including the documented KEY_VALUE non-flattening quirk and the empty
//! container asymmetry between the two shapes.

use form_collector::{FlatPair, FormCollector, FormExporter};
use serde_json::{json, Value};

fn pairs_as_json(pairs: &[FlatPair]) -> Value {
    serde_json::to_value(pairs).unwrap()
}

// ============================================================================
// Spec scenarios
// ============================================================================

#[test]
fn test_multi_select_exports_both_shapes() {
    let mut form = FormCollector::new();
    form.set_multi_select("colors", "red", false).unwrap();
    form.set_multi_select("colors", "blue", false).unwrap();

    assert_eq!(
        pairs_as_json(&form.to_flat_pairs()),
        json!([
            {"name": "colors[]", "value": "red"},
            {"name": "colors[]", "value": "blue"},
        ])
    );
    assert_eq!(
        Value::Object(form.to_nested_object()),
        json!({"colors": ["red", "blue"]})
    );
}

#[test]
fn test_select_exports_single_pair() {
    let mut form = FormCollector::new();
    form.set_select("size", "M", false).unwrap();

    assert_eq!(
        pairs_as_json(&form.to_flat_pairs()),
        json!([{"name": "size", "value": "M"}])
    );
    assert_eq!(Value::Object(form.to_nested_object()), json!({"size": "M"}));
}

#[test]
fn test_fresh_collector_exports_nothing() {
    let form = FormCollector::new();
    assert!(form.to_flat_pairs().is_empty());
    assert!(form.to_nested_object().is_empty());
}

#[test]
fn test_key_value_is_not_flattened_by_key() {
    // a KEY_VALUE field exports as one pair carrying the whole mapping
    let mut form = FormCollector::new();
    form.set_key_value("meta", "lang", "en", false).unwrap();

    assert_eq!(
        pairs_as_json(&form.to_flat_pairs()),
        json!([{"name": "meta", "value": {"lang": "en"}}])
    );
    assert_eq!(
        Value::Object(form.to_nested_object()),
        json!({"meta": {"lang": "en"}})
    );
}

// ============================================================================
// Absent values and empty containers
// ============================================================================

#[test]
fn test_cleared_select_is_omitted_from_flat_pairs() {
    let mut form = FormCollector::new();
    form.set_select("size", "M", true).unwrap();
    form.set_select("size", "M", true).unwrap(); // toggled off

    assert!(form.to_flat_pairs().is_empty());
    assert!(form.to_nested_object().is_empty());
}

#[test]
fn test_empty_containers_flat_vs_nested() {
    let mut form = FormCollector::new();
    // insert then toggle-remove, leaving empty containers behind
    form.set_multi_select("colors", "red", true).unwrap();
    form.set_multi_select("colors", "red", true).unwrap();
    form.set_key_value("meta", "lang", "en", true).unwrap();
    form.set_key_value("meta", "lang", "en", true).unwrap();

    // flat projection omits empty containers entirely
    assert!(form.to_flat_pairs().is_empty());

    // nested projection keeps them as empty containers
    assert_eq!(
        Value::Object(form.to_nested_object()),
        json!({"colors": [], "meta": {}})
    );
}

// ============================================================================
// Ordering and value kinds
// ============================================================================

#[test]
fn test_flat_pairs_follow_first_touch_order() {
    let mut form = FormCollector::new();
    form.set_select("size", "M", false).unwrap();
    form.set_multi_select("colors", "red", false).unwrap();
    form.set_select("size", "L", false).unwrap();
    form.set_multi_select("colors", "blue", false).unwrap();

    let pairs = form.to_flat_pairs();
    let names: Vec<&str> = pairs
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(names, vec!["size", "colors[]", "colors[]"]);
}

#[test]
fn test_mixed_scalar_kinds_export() {
    let mut form = FormCollector::new();
    form.set_text("comment", "hello").unwrap();
    form.set_number("qty", 2.0).unwrap();
    form.set_checkbox("agree", true, false).unwrap();

    assert_eq!(
        pairs_as_json(&form.to_flat_pairs()),
        json!([
            {"name": "comment", "value": "hello"},
            {"name": "qty", "value": 2.0},
            {"name": "agree", "value": true},
        ])
    );
    assert_eq!(
        Value::Object(form.to_nested_object()),
        json!({"comment": "hello", "qty": 2.0, "agree": true})
    );
}

#[test]
fn test_nested_sequence_is_a_fresh_copy() {
    let mut form = FormCollector::new();
    form.set_multi_select("colors", "red", false).unwrap();

    let snapshot = form.to_nested_object();
    form.set_multi_select("colors", "blue", false).unwrap();

    // the earlier snapshot is unaffected by later mutation
    assert_eq!(snapshot["colors"], json!(["red"]));
    assert_eq!(form.to_nested_object()["colors"], json!(["red", "blue"]));
}

#[test]
fn test_exporter_functions_match_collector_delegates() {
    let mut form = FormCollector::new();
    form.set_select("size", "M", false).unwrap();

    assert_eq!(FormExporter::flat_pairs(&form), form.to_flat_pairs());
    assert_eq!(FormExporter::nested_object(&form), form.to_nested_object());
}
