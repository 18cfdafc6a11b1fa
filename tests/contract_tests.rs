// Tests for the serialized shape of the step contract consumed by front-ends

use serde_json::Value;
use stepviz::engines::{array, bst};

#[test]
fn linear_step_serializes_with_lowercase_kind() {
    let result = array::insert(&[10, 20, 30], 25, Some(1));
    let json: Value = serde_json::to_value(&result).expect("result serializes");

    assert_eq!(json["operation"], "insert");
    assert_eq!(json["current_step"], 0);
    assert_eq!(json["snapshot"], serde_json::json!([10, 25, 20, 30]));

    let steps = json["steps"].as_array().expect("steps is an array");
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[0]["kind"], "state");
    assert_eq!(steps[1]["kind"], "highlight");
    assert_eq!(steps[2]["kind"], "insert");
    assert_eq!(steps[1]["highlighted"], serde_json::json!([1]));
    assert!(steps[0]["message"].is_string());
    assert!(steps[0]["explanation"].is_string());
}

#[test]
fn error_step_kind_is_lowercase_error() {
    let result = array::remove(&[], 0);
    let json: Value = serde_json::to_value(&result).expect("result serializes");
    assert_eq!(json["steps"][0]["kind"], "error");
}

#[test]
fn notfound_kind_has_no_separator() {
    let tree = bst::create(&[10, 5]).snapshot;
    let result = bst::search(&tree, 99);
    let json: Value = serde_json::to_value(&result).expect("result serializes");
    let last = json["steps"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["kind"], "notfound");
}

#[test]
fn tree_snapshot_serializes_as_nested_nodes() {
    let result = bst::create(&[10, 5, 15]);
    let json: Value = serde_json::to_value(&result.snapshot).expect("tree serializes");

    assert_eq!(json["root"]["value"], 10);
    assert_eq!(json["root"]["left"]["value"], 5);
    assert_eq!(json["root"]["right"]["value"], 15);
    assert!(json["root"]["left"]["left"].is_null());
}

#[test]
fn complexity_serializes_all_bounds() {
    let json: Value =
        serde_json::to_value(array::time_complexity("insert")).expect("complexity serializes");
    assert_eq!(json["best"], "O(1)");
    assert_eq!(json["average"], "O(n)");
    assert_eq!(json["worst"], "O(n)");
    assert!(json["explanation"].as_str().unwrap().contains("shifting"));
}

#[test]
fn create_serializes_with_null_operation() {
    let result = array::create(&[1, 2]);
    let json: Value = serde_json::to_value(&result).expect("result serializes");
    assert!(json["operation"].is_null());
    assert_eq!(json["steps"], serde_json::json!([]));
}
