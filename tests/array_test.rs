//! Integration tests for array schema validation.

use serde_json::{json, Value};
use tripwire::{ErrorKind, Schema};

#[test]
fn test_items_and_bounds() {
    let schema = Schema::array().items(Schema::number()).min(1);

    assert_eq!(schema.validate(&json!([])).unwrap_err().kind, ErrorKind::TooFew);
    assert_eq!(schema.validate(&json!([1, 2, 3])).unwrap(), json!([1, 2, 3]));
}

#[test]
fn test_max_items() {
    let schema = Schema::array().items(Schema::string()).max(2);
    let error = schema.validate(&json!(["a", "b", "c"])).unwrap_err();
    assert_eq!(error.kind, ErrorKind::TooMany);
    assert_eq!(error.message, "must have at most 2 items, got 3");
}

#[test]
fn test_failing_element_aborts_whole_array() {
    let schema = Schema::array().items(Schema::string().min(2));
    let error = schema.validate(&json!(["ok", "x", 3])).unwrap_err();

    // The first failure is reported; the later type error is never reached.
    assert_eq!(error.kind, ErrorKind::TooShort);
    assert_eq!(error.path.to_string(), "[1]");
}

#[test]
fn test_associative_keys() {
    let assoc = Schema::array().associative().items(Schema::string());
    let error = assoc.validate(&json!({"0": "x"})).unwrap_err();
    assert_eq!(error.kind, ErrorKind::KeyTypeMismatch);
    assert_eq!(error.got.as_deref(), Some("0"));

    let positional = Schema::array().items(Schema::string());
    assert_eq!(positional.validate(&json!({"0": "x"})).unwrap(), json!({"0": "x"}));
}

#[test]
fn test_associative_map_validated_in_input_order() {
    let schema = Schema::array().associative().items(Schema::number().max(9));
    let error = schema
        .validate(&json!({"zeta": 1, "alpha": 99, "mid": 100}))
        .unwrap_err();
    assert_eq!(error.path.to_string(), "alpha");
}

#[test]
fn test_mixed_keys_fail_at_first_wrong_kind() {
    let schema = Schema::array().items(Schema::any());
    let error = schema
        .validate(&json!({"0": "a", "1": "b", "name": "c"}))
        .unwrap_err();
    assert_eq!(error.kind, ErrorKind::KeyTypeMismatch);
    assert_eq!(error.got.as_deref(), Some("name"));
}

#[test]
fn test_nested_arrays() {
    let matrix = Schema::array().items(Schema::array().items(Schema::number()).min(2));

    assert!(matrix.validate(&json!([[1, 2], [3, 4]])).is_ok());
    let error = matrix.validate(&json!([[1, 2], [3, "x"]])).unwrap_err();
    assert_eq!(error.path.to_string(), "[1][1]");
}

#[test]
fn test_elements_normalized_by_item_schema() {
    let schema = Schema::array().items(Schema::object().field("id", Schema::number()));
    let output = schema
        .validate(&json!([{"id": 1, "extra": true}, {"id": "2"}]))
        .unwrap();
    assert_eq!(output, json!([{"id": 1}, {"id": "2"}]));
}

#[test]
fn test_huge_max_is_harmless() {
    let schema = Schema::array().items(Schema::any()).max(usize::MAX);
    assert!(schema.validate(&json!([1, 2, 3])).is_ok());
}

#[test]
fn test_optional_array_short_circuits() {
    let schema = Schema::array().items(Schema::number()).min(3).optional();
    assert_eq!(schema.validate(&json!(null)).unwrap(), Value::Null);
    assert_eq!(schema.validate(&json!("")).unwrap(), Value::Null);
}
