//! Integration tests for the schema registry.

use serde_json::json;
use tripwire::{ErrorKind, RegistryError, Schema, SchemaRegistry};

#[test]
fn test_register_and_validate() {
    let registry = SchemaRegistry::new();
    registry
        .register("User", Schema::object()
            .field("name", Schema::string().min(1))
            .field("email", Schema::email()))
        .unwrap();

    let user = registry
        .validate("User", &json!({"name": "Ann", "email": "ann@example.com", "x": 1}))
        .unwrap();
    assert_eq!(user, json!({"name": "Ann", "email": "ann@example.com"}));
}

#[test]
fn test_registered_schema_reused_as_child() {
    let registry = SchemaRegistry::new();
    registry
        .register("Timestamp", Schema::timestamp())
        .unwrap();

    let stamp = registry.get("Timestamp").unwrap();
    registry
        .register("Event", Schema::object()
            .field("at", stamp.clone())
            .field("history", Schema::array().items(stamp)))
        .unwrap();

    let error = registry
        .validate("Event", &json!({
            "at": "2024-01-01 00:00:00",
            "history": ["2023-12-31 23:59:59", "2023-11-31 00:00:00"]
        }))
        .unwrap_err();

    match error {
        RegistryError::Invalid(e) => {
            assert_eq!(e.kind, ErrorKind::InvalidFormat);
            assert_eq!(e.path.to_string(), "history[1]");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_invalid_error_displays_validation_error() {
    let registry = SchemaRegistry::new();
    registry.register("Code", Schema::string().max(3)).unwrap();

    let error = registry.validate("Code", &json!("ABCD")).unwrap_err();
    assert!(error.to_string().starts_with("(root): length must be at most 3, got 4"));
}

#[test]
fn test_unknown_and_duplicate_names() {
    let registry = SchemaRegistry::new();
    registry.register("A", Schema::any()).unwrap();

    assert_eq!(
        registry.register("A", Schema::any()).unwrap_err().to_string(),
        "schema 'A' already registered"
    );
    assert_eq!(
        registry.validate("B", &json!(null)).unwrap_err().to_string(),
        "schema 'B' not found"
    );
    assert_eq!(registry.names(), vec!["A"]);
}
