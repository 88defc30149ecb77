//! Tests for sharing schemas and the registry across threads.

use serde_json::json;
use std::sync::Arc;
use std::thread;
use tripwire::{Schema, SchemaLike, SchemaRegistry};

#[test]
fn test_concurrent_validation_of_shared_tree() {
    let schema = Schema::object()
        .field("name", Schema::string().min(1))
        .field("age", Schema::number().min(0))
        .shared();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let input = json!({"name": format!("User{}", i), "age": 20 + i});
                let output = schema.validate(&input).unwrap();
                assert_eq!(output, input);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registry_access() {
    let registry = SchemaRegistry::new();
    registry
        .register("Tags", Schema::array().items(Schema::string()).max(3))
        .unwrap();

    let handles: Vec<_> = (0..10)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                let tags: Vec<_> = (0..i % 5).map(|t| format!("t{}", t)).collect();
                let result = registry.validate("Tags", &json!(tags));
                assert_eq!(result.is_ok(), i % 5 <= 3);
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_registration() {
    let registry = SchemaRegistry::new();

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let registry = registry.clone();
            thread::spawn(move || {
                registry
                    .register(format!("S{}", i), Schema::number().max(i))
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(registry.len(), 8);
    assert!(registry.validate("S3", &json!(3)).is_ok());
    assert!(registry.validate("S3", &json!(4)).is_err());
}
