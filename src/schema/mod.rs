//! Schema definitions for validation.
//!
//! This module provides the schema variants and the [`Schema`] factory that
//! constructs them. Leaf schemas validate scalars; [`ArraySchema`] and
//! [`ObjectSchema`] validate containers by delegating to child schemas.
//!
//! # Example
//!
//! ```rust
//! use tripwire::Schema;
//! use serde_json::json;
//!
//! let schema = Schema::string().min(1).max(100);
//!
//! assert!(schema.validate(&json!("hello")).is_ok());
//! assert!(schema.validate(&json!("")).is_err());
//! ```

mod any;
mod array;
mod email;
mod numeric;
mod object;
mod string;
mod timestamp;
mod traits;

pub use any::AnySchema;
pub use array::ArraySchema;
pub use email::EmailSchema;
pub use numeric::NumberSchema;
pub use object::ObjectSchema;
pub use string::StringSchema;
pub use timestamp::TimestampSchema;
pub use traits::{SchemaKind, SchemaLike, SchemaRef};

use serde_json::Value;

/// Entry point for creating validation schemas.
///
/// Each constructor returns a fresh, unconfigured schema. Constraints are
/// added through builder methods that consume and return the schema, so a
/// configured schema is never changed behind another owner's back.
///
/// # Example
///
/// ```rust
/// use tripwire::Schema;
/// use serde_json::json;
///
/// let signup = Schema::object()
///     .field("email", Schema::email())
///     .field("password", Schema::string().min(12))
///     .field("born", Schema::timestamp().optional())
///     .field("tags", Schema::array().items(Schema::string()).max(5).optional());
///
/// let result = signup.validate(&json!({
///     "email": "ann@example.com",
///     "password": "correct horse battery",
///     "tags": ["new"]
/// }));
/// assert!(result.is_ok());
/// ```
pub struct Schema;

impl Schema {
    /// Creates a new string schema.
    pub fn string() -> StringSchema {
        StringSchema::new()
    }

    /// Creates a new number schema.
    pub fn number() -> NumberSchema {
        NumberSchema::new()
    }

    /// Creates a new email schema.
    pub fn email() -> EmailSchema {
        EmailSchema::new()
    }

    /// Creates a new `YYYY-MM-DD HH:MM:SS` timestamp schema.
    pub fn timestamp() -> TimestampSchema {
        TimestampSchema::new()
    }

    /// Creates a new array schema. Set its element schema with
    /// [`ArraySchema::items`].
    pub fn array() -> ArraySchema {
        ArraySchema::new()
    }

    /// Creates a new schema that accepts any value.
    pub fn any() -> AnySchema {
        AnySchema::new()
    }

    /// Creates a new object schema with an empty shape.
    pub fn object() -> ObjectSchema {
        ObjectSchema::new()
    }
}

/// Returns the JSON type name for a value.
pub(crate) fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Reads a container key as an integer if it is written canonically.
///
/// `"0"`, `"42"` and `"-7"` are integers; `"007"`, `"-0"`, `"+1"`, `" 1"`
/// and anything outside `i64` stay string keys.
pub(crate) fn integer_key(key: &str) -> Option<i64> {
    let digits = key.strip_prefix('-').unwrap_or(key);
    let canonical = match digits.as_bytes() {
        [b'0'] => digits.len() == key.len(),
        [b'1'..=b'9', rest @ ..] => rest.iter().all(u8::is_ascii_digit),
        _ => false,
    };
    if canonical {
        key.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_factory_returns_fresh_schemas() {
        assert_eq!(Schema::string().kind(), SchemaKind::String);
        assert_eq!(Schema::number().kind(), SchemaKind::Number);
        assert_eq!(Schema::email().kind(), SchemaKind::Email);
        assert_eq!(Schema::timestamp().kind(), SchemaKind::Timestamp);
        assert_eq!(Schema::array().kind(), SchemaKind::Array);
        assert_eq!(Schema::any().kind(), SchemaKind::Any);
        assert_eq!(Schema::object().kind(), SchemaKind::Object);
        assert!(!Schema::string().is_optional());
    }

    #[test]
    fn test_integer_keys() {
        assert_eq!(integer_key("0"), Some(0));
        assert_eq!(integer_key("42"), Some(42));
        assert_eq!(integer_key("-7"), Some(-7));
        assert_eq!(integer_key("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_string_keys() {
        for key in ["", "-", "-0", "007", "+1", " 1", "1 ", "1.0", "abc", "9223372036854775808"] {
            assert_eq!(integer_key(key), None, "{:?} should be a string key", key);
        }
    }

    #[test]
    fn test_value_type_names() {
        assert_eq!(value_type_name(&json!(null)), "null");
        assert_eq!(value_type_name(&json!([])), "array");
        assert_eq!(value_type_name(&json!({})), "object");
    }
}
