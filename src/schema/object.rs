//! Object schema validation.
//!
//! This module provides [`ObjectSchema`] for validating containers against a
//! fixed shape of named fields. The shape defines the output exhaustively:
//! input fields it does not name are dropped.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;

use super::traits::{SchemaKind, SchemaLike, SchemaRef};
use super::integer_key;

/// A schema for validating objects against a fixed set of fields.
///
/// Fields are visited in the order they were configured. For each field:
/// - absent and its schema is not optional: fail with
///   [`ErrorKind::MissingField`];
/// - otherwise the field's value (`null` when absent) is validated by its
///   schema and the result stored under the field name.
///
/// An optional field that is absent therefore appears in the output as
/// `null`. The first failing field aborts the whole object.
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::object()
///     .field("name", Schema::string())
///     .field("age", Schema::number().optional());
///
/// assert_eq!(
///     schema.validate(&json!({"name": "Ann", "role": "admin"})).unwrap(),
///     json!({"name": "Ann", "age": null})
/// );
/// assert_eq!(
///     schema.validate(&json!({"age": 3})).unwrap_err().kind,
///     ErrorKind::MissingField
/// );
/// ```
#[derive(Clone)]
pub struct ObjectSchema {
    shape: IndexMap<String, SchemaRef>,
    optional: bool,
}

impl ObjectSchema {
    /// Creates a new object schema with an empty shape.
    pub fn new() -> Self {
        Self {
            shape: IndexMap::new(),
            optional: false,
        }
    }

    /// Adds a field to the shape.
    ///
    /// Re-adding an existing name replaces its schema but keeps its position.
    pub fn field<S>(mut self, name: impl Into<String>, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.shape.insert(name.into(), schema.shared());
        self
    }

    /// Replaces the whole shape.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{Schema, SchemaLike};
    /// use serde_json::json;
    ///
    /// let schema = Schema::object().schema([
    ///     ("name", Schema::string().shared()),
    ///     ("email", Schema::email().optional().shared()),
    /// ]);
    ///
    /// assert!(schema.validate(&json!({"name": "Ann"})).is_ok());
    /// ```
    pub fn schema<I, K>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, SchemaRef)>,
        K: Into<String>,
    {
        self.shape = fields
            .into_iter()
            .map(|(name, schema)| (name.into(), schema))
            .collect();
        self
    }

    /// Accepts `null` and `""` without running any other check.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Returns the configured field names, in validation order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.shape.keys().map(String::as_str)
    }

    /// Validates a value against this schema.
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        SchemaLike::validate(self, value)
    }
}

impl Default for ObjectSchema {
    fn default() -> Self {
        Self::new()
    }
}

static NULL: Value = Value::Null;

/// Looks up a field in either kind of container.
///
/// JSON arrays are addressed by canonical integer names such as `"0"`.
fn lookup<'a>(container: &'a Value, name: &str) -> Option<&'a Value> {
    match container {
        Value::Object(map) => map.get(name),
        Value::Array(items) => integer_key(name)
            .and_then(|index| usize::try_from(index).ok())
            .and_then(|index| items.get(index)),
        _ => None,
    }
}

impl SchemaLike for ObjectSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Object
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        if !matches!(value, Value::Object(_) | Value::Array(_)) {
            return Err(ValidationError::type_mismatch(path, "object", value));
        }

        let mut validated = Map::with_capacity(self.shape.len());
        for (name, schema) in &self.shape {
            let field_path = path.push_field(name.as_str());
            let field_value = match lookup(value, name) {
                Some(v) => v,
                None if !schema.is_optional() => {
                    return Err(ValidationError::new(
                        field_path,
                        ErrorKind::MissingField,
                        format!("required field '{}' is missing", name),
                    )
                    .with_expected(schema.kind().to_string()));
                }
                None => &NULL,
            };
            validated.insert(name.clone(), schema.validate_at(field_value, &field_path)?);
        }

        Ok(Value::Object(validated))
    }
}
