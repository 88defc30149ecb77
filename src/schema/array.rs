//! Array schema validation.
//!
//! This module provides [`ArraySchema`] for validating containers whose
//! elements all share one item schema. A container is either a JSON array
//! (positional keys) or a JSON object (keyed, e.g. `{"0": "x"}` or
//! `{"en": "hello"}`).

use serde_json::{Map, Value};

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;

use super::traits::{SchemaKind, SchemaLike, SchemaRef};
use super::integer_key;

/// A schema for validating containers element by element.
///
/// Checks run in order and stop at the first failure: container type,
/// minimum element count, maximum element count, then for each element in
/// input order its key kind followed by the item schema. The result is a new
/// container with the same keys holding each element's validated value.
///
/// By default keys must be non-negative integer indices, so JSON arrays and
/// objects such as `{"0": "a", "1": "b"}` are accepted. An
/// [`associative`](Self::associative) schema instead requires every key to be
/// a string that is not a canonical integer.
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::array().items(Schema::number()).min(1);
///
/// assert_eq!(schema.validate(&json!([1, 2, 3])).unwrap(), json!([1, 2, 3]));
/// assert_eq!(schema.validate(&json!([])).unwrap_err().kind, ErrorKind::TooFew);
///
/// let error = schema.validate(&json!([1, "two", 3])).unwrap_err();
/// assert_eq!(error.kind, ErrorKind::TypeMismatch);
/// assert_eq!(error.path.to_string(), "[1]");
/// ```
#[derive(Clone)]
pub struct ArraySchema {
    item_schema: Option<SchemaRef>,
    min_items: usize,
    max_items: usize,
    associative: bool,
    optional: bool,
}

impl ArraySchema {
    /// Creates a new array schema with no item schema and no bounds.
    pub fn new() -> Self {
        Self {
            item_schema: None,
            min_items: 0,
            max_items: usize::MAX,
            associative: false,
            optional: false,
        }
    }

    /// Sets the schema every element must satisfy.
    pub fn items<S>(mut self, schema: S) -> Self
    where
        S: SchemaLike + 'static,
    {
        self.item_schema = Some(schema.shared());
        self
    }

    /// Sets the minimum number of elements (inclusive).
    pub fn min(mut self, min: usize) -> Self {
        self.min_items = min;
        self
    }

    /// Sets the maximum number of elements (inclusive).
    pub fn max(mut self, max: usize) -> Self {
        self.max_items = max;
        self
    }

    /// Requires string keys instead of integer indices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::{ErrorKind, Schema};
    /// use serde_json::json;
    ///
    /// let labels = Schema::array().associative().items(Schema::string());
    ///
    /// assert!(labels.validate(&json!({"en": "hello", "fr": "bonjour"})).is_ok());
    /// assert_eq!(
    ///     labels.validate(&json!({"0": "x"})).unwrap_err().kind,
    ///     ErrorKind::KeyTypeMismatch
    /// );
    /// ```
    pub fn associative(mut self) -> Self {
        self.associative = true;
        self
    }

    /// Accepts `null` and `""` without running any other check.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Validates a value against this schema.
    pub fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        SchemaLike::validate(self, value)
    }

    fn check_count(&self, count: usize, path: &JsonPath) -> Result<(), ValidationError> {
        if count < self.min_items {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::TooFew,
                format!("must have at least {} items, got {}", self.min_items, count),
            )
            .with_expected(format!("at least {} items", self.min_items))
            .with_got(format!("{} items", count)));
        }
        if count > self.max_items {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::TooMany,
                format!("must have at most {} items, got {}", self.max_items, count),
            )
            .with_expected(format!("at most {} items", self.max_items))
            .with_got(format!("{} items", count)));
        }
        Ok(())
    }

    fn item_schema(&self, path: &JsonPath) -> Result<&SchemaRef, ValidationError> {
        self.item_schema.as_ref().ok_or_else(|| {
            ValidationError::new(
                path.clone(),
                ErrorKind::MissingItemSchema,
                "array schema has no item schema configured",
            )
        })
    }

    fn key_mismatch(&self, path: &JsonPath, key: String) -> ValidationError {
        let expected = if self.associative {
            "string key"
        } else {
            "non-negative integer key"
        };
        ValidationError::new(
            path.clone(),
            ErrorKind::KeyTypeMismatch,
            format!("invalid key '{}', expected {}", key, expected),
        )
        .with_expected(expected)
        .with_got(key)
    }

    fn check_list(&self, items: &[Value], path: &JsonPath) -> Result<Value, ValidationError> {
        let mut validated = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            if self.associative {
                return Err(self.key_mismatch(path, index.to_string()));
            }
            let item_path = path.push_index(index);
            validated.push(self.item_schema(&item_path)?.validate_at(item, &item_path)?);
        }
        Ok(Value::Array(validated))
    }

    fn check_map(&self, entries: &Map<String, Value>, path: &JsonPath) -> Result<Value, ValidationError> {
        let mut validated = Map::with_capacity(entries.len());
        for (key, item) in entries {
            let key_ok = match integer_key(key) {
                Some(index) => !self.associative && index >= 0,
                None => self.associative,
            };
            if !key_ok {
                return Err(self.key_mismatch(path, key.clone()));
            }
            let item_path = path.push_field(key.as_str());
            let item = self.item_schema(&item_path)?.validate_at(item, &item_path)?;
            validated.insert(key.clone(), item);
        }
        Ok(Value::Object(validated))
    }
}

impl Default for ArraySchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for ArraySchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Array
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        match value {
            Value::Array(items) => {
                self.check_count(items.len(), path)?;
                self.check_list(items, path)
            }
            Value::Object(entries) => {
                self.check_count(entries.len(), path)?;
                self.check_map(entries, path)
            }
            _ => Err(ValidationError::type_mismatch(path, "array", value)),
        }
    }
}
