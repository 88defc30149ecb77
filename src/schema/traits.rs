//! The contract shared by every schema variant.
//!
//! This module provides the [`SchemaLike`] trait that lets leaf and composite
//! schemas be nested inside each other, and the optionality gate every
//! variant passes through before its own checks run.

use std::fmt::{self, Display};
use std::sync::Arc;

use serde_json::Value;

use crate::error::ValidationError;
use crate::path::JsonPath;

/// A schema that can be shared between several parent schemas.
pub type SchemaRef = Arc<dyn SchemaLike>;

/// The closed set of schema variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchemaKind {
    String,
    Number,
    Email,
    Timestamp,
    Any,
    Array,
    Object,
}

impl Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Email => "email",
            SchemaKind::Timestamp => "timestamp",
            SchemaKind::Any => "any",
            SchemaKind::Array => "array",
            SchemaKind::Object => "object",
        };
        f.write_str(name)
    }
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::super::StringSchema {}
    impl Sealed for super::super::NumberSchema {}
    impl Sealed for super::super::EmailSchema {}
    impl Sealed for super::super::TimestampSchema {}
    impl Sealed for super::super::AnySchema {}
    impl Sealed for super::super::ArraySchema {}
    impl Sealed for super::super::ObjectSchema {}
    impl<S: super::SchemaLike + ?Sized> Sealed for std::sync::Arc<S> {}
}

/// A schema that validates JSON values.
///
/// `SchemaLike` is implemented by the variants built through
/// [`Schema`](super::Schema) and cannot be implemented outside this crate.
/// Composite schemas hold their children as [`SchemaRef`], so any variant can
/// be nested inside an array or object schema.
///
/// Validation stops at the first failing check. On success the normalized
/// value is returned; an optional schema given `null` or `""` returns
/// `Value::Null` without running any other check.
///
/// The `Send + Sync` bounds allow a configured schema tree to be shared
/// across threads.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaLike};
/// use serde_json::json;
///
/// let tag = Schema::string().min(1).shared();
///
/// // The same configured schema backs two parents.
/// let post = Schema::object().field("tag", tag.clone());
/// let tags = Schema::array().items(tag);
///
/// assert!(post.validate(&json!({"tag": "rust"})).is_ok());
/// assert!(tags.validate(&json!(["rust", ""])).is_err());
/// ```
pub trait SchemaLike: sealed::Sealed + Send + Sync {
    /// Returns which variant this schema is.
    fn kind(&self) -> SchemaKind;

    /// Returns true if absent values (`null` or `""`) are accepted.
    fn is_optional(&self) -> bool;

    /// Runs this variant's own checks, in order.
    ///
    /// Callers should use [`validate_at`](Self::validate_at), which applies
    /// the optionality gate first.
    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError>;

    /// Returns true if the optionality gate lets `value` through untouched.
    fn accepts_absent(&self, value: &Value) -> bool {
        self.is_optional() && is_absent(value)
    }

    /// Validates a value found at `path`.
    fn validate_at(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        if self.accepts_absent(value) {
            tracing::trace!(kind = %self.kind(), path = %path, "optional value absent");
            return Ok(Value::Null);
        }
        self.check(value, path)
    }

    /// Validates a value at the root.
    fn validate(&self, value: &Value) -> Result<Value, ValidationError> {
        tracing::trace!(kind = %self.kind(), "validating");
        self.validate_at(value, &JsonPath::root()).inspect_err(|error| {
            tracing::debug!(
                kind = %self.kind(),
                path = %error.path,
                error = %error.kind,
                "validation failed"
            );
        })
    }

    /// Moves this schema behind an `Arc` so it can have several parents.
    fn shared(self) -> SchemaRef
    where
        Self: Sized + 'static,
    {
        Arc::new(self)
    }
}

impl<S: SchemaLike + ?Sized> SchemaLike for Arc<S> {
    fn kind(&self) -> SchemaKind {
        (**self).kind()
    }

    fn is_optional(&self) -> bool {
        (**self).is_optional()
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        (**self).check(value, path)
    }
}

/// Returns true for the values the optionality gate treats as absent.
pub(crate) fn is_absent(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

// Schema trees are built once and then shared across threads.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<SchemaRef>();
    assert_sync::<SchemaRef>();
};
