//! Unconstrained value validation.
//!
//! [`AnySchema`] accepts any JSON value unless length or pattern rules are
//! configured, in which case the value is measured as text without first
//! asserting that it is a string.

use std::borrow::Cow;

use regex::Regex;
use serde_json::{Number, Value};

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;

use super::string::TextRules;
use super::traits::{SchemaKind, SchemaLike};

/// Renders a scalar the way it is measured: strings as-is, numbers as their
/// shortest decimal text (`1.0` reads as `"1"`), `true` as `"1"`, `false` and
/// `null` as `""`.
///
/// Arrays and objects have no textual form.
fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(number_text(n))),
        Value::Bool(true) => Some(Cow::Borrowed("1")),
        Value::Bool(false) | Value::Null => Some(Cow::Borrowed("")),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral floats below 1e15 drop their fraction; other numbers keep their
/// JSON text.
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f),
        _ => n.to_string(),
    }
}

/// A permissive schema that skips the type check.
///
/// With no constraints configured every value passes through unchanged,
/// including arrays and objects. Once `min`, `max` or a pattern is set, the
/// value is measured as text; containers cannot be measured and fail with
/// [`ErrorKind::Unmeasurable`].
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, Schema};
/// use serde_json::json;
///
/// let anything = Schema::any();
/// assert_eq!(anything.validate(&json!([1, 2])).unwrap(), json!([1, 2]));
///
/// let short = Schema::any().max(3);
/// assert!(short.validate(&json!(123)).is_ok());
/// assert_eq!(short.validate(&json!(1234)).unwrap_err().kind, ErrorKind::TooLong);
/// assert_eq!(short.validate(&json!([1])).unwrap_err().kind, ErrorKind::Unmeasurable);
/// ```
#[derive(Clone, Debug)]
pub struct AnySchema {
    rules: TextRules,
    optional: bool,
}

impl AnySchema {
    /// Creates a new schema that accepts every value.
    pub fn new() -> Self {
        Self {
            rules: TextRules::new(),
            optional: false,
        }
    }

    /// Sets the minimum text length (inclusive).
    pub fn min(mut self, min: usize) -> Self {
        self.rules.set_min(min);
        self
    }

    /// Sets the maximum text length (inclusive).
    pub fn max(mut self, max: usize) -> Self {
        self.rules.set_max(max);
        self
    }

    /// Sets the pattern the value's text must match.
    ///
    /// Returns an error if the pattern is not a valid regex.
    pub fn matches(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.matches_regex(Regex::new(pattern)?))
    }

    /// Sets an already compiled pattern the value's text must match.
    pub fn matches_regex(mut self, regex: Regex) -> Self {
        self.rules.set_pattern(regex);
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
}

impl Default for AnySchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for AnySchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Any
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        if self.rules.is_unconstrained() {
            return Ok(value.clone());
        }

        let text = as_text(value).ok_or_else(|| {
            ValidationError::new(
                path.clone(),
                ErrorKind::Unmeasurable,
                "value has no length to check",
            )
            .with_expected("string or scalar")
            .with_got(super::value_type_name(value))
        })?;

        self.rules.check(&text, path)?;
        Ok(value.clone())
    }
}
