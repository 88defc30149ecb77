//! Numeric schema validation.
//!
//! This module provides [`NumberSchema`] for validating numeric values against
//! an inclusive integer range.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;

use super::traits::{SchemaKind, SchemaLike};

/// Decimal literal with optional sign, fraction and exponent.
static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric literal pattern is valid")
});

/// A numeric reading of a value, exact for integers.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Numeric {
    Int(i128),
    Float(f64),
}

impl Numeric {
    /// Reads a JSON number or numeric string.
    ///
    /// Strings may carry surrounding ASCII whitespace. Anything else,
    /// including booleans and `NaN`/`inf` spellings, is not numeric.
    fn read(value: &Value) -> Option<Self> {
        match value {
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Some(Numeric::Int(i128::from(i)))
                } else if let Some(u) = n.as_u64() {
                    Some(Numeric::Int(i128::from(u)))
                } else {
                    n.as_f64().map(Numeric::Float)
                }
            }
            Value::String(s) => {
                let literal = s.trim_matches(|c: char| c.is_ascii_whitespace() || c == '\x0b');
                if !NUMERIC_LITERAL.is_match(literal) {
                    return None;
                }
                if let Ok(i) = literal.parse::<i128>() {
                    return Some(Numeric::Int(i));
                }
                literal.parse::<f64>().ok().map(Numeric::Float)
            }
            _ => None,
        }
    }

    fn is_below(self, bound: i64) -> bool {
        match self {
            Numeric::Int(i) => i < i128::from(bound),
            Numeric::Float(f) => f < bound as f64,
        }
    }

    fn is_above(self, bound: i64) -> bool {
        match self {
            Numeric::Int(i) => i > i128::from(bound),
            Numeric::Float(f) => f > bound as f64,
        }
    }
}

/// A schema for validating numbers.
///
/// Accepts JSON numbers and numeric strings such as `"42"` or `" 1.5e3 "`.
/// Accepted values are returned in their original representation: a numeric
/// string stays a string. The range check is inclusive on both ends.
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::number().min(0).max(10);
///
/// assert_eq!(schema.validate(&json!(5)).unwrap(), json!(5));
/// assert_eq!(schema.validate(&json!(15)).unwrap_err().kind, ErrorKind::TooMany);
///
/// // Numeric strings pass through unchanged.
/// assert_eq!(schema.validate(&json!("7")).unwrap(), json!("7"));
/// ```
#[derive(Clone, Debug)]
pub struct NumberSchema {
    min: i64,
    max: i64,
    optional: bool,
}

impl NumberSchema {
    /// Creates a new number schema accepting the full `i64` range.
    pub fn new() -> Self {
        Self {
            min: i64::MIN,
            max: i64::MAX,
            optional: false,
        }
    }

    /// Sets the minimum value (inclusive).
    pub fn min(mut self, min: i64) -> Self {
        self.min = min;
        self
    }

    /// Sets the maximum value (inclusive).
    pub fn max(mut self, max: i64) -> Self {
        self.max = max;
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

impl Default for NumberSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for NumberSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Number
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        let number =
            Numeric::read(value).ok_or_else(|| ValidationError::type_mismatch(path, "number", value))?;

        if number.is_below(self.min) {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::TooFew,
                format!("value must be at least {}", self.min),
            )
            .with_expected(format!(">= {}", self.min))
            .with_got(value.to_string()));
        }

        if number.is_above(self.max) {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::TooMany,
                format!("value must be at most {}", self.max),
            )
            .with_expected(format!("<= {}", self.max))
            .with_got(value.to_string()));
        }

        Ok(value.clone())
    }
}
