//! String schema validation.
//!
//! This module provides [`StringSchema`] for validating string values with
//! length bounds and a regex pattern. The same length/pattern rules back
//! [`AnySchema`](super::AnySchema).

use regex::Regex;
use serde_json::Value;

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;

use super::traits::{SchemaKind, SchemaLike};

/// Length bounds and an optional pattern applied to a piece of text.
#[derive(Clone, Debug)]
pub(super) struct TextRules {
    min_len: usize,
    max_len: usize,
    pattern: Option<Regex>,
}

impl TextRules {
    pub(super) fn new() -> Self {
        Self {
            min_len: 0,
            max_len: usize::MAX,
            pattern: None,
        }
    }

    pub(super) fn set_min(&mut self, min: usize) {
        self.min_len = min;
    }

    pub(super) fn set_max(&mut self, max: usize) {
        self.max_len = max;
    }

    pub(super) fn set_pattern(&mut self, regex: Regex) {
        self.pattern = Some(regex);
    }

    /// Returns true if no rule can reject any text.
    pub(super) fn is_unconstrained(&self) -> bool {
        self.min_len == 0 && self.max_len == usize::MAX && self.pattern.is_none()
    }

    /// Checks `text` against the length bounds, then the pattern.
    pub(super) fn check(&self, text: &str, path: &JsonPath) -> Result<(), ValidationError> {
        let len = text.chars().count();

        if len < self.min_len {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::TooShort,
                format!("length must be at least {}, got {}", self.min_len, len),
            )
            .with_expected(format!("at least {} characters", self.min_len))
            .with_got(format!("{} characters", len)));
        }

        if len > self.max_len {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::TooLong,
                format!("length must be at most {}, got {}", self.max_len, len),
            )
            .with_expected(format!("at most {} characters", self.max_len))
            .with_got(format!("{} characters", len)));
        }

        if let Some(regex) = &self.pattern {
            if !regex.is_match(text) {
                return Err(ValidationError::new(
                    path.clone(),
                    ErrorKind::PatternMismatch,
                    format!("must match pattern '{}'", regex.as_str()),
                )
                .with_expected(format!("string matching '{}'", regex.as_str()))
                .with_got(text));
            }
        }

        Ok(())
    }
}

/// A schema for validating string values.
///
/// Checks run in a fixed order and stop at the first failure: type, minimum
/// length, maximum length, pattern. A valid string is returned unchanged.
///
/// Length counts Unicode scalar values, not bytes: `"日本語"` has length 3
/// although it is 9 bytes of UTF-8, so byte-counting bounds do not carry over
/// for non-ASCII text.
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::string().min(3).max(5);
///
/// assert_eq!(schema.validate(&json!("abcd")).unwrap(), json!("abcd"));
/// assert_eq!(schema.validate(&json!("ab")).unwrap_err().kind, ErrorKind::TooShort);
/// assert_eq!(schema.validate(&json!("abcdef")).unwrap_err().kind, ErrorKind::TooLong);
/// ```
#[derive(Clone, Debug)]
pub struct StringSchema {
    rules: TextRules,
    optional: bool,
}

impl StringSchema {
    /// Creates a new string schema with no constraints.
    pub fn new() -> Self {
        Self {
            rules: TextRules::new(),
            optional: false,
        }
    }

    /// Sets the minimum length (inclusive).
    pub fn min(mut self, min: usize) -> Self {
        self.rules.set_min(min);
        self
    }

    /// Sets the maximum length (inclusive).
    pub fn max(mut self, max: usize) -> Self {
        self.rules.set_max(max);
        self
    }

    /// Sets the pattern the string must match.
    ///
    /// Returns an error if the pattern is not a valid regex.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tripwire::Schema;
    /// use serde_json::json;
    ///
    /// let schema = Schema::string().matches(r"^\d+$").unwrap();
    ///
    /// assert!(schema.validate(&json!("12345")).is_ok());
    /// assert!(schema.validate(&json!("abc")).is_err());
    /// ```
    pub fn matches(self, pattern: &str) -> Result<Self, regex::Error> {
        Ok(self.matches_regex(Regex::new(pattern)?))
    }

    /// Sets an already compiled pattern the string must match.
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

impl Default for StringSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLike for StringSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::String
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        let s = value
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch(path, "string", value))?;

        self.rules.check(s, path)?;
        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_schema_accepts_string() {
        let schema = StringSchema::new();
        assert_eq!(schema.validate(&json!("hello")).unwrap(), json!("hello"));
    }

    #[test]
    fn test_unconfigured_accepts_empty_string() {
        let schema = StringSchema::new();
        assert_eq!(schema.validate(&json!("")).unwrap(), json!(""));
    }

    #[test]
    fn test_rejects_non_string() {
        let schema = StringSchema::new();

        let error = schema.validate(&json!(42)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeMismatch);
        assert_eq!(error.got, Some("number".to_string()));

        for value in [json!(null), json!(true), json!([1, 2]), json!({"k": "v"})] {
            assert_eq!(
                schema.validate(&value).unwrap_err().kind,
                ErrorKind::TypeMismatch
            );
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let schema = StringSchema::new().min(3).max(5);
        assert!(schema.validate(&json!("abc")).is_ok());
        assert!(schema.validate(&json!("abcde")).is_ok());
    }

    #[test]
    fn test_min_checked_before_pattern() {
        let schema = StringSchema::new().min(10).matches(r"^\d+$").unwrap();

        let error = schema.validate(&json!("abc")).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TooShort);
    }

    #[test]
    fn test_pattern_error_includes_pattern() {
        let schema = StringSchema::new().matches(r"^\d+$").unwrap();
        let error = schema.validate(&json!("abc")).unwrap_err();
        assert_eq!(error.kind, ErrorKind::PatternMismatch);
        assert!(error.message.contains(r"^\d+$"));
        assert_eq!(error.got.as_deref(), Some("abc"));
    }

    #[test]
    fn test_unicode_length() {
        let schema = StringSchema::new().min(3).max(5);
        assert!(schema.validate(&json!("日本語")).is_ok());
        assert!(schema.validate(&json!("🎉🎊")).is_err());
    }

    #[test]
    fn test_length_is_not_byte_count() {
        let schema = StringSchema::new().max(3);
        assert_eq!("日本語".len(), 9);
        assert_eq!(schema.validate(&json!("日本語")).unwrap(), json!("日本語"));
        assert_eq!(
            StringSchema::new().min(4).validate(&json!("日本語")).unwrap_err().kind,
            ErrorKind::TooShort
        );
    }

    #[test]
    fn test_optional_skips_all_checks() {
        let schema = StringSchema::new().min(3).matches("^x+$").unwrap().optional();

        assert_eq!(schema.validate(&json!(null)).unwrap(), Value::Null);
        assert_eq!(schema.validate(&json!("")).unwrap(), Value::Null);
        assert_eq!(
            schema.validate(&json!("ab")).unwrap_err().kind,
            ErrorKind::TooShort
        );
    }

    #[test]
    fn test_required_empty_string_hits_min() {
        let schema = StringSchema::new().min(1);
        assert_eq!(
            schema.validate(&json!("")).unwrap_err().kind,
            ErrorKind::TooShort
        );
    }

    #[test]
    fn test_invalid_regex_pattern() {
        assert!(StringSchema::new().matches(r"[invalid").is_err());
    }

    #[test]
    fn test_text_rules_unconstrained() {
        assert!(TextRules::new().is_unconstrained());
        let mut rules = TextRules::new();
        rules.set_max(4);
        assert!(!rules.is_unconstrained());
    }
}
