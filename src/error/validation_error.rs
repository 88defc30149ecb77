//! Validation error types.
//!
//! This module provides [`ValidationError`], the one failure a validation run
//! reports, and [`ErrorKind`], the classification of that failure.

use std::fmt::{self, Display};

use crate::path::JsonPath;

/// The category of a validation failure.
///
/// Kinds are stable and machine-readable; the human-readable detail lives in
/// [`ValidationError::message`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The value has the wrong JSON type for the schema.
    TypeMismatch,
    /// A string is shorter than the configured minimum length.
    TooShort,
    /// A string is longer than the configured maximum length.
    TooLong,
    /// A number or container is below the configured minimum.
    TooFew,
    /// A number or container is above the configured maximum.
    TooMany,
    /// A string does not match the configured pattern.
    PatternMismatch,
    /// An email or timestamp string is not well formed.
    InvalidFormat,
    /// A container key is not of the kind the array schema expects.
    KeyTypeMismatch,
    /// A required object field is absent.
    MissingField,
    /// An array schema was asked to validate elements without an item schema.
    MissingItemSchema,
    /// An unconstrained schema was given constraints it cannot measure the value against.
    Unmeasurable,
}

impl ErrorKind {
    /// Returns the snake_case code for this kind.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::TypeMismatch => "type_mismatch",
            ErrorKind::TooShort => "too_short",
            ErrorKind::TooLong => "too_long",
            ErrorKind::TooFew => "too_few",
            ErrorKind::TooMany => "too_many",
            ErrorKind::PatternMismatch => "pattern_mismatch",
            ErrorKind::InvalidFormat => "invalid_format",
            ErrorKind::KeyTypeMismatch => "key_type_mismatch",
            ErrorKind::MissingField => "missing_field",
            ErrorKind::MissingItemSchema => "missing_item_schema",
            ErrorKind::Unmeasurable => "unmeasurable",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A validation failure with full context.
///
/// `ValidationError` captures everything known about the first check that
/// failed:
/// - **path**: Where in the data structure the failure occurred
/// - **kind**: Which category of check failed
/// - **message**: Human-readable description of the failure
/// - **got**: The offending value or measurement (optional)
/// - **expected**: What was expected instead (optional)
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, JsonPath, ValidationError};
///
/// let error = ValidationError::new(
///     JsonPath::root().push_field("email"),
///     ErrorKind::InvalidFormat,
///     "invalid email address",
/// )
/// .with_got("not-an-email")
/// .with_expected("local-part@domain");
///
/// assert_eq!(error.kind, ErrorKind::InvalidFormat);
/// assert_eq!(error.to_string(), "email: invalid email address (expected: local-part@domain) (got: not-an-email)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The path to the value that failed validation.
    pub path: JsonPath,
    /// The category of the failure.
    pub kind: ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The actual value that was received (formatted as string).
    pub got: Option<String>,
    /// Description of what was expected.
    pub expected: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(path: JsonPath, kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            path,
            kind,
            message: message.into(),
            got: None,
            expected: None,
        }
    }

    /// Creates a type-mismatch error for `value`, expecting `expected`.
    pub(crate) fn type_mismatch(path: &JsonPath, expected: &str, value: &serde_json::Value) -> Self {
        Self::new(path.clone(), ErrorKind::TypeMismatch, format!("expected {}", expected))
            .with_expected(expected)
            .with_got(crate::schema::value_type_name(value))
    }

    /// Sets the "got" (actual value) field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Returns the machine-readable code of this error's kind.
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {}", self.message)?;
        } else {
            write!(f, "{}: {}", self.path, self.message)?;
        }

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// Errors cross thread boundaries through the registry.
const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};
