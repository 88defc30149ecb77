//! Timestamp validation for `YYYY-MM-DD HH:MM:SS` strings.

use chrono::{NaiveDateTime, Timelike};
use serde_json::Value;

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;

use super::traits::{SchemaKind, SchemaLike};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TIMESTAMP_LEN: usize = "YYYY-MM-DD HH:MM:SS".len();

/// Parses `text` strictly: the parsed instant must format back to `text`.
///
/// The round trip rejects inputs a lenient parse would accept, such as
/// single-digit fields or leap seconds. `%Y` reads signed and wider years,
/// so the year is pinned to four unsigned digits before parsing.
fn parse_strict(text: &str) -> Option<NaiveDateTime> {
    let bytes = text.as_bytes();
    if bytes.len() != TIMESTAMP_LEN || !bytes[..4].iter().all(u8::is_ascii_digit) {
        return None;
    }

    let parsed = NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).ok()?;
    if parsed.nanosecond() >= 1_000_000_000 {
        return None;
    }
    (parsed.format(TIMESTAMP_FORMAT).to_string() == text).then_some(parsed)
}

/// A schema for validating timestamps.
///
/// The value must be a string in exactly the `YYYY-MM-DD HH:MM:SS` format
/// and name a real calendar instant: `2024-02-29 10:00:00` passes,
/// `2024-02-30 10:00:00` does not. The string is returned unchanged.
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::timestamp();
///
/// assert!(schema.validate(&json!("2024-02-29 10:00:00")).is_ok());
/// assert_eq!(
///     schema.validate(&json!("2024-02-30 10:00:00")).unwrap_err().kind,
///     ErrorKind::InvalidFormat
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct TimestampSchema {
    optional: bool,
}

impl TimestampSchema {
    /// Creates a new timestamp schema.
    pub fn new() -> Self {
        Self::default()
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

impl SchemaLike for TimestampSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Timestamp
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        let text = value
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch(path, "string", value))?;

        if parse_strict(text).is_none() {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::InvalidFormat,
                "invalid timestamp",
            )
            .with_expected("YYYY-MM-DD HH:MM:SS")
            .with_got(text));
        }

        Ok(value.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accepts_valid_instants() {
        for text in [
            "2024-02-29 10:00:00",
            "1999-12-31 23:59:59",
            "2000-01-01 00:00:00",
        ] {
            assert!(parse_strict(text).is_some(), "{} should parse", text);
        }
    }

    #[test]
    fn test_rejects_impossible_dates() {
        for text in [
            "2024-02-30 10:00:00",
            "2023-02-29 10:00:00",
            "2024-13-01 00:00:00",
            "2024-01-32 00:00:00",
            "2024-01-01 24:00:00",
            "2024-01-01 23:60:00",
            "2024-01-01 23:59:60",
        ] {
            assert!(parse_strict(text).is_none(), "{} should be rejected", text);
        }
    }

    #[test]
    fn test_rejects_loose_layouts() {
        for text in [
            "2024-1-01 00:00:00",
            "2024-01-01T00:00:00",
            "2024-01-01 00:00",
            "2024-01-01 00:00:00Z",
            "2024-01-01 00:00:00.5",
            "2024/01/01 00:00:00",
            " 2024-01-01 00:00:00",
            "2024-01-01",
            "-0001-01-01 00:00:00",
            "+2024-01-01 00:00:00",
            "+10000-01-01 00:00:00",
            "+12024-01-01 00:00:00",
            "12024-01-01 00:00:00",
        ] {
            assert!(parse_strict(text).is_none(), "{} should be rejected", text);
        }
    }

    #[test]
    fn test_year_edges() {
        assert!(parse_strict("0000-01-01 00:00:00").is_some());
        assert!(parse_strict("9999-12-31 23:59:59").is_some());
    }

    #[test]
    fn test_type_checked_first() {
        let error = TimestampSchema::new().validate(&json!(1_700_000_000)).unwrap_err();
        assert_eq!(error.kind, ErrorKind::TypeMismatch);
    }

    #[test]
    fn test_optional() {
        let schema = TimestampSchema::new().optional();
        assert_eq!(schema.validate(&json!(null)).unwrap(), Value::Null);
        assert_eq!(
            schema.validate(&json!("yesterday")).unwrap_err().kind,
            ErrorKind::InvalidFormat
        );
    }
}
