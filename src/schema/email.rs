//! Email address validation.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::error::{ErrorKind, ValidationError};
use crate::path::JsonPath;

use super::traits::{SchemaKind, SchemaLike};

const MAX_LOCAL_LEN: usize = 64;
const MAX_ADDRESS_LEN: usize = 254;

/// Dot-atom local part, then a dotted domain of letter/digit/hyphen labels.
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*",
        r"@",
        r"(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+",
        r"[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$",
    ))
    .expect("email pattern is valid")
});

/// Returns true if `address` is a syntactically valid email address.
fn is_email(address: &str) -> bool {
    if address.len() > MAX_ADDRESS_LEN {
        return false;
    }
    match address.rsplit_once('@') {
        Some((local, _)) if local.len() <= MAX_LOCAL_LEN => EMAIL.is_match(address),
        _ => false,
    }
}

/// A schema for validating email addresses.
///
/// The value must be a string of the form `local-part@domain`: a dot-atom
/// local part of at most 64 characters and a domain of at least two dotted
/// labels. The address is returned unchanged.
///
/// # Example
///
/// ```rust
/// use tripwire::{ErrorKind, Schema};
/// use serde_json::json;
///
/// let schema = Schema::email();
///
/// assert!(schema.validate(&json!("a@b.com")).is_ok());
/// assert_eq!(
///     schema.validate(&json!("not-an-email")).unwrap_err().kind,
///     ErrorKind::InvalidFormat
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct EmailSchema {
    optional: bool,
}

impl EmailSchema {
    /// Creates a new email schema.
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

impl SchemaLike for EmailSchema {
    fn kind(&self) -> SchemaKind {
        SchemaKind::Email
    }

    fn is_optional(&self) -> bool {
        self.optional
    }

    fn check(&self, value: &Value, path: &JsonPath) -> Result<Value, ValidationError> {
        let address = value
            .as_str()
            .ok_or_else(|| ValidationError::type_mismatch(path, "string", value))?;

        if !is_email(address) {
            return Err(ValidationError::new(
                path.clone(),
                ErrorKind::InvalidFormat,
                "invalid email address",
            )
            .with_expected("local-part@domain")
            .with_got(address));
        }

        Ok(value.clone())
    }
}
