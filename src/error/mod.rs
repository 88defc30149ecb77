//! Error types for validation failures.
//!
//! This module provides the single error type reported by a validation run,
//! together with the kind taxonomy used to classify it.

mod validation_error;

pub use validation_error::{ErrorKind, ValidationError};
