//! # Tripwire
//!
//! A composable, declarative validation library for untrusted JSON-like input.
//!
//! ## Overview
//!
//! Callers assemble a schema tree out of leaf schemas (strings, numbers,
//! emails, timestamps, unconstrained values) and composite schemas (arrays and
//! objects), then call `validate` once at the root. Validation walks the tree
//! depth-first and stops at the first failing check: the caller either gets
//! back the normalized value or exactly one [`ValidationError`] describing
//! what went wrong and where.
//!
//! ## Core Types
//!
//! - [`Schema`]: Entry point for creating validation schemas
//! - [`SchemaLike`]: The contract shared by every schema variant
//! - [`ValidationError`]: The single failure reported by a validation run
//! - [`JsonPath`]: Location of the failing value (e.g., `users[0].email`)
//! - [`SchemaRegistry`]: Thread-safe table of named schemas
//!
//! ## Example
//!
//! ```rust
//! use tripwire::{ErrorKind, Schema};
//! use serde_json::json;
//!
//! let schema = Schema::object()
//!     .field("name", Schema::string().min(1).max(100))
//!     .field("age", Schema::number().min(0).optional());
//!
//! let result = schema.validate(&json!({"name": "Ann"}));
//! assert_eq!(result.unwrap(), json!({"name": "Ann", "age": null}));
//!
//! let error = schema.validate(&json!({"age": 30})).unwrap_err();
//! assert_eq!(error.kind, ErrorKind::MissingField);
//! assert_eq!(error.path.to_string(), "name");
//! ```

pub mod error;
pub mod path;
pub mod registry;
pub mod schema;

pub use error::{ErrorKind, ValidationError};
pub use path::{JsonPath, PathSegment};
pub use registry::{RegistryError, SchemaRegistry};
pub use schema::{
    AnySchema, ArraySchema, EmailSchema, NumberSchema, ObjectSchema, Schema, SchemaKind,
    SchemaLike, SchemaRef, StringSchema, TimestampSchema,
};

/// Type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;
