//! Schema registry for named schema storage.
//!
//! This module provides the [`SchemaRegistry`] type that stores configured
//! schemas under names so that independent parts of a program can validate
//! against the same definitions.

use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::ValidationError;
use crate::schema::{SchemaLike, SchemaRef};

/// Type alias for the schema storage map.
type SchemaMap = Arc<RwLock<HashMap<String, SchemaRef>>>;

/// A thread-safe registry of named schemas.
///
/// # Thread Safety
///
/// The registry uses `Arc<RwLock<...>>` for thread-safe access:
/// - Multiple threads can look up and validate concurrently (read access)
/// - Registration operations are serialized (write access)
///
/// Cloning a registry is cheap and yields a handle to the same table.
///
/// # Example
///
/// ```rust
/// use tripwire::{Schema, SchemaRegistry};
/// use serde_json::json;
///
/// let registry = SchemaRegistry::new();
/// registry.register("Email", Schema::email()).unwrap();
/// registry
///     .register("User", Schema::object()
///         .field("name", Schema::string().min(1))
///         .field("email", registry.get("Email").unwrap()))
///     .unwrap();
///
/// let user = registry.validate("User", &json!({"name": "Ann", "email": "ann@example.com"}));
/// assert!(user.is_ok());
/// ```
#[derive(Clone, Default)]
pub struct SchemaRegistry {
    schemas: SchemaMap,
}

impl SchemaRegistry {
    /// Creates a new empty schema registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a schema with the given name.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::DuplicateName` if the name is already registered.
    pub fn register<S>(&self, name: impl Into<String>, schema: S) -> Result<(), RegistryError>
    where
        S: SchemaLike + 'static,
    {
        let name = name.into();
        let mut schemas = self.schemas.write();

        if schemas.contains_key(&name) {
            return Err(RegistryError::DuplicateName(name));
        }

        tracing::debug!(name = %name, kind = %schema.kind(), "registered schema");
        schemas.insert(name, schema.shared());
        Ok(())
    }

    /// Retrieves a schema by name.
    pub fn get(&self, name: &str) -> Option<SchemaRef> {
        self.schemas.read().get(name).cloned()
    }

    /// Returns true if a schema is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.schemas.read().contains_key(name)
    }

    /// Returns the registered names in sorted order.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.schemas.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered schemas.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// Returns true if no schema is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Validates a value against a named schema.
    ///
    /// The lock is released before validation runs, so a long validation
    /// never blocks registration.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::SchemaNotFound` if the name is not registered
    /// and `RegistryError::Invalid` if the value fails validation.
    pub fn validate(&self, schema_name: &str, value: &Value) -> Result<Value, RegistryError> {
        let schema = self
            .get(schema_name)
            .ok_or_else(|| RegistryError::SchemaNotFound(schema_name.to_string()))?;

        Ok(schema.validate(value)?)
    }
}

/// Errors that can occur during registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Attempted to register a schema with a name that already exists.
    #[error("schema '{0}' already registered")]
    DuplicateName(String),

    /// Attempted to validate with a schema name that doesn't exist.
    #[error("schema '{0}' not found")]
    SchemaNotFound(String),

    /// The value failed validation against the named schema.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}
