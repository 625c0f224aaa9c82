//! Storage port: the persistence contract consumed by entities.
//!
//! The entity only *notifies* storage: on fresh construction and on every
//! explicit save. What "durable" means (file, database, memory) is the
//! implementation's business; `modelbase-store` ships the in-memory one.

use thiserror::Error;

use crate::entity::Entity;

/// Storage backend failure.
///
/// Keep payloads as plain strings so errors stay comparable in tests; the
/// backend is expected to fold its own error types into these categories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Encoding an entity (or the whole store) to its serialized form failed.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The durable medium failed (disk full, permission denied, ...).
    #[error("io failure: {0}")]
    Io(String),

    /// Any other backend-specific failure.
    #[error("backend failure: {0}")]
    Backend(String),
}

impl StorageError {
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

/// Persistence collaborator for entities.
///
/// Passed explicitly into [`Entity::new`](crate::Entity::new) and
/// [`Entity::touch`](crate::Entity::touch); there is no process-wide
/// singleton unless the embedding application wires one up itself.
pub trait Storage {
    /// Register a freshly created entity so it is tracked for persistence.
    ///
    /// Called exactly once per fresh construction; restored entities are
    /// assumed already tracked and are never re-registered.
    fn register(&mut self, entity: &Entity) -> Result<(), StorageError>;

    /// Persist every currently tracked entity to durable form.
    fn save(&mut self) -> Result<(), StorageError>;
}
