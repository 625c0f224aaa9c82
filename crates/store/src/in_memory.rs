//! In-memory Storage backend.

use std::collections::HashMap;

use serde_json::{Map, Value as JsonValue};

use modelbase_core::{Entity, Storage, StorageError};

/// Composite key distinguishing entity kinds within the shared store.
pub fn storage_key(type_name: &str, id: &str) -> String {
    format!("{type_name}.{id}")
}

/// In-memory store of serialized entity snapshots.
///
/// Intended for tests/dev. Registration snapshots the entity's dictionary
/// form under `"<TypeName>.<id>"`; `save` copies every tracked snapshot into
/// the persisted view, standing in for a write to durable media.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tracked: HashMap<String, Map<String, JsonValue>>,
    persisted: HashMap<String, Map<String, JsonValue>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of a tracked entity, if registered.
    pub fn tracked(&self, type_name: &str, id: &str) -> Option<&Map<String, JsonValue>> {
        self.tracked.get(&storage_key(type_name, id))
    }

    /// Snapshot of a persisted entity, if a save has happened since tracking.
    pub fn persisted(&self, type_name: &str, id: &str) -> Option<&Map<String, JsonValue>> {
        self.persisted.get(&storage_key(type_name, id))
    }

    /// Every tracked snapshot, keyed `"<TypeName>.<id>"`.
    pub fn all(&self) -> &HashMap<String, Map<String, JsonValue>> {
        &self.tracked
    }

    pub fn len(&self) -> usize {
        self.tracked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracked.is_empty()
    }
}

impl Storage for InMemoryStore {
    fn register(&mut self, entity: &Entity) -> Result<(), StorageError> {
        let key = storage_key(entity.type_name(), entity.id());
        tracing::debug!(%key, "tracking entity");
        self.tracked.insert(key, entity.to_dict());
        Ok(())
    }

    fn save(&mut self) -> Result<(), StorageError> {
        tracing::debug!(count = self.tracked.len(), "persisting tracked entities");
        self.persisted = self.tracked.clone();
        Ok(())
    }
}
