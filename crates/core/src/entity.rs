//! The base entity record: identity + timestamps + open-ended attributes.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value as JsonValue};
use uuid::Uuid;

use crate::error::{ModelError, ModelResult};
use crate::storage::Storage;
use crate::timestamp;

/// Reserved key carrying the entity kind in the serialized form.
pub const TYPE_KEY: &str = "__class__";

/// Base record shared by every entity kind in the tool.
///
/// Each concrete kind supplies its tag at construction; the tag is emitted as
/// [`TYPE_KEY`] so kinds stay distinguishable within a shared store. The `id`
/// stays a `String` (not a typed UUID) because restoration accepts arbitrary
/// values and coerces them to text.
///
/// Not designed for concurrent mutation; callers serialize access externally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    type_name: &'static str,
    id: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    attributes: Map<String, JsonValue>,
}

impl Entity {
    /// Fresh construction: generate identity and timestamps, then register
    /// with the Storage collaborator so it is tracked for persistence.
    ///
    /// Registration failure propagates and no entity is returned.
    pub fn new(type_name: &'static str, storage: &mut dyn Storage) -> ModelResult<Self> {
        let now = Utc::now();
        let entity = Self {
            type_name,
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            attributes: Map::new(),
        };
        storage.register(&entity)?;
        tracing::debug!(kind = type_name, id = %entity.id, "registered fresh entity");
        Ok(entity)
    }

    /// Restoration: rebuild an entity from a previously serialized dictionary.
    ///
    /// Keys absent from `fields` keep fresh defaults. Reserved keys are
    /// interpreted (`id` coerced to string, timestamps parsed from the fixed
    /// textual format); everything else, [`TYPE_KEY`] included, is copied
    /// verbatim into the attribute bag. The store already tracks restored
    /// records, so storage is not notified.
    pub fn from_dict(
        type_name: &'static str,
        fields: &Map<String, JsonValue>,
    ) -> ModelResult<Self> {
        let now = Utc::now();
        let mut entity = Self {
            type_name,
            id: Uuid::new_v4().to_string(),
            created_at: now,
            updated_at: now,
            attributes: Map::new(),
        };

        for (key, value) in fields {
            match key.as_str() {
                "created_at" => entity.created_at = parse_timestamp_field(key, value)?,
                "updated_at" => entity.updated_at = parse_timestamp_field(key, value)?,
                "id" => entity.id = coerce_to_string(value),
                _ => {
                    entity.attributes.insert(key.clone(), value.clone());
                }
            }
        }

        Ok(entity)
    }

    /// Kind tag emitted as [`TYPE_KEY`] in the serialized form.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Globally unique identifier, immutable after construction.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Extra attributes beyond the reserved fields.
    pub fn attributes(&self) -> &Map<String, JsonValue> {
        &self.attributes
    }

    /// Look up an extra attribute by name.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.attributes.get(key)
    }

    /// Assign an extra attribute. Arbitrary values are accepted as given;
    /// only the reserved timestamp fields are ever validated.
    ///
    /// A reserved key (`id`, `created_at`, `updated_at`, [`TYPE_KEY`]) lands
    /// in the bag like any other but is shadowed by the live reserved value
    /// in the dictionary and text forms.
    pub fn set(&mut self, key: impl Into<String>, value: JsonValue) {
        self.attributes.insert(key.into(), value);
    }

    /// Advance `updated_at` to now, then ask storage to persist the store.
    ///
    /// The in-memory update happens first and is kept even when the save
    /// fails; the failure itself propagates unchanged.
    pub fn touch(&mut self, storage: &mut dyn Storage) -> ModelResult<()> {
        self.updated_at = Utc::now();
        tracing::debug!(kind = self.type_name, id = %self.id, "touch");
        storage.save()?;
        Ok(())
    }

    /// Serialized form: every attribute plus the reserved fields, timestamps
    /// in their canonical text, and [`TYPE_KEY`] set to the live kind tag
    /// (overwriting any restored `__class__` attribute).
    ///
    /// Returns a fresh, deeply cloned mapping each call.
    pub fn to_dict(&self) -> Map<String, JsonValue> {
        let mut dict = self.reserved_and_extra_fields();
        dict.insert(
            TYPE_KEY.to_string(),
            JsonValue::String(self.type_name.to_string()),
        );
        dict
    }

    /// Every current field (reserved + extra), without the kind tag.
    fn reserved_and_extra_fields(&self) -> Map<String, JsonValue> {
        let mut dict = self.attributes.clone();
        dict.insert("id".to_string(), JsonValue::String(self.id.clone()));
        dict.insert(
            "created_at".to_string(),
            JsonValue::String(timestamp::format(self.created_at)),
        );
        dict.insert(
            "updated_at".to_string(),
            JsonValue::String(timestamp::format(self.updated_at)),
        );
        dict
    }
}

/// `[<TypeName>] (<id>) <attributes-dict>`, attributes in sorted key order.
impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {}",
            self.type_name,
            self.id,
            JsonValue::Object(self.reserved_and_extra_fields())
        )
    }
}

/// The serialized form is the dictionary form.
impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_dict().serialize(serializer)
    }
}

fn parse_timestamp_field(field: &str, value: &JsonValue) -> ModelResult<DateTime<Utc>> {
    let text = value
        .as_str()
        .ok_or_else(|| ModelError::timestamp_parse(field, value.to_string()))?;
    timestamp::parse(text).map_err(|_| ModelError::timestamp_parse(field, text))
}

fn coerce_to_string(value: &JsonValue) -> String {
    match value {
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}
