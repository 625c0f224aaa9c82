//! `modelbase-core` — base entity building blocks.
//!
//! This crate contains the **pure domain** record shared by every entity kind
//! in the data-management tool: identity, timestamps, the open-ended attribute
//! bag, and dictionary (de)serialization. Durable persistence lives behind the
//! [`Storage`] port; implementations belong elsewhere.

pub mod entity;
pub mod error;
pub mod storage;
pub mod timestamp;

pub use entity::{Entity, TYPE_KEY};
pub use error::{ModelError, ModelResult};
pub use storage::{Storage, StorageError};
