//! `modelbase-store` — Storage implementations for the entity foundation.
//!
//! The durable file/database encoding of the store is owned by the embedding
//! application; this crate provides the in-memory backend used by tests and
//! development tooling.

pub mod in_memory;

pub use in_memory::{InMemoryStore, storage_key};
