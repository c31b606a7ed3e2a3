//! Verb definitions and validated activity records for activity streams
//!
//! Applications declare, per verb, which participant roles and groups an
//! activity requires, which entity types may fill them, which fields to
//! snapshot, and which options must accompany it. At publish time raw input is
//! validated against the verb's definition and turned into an immutable,
//! denormalized [`Activity`].

pub mod config;
pub mod definition;
pub mod domain;
pub mod engine;
pub mod errors;
pub mod event_store;
pub mod events;
pub mod resolver;
pub mod service;

// Re-export commonly used types
pub use config::{EngineConfig, RefreshPolicy};
pub use definition::{Definition, DefinitionDsl, DefinitionRegistry};
pub use domain::{CachedFields, Entity, EntityRecord, EntityRef, FieldValue};
pub use engine::ActivityEngine;
pub use errors::{ActivityError, ActivityResult};
pub use events::{Activity, ActivityData, ActivityValue, ParticipantSnapshot};
pub use resolver::{EntityResolver, InMemoryEntityResolver};
