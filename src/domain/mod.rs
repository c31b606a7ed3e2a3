// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Domain Models
//!
//! Value objects shared by definitions, the construction engine and stored
//! activities.
//!
//! - [`EntityRef`] - `(type, id)` reference to a domain entity
//! - [`Entity`] - capability set the engine reads from live entities
//! - [`FieldValue`] / [`CachedFields`] - scalar snapshots taken at publish time
//! - [`EntityRecord`] - plain in-memory [`Entity`]

pub mod entity;
pub mod entity_ref;

pub use entity::{CachedFields, Entity, EntityRecord, FieldValue};
pub use entity_ref::EntityRef;
