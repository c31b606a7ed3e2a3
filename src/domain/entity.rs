// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity Capability and Snapshot Values
//!
//! Activities never hold live domain objects. Callers hand the engine anything
//! implementing [`Entity`]; the engine reads its type name, id and the fields
//! a definition asks it to cache, then keeps only the resulting
//! [`EntityRef`] and [`CachedFields`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::EntityRef;

/// Scalar value copied from a live entity into an activity record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl FieldValue {
    /// Whether the value survives a JSON round trip unchanged
    ///
    /// JSON has no NaN or infinity; serde_json writes them as `null`.
    pub fn is_storable(&self) -> bool {
        match self {
            FieldValue::Float(value) => value.is_finite(),
            _ => true,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(value) => write!(f, "{}", value),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Float(value) => write!(f, "{}", value),
            FieldValue::Text(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// Field name to snapshot value, ordered by field name
pub type CachedFields = BTreeMap<String, FieldValue>;

/// Capability set the engine needs from a domain entity
///
/// `field` returns `None` when the entity does not expose the named field at
/// all; a field that exists but is empty should return `Some(FieldValue::Null)`.
pub trait Entity: Send + Sync + fmt::Debug {
    /// Entity type name, matched against a definition's allowed types
    fn type_name(&self) -> &str;

    /// Stable id of the entity within its type
    fn id(&self) -> String;

    /// Read a named field for snapshotting
    fn field(&self, name: &str) -> Option<FieldValue>;

    /// Reference to this entity
    fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.type_name(), self.id())
    }
}

/// A bare reference fills any slot that caches no fields
impl Entity for EntityRef {
    fn type_name(&self) -> &str {
        self.entity_type()
    }

    fn id(&self) -> String {
        EntityRef::id(self).to_string()
    }

    fn field(&self, _name: &str) -> Option<FieldValue> {
        None
    }

    fn entity_ref(&self) -> EntityRef {
        self.clone()
    }
}

/// Plain in-memory entity
///
/// Useful when entities arrive as loose data (fixtures, imports, demos)
/// rather than as typed domain objects.
///
/// # Examples
///
/// ```rust
/// use activity_stream::domain::{Entity, EntityRecord, FieldValue};
///
/// let user = EntityRecord::new("user", "u1").with_field("full_name", "Christos");
/// assert_eq!(user.field("full_name"), Some(FieldValue::from("Christos")));
/// assert_eq!(user.field("email"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    entity_type: String,
    id: String,
    fields: BTreeMap<String, FieldValue>,
}

impl EntityRecord {
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field setter
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Overwrite a field in place
    pub fn set_field(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }
}

impl Entity for EntityRecord {
    fn type_name(&self) -> &str {
        &self.entity_type
    }

    fn id(&self) -> String {
        self.id.clone()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        self.fields.get(name).cloned()
    }
}
