// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity Reference Value Object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable reference to a domain entity by `(type, id)`
///
/// An `EntityRef` identifies an entity without holding a live handle to it.
/// Equality and hashing use both the type name and the id, so two entities of
/// different types sharing an id are distinct references.
///
/// # Examples
///
/// ```rust
/// use activity_stream::domain::EntityRef;
///
/// let user = EntityRef::new("user", "u1");
/// assert_eq!(user.entity_type(), "user");
/// assert_eq!(user.id(), "u1");
/// assert_eq!(user.to_string(), "user:u1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityRef {
    #[serde(rename = "type")]
    entity_type: String,
    id: String,
}

impl EntityRef {
    /// Create a reference from a type name and an id
    pub fn new(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// The entity's type name
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// The entity's id
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.id)
    }
}
