// Copyright (c) 2025 - Cowboy AI, Inc.
//! Raw Publish Input
//!
//! [`ActivityData`] is the untyped map a caller hands to the engine: role and
//! group participants, option values and receivers, all keyed by name. The
//! engine consumes it key by key and rejects whatever is left over.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::definition::RECEIVERS_KEY;
use crate::domain::Entity;

/// One value in the publish input
#[derive(Debug, Clone)]
pub enum ActivityValue {
    /// A single live entity (roles, or a single receiver)
    Entity(Arc<dyn Entity>),

    /// An ordered collection of live entities (groups, receivers)
    Entities(Vec<Arc<dyn Entity>>),

    /// An opaque scalar (options)
    Scalar(String),
}

impl ActivityValue {
    /// Short description of the value's shape, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            ActivityValue::Entity(_) => "an entity",
            ActivityValue::Entities(_) => "a collection",
            ActivityValue::Scalar(_) => "a scalar",
        }
    }
}

impl From<Arc<dyn Entity>> for ActivityValue {
    fn from(entity: Arc<dyn Entity>) -> Self {
        ActivityValue::Entity(entity)
    }
}

impl From<Vec<Arc<dyn Entity>>> for ActivityValue {
    fn from(entities: Vec<Arc<dyn Entity>>) -> Self {
        ActivityValue::Entities(entities)
    }
}

impl From<&str> for ActivityValue {
    fn from(value: &str) -> Self {
        ActivityValue::Scalar(value.to_string())
    }
}

impl From<String> for ActivityValue {
    fn from(value: String) -> Self {
        ActivityValue::Scalar(value)
    }
}

impl From<i64> for ActivityValue {
    fn from(value: i64) -> Self {
        ActivityValue::Scalar(value.to_string())
    }
}

/// Publish input keyed by role, group, option or `receivers`
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use activity_stream::domain::EntityRecord;
/// use activity_stream::events::ActivityData;
///
/// let data = ActivityData::new()
///     .entity("actor", Arc::new(EntityRecord::new("user", "u1")))
///     .option("visibility", "friends");
///
/// assert_eq!(data.keys(), vec!["actor", "visibility"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ActivityData {
    values: BTreeMap<String, ActivityValue>,
}

impl ActivityData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Supply a single entity for a role
    pub fn entity(mut self, key: &str, entity: Arc<dyn Entity>) -> Self {
        self.insert(key, ActivityValue::Entity(entity));
        self
    }

    /// Supply an entity collection for a group
    pub fn entities(mut self, key: &str, entities: Vec<Arc<dyn Entity>>) -> Self {
        self.insert(key, ActivityValue::Entities(entities));
        self
    }

    /// Supply an option value
    pub fn option(mut self, key: &str, value: impl Into<String>) -> Self {
        self.insert(key, ActivityValue::Scalar(value.into()));
        self
    }

    /// Supply the receiver list
    pub fn receivers(mut self, receivers: Vec<Arc<dyn Entity>>) -> Self {
        self.insert(RECEIVERS_KEY, ActivityValue::Entities(receivers));
        self
    }

    /// Supply a single receiver
    pub fn receiver(mut self, receiver: Arc<dyn Entity>) -> Self {
        self.insert(RECEIVERS_KEY, ActivityValue::Entity(receiver));
        self
    }

    /// Insert any value, returning the one it replaced
    pub fn insert(&mut self, key: &str, value: impl Into<ActivityValue>) -> Option<ActivityValue> {
        self.values.insert(key.to_string(), value.into())
    }

    /// Remove and return a value, marking its key as consumed
    pub fn take(&mut self, key: &str) -> Option<ActivityValue> {
        self.values.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&ActivityValue> {
        self.values.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Remaining keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        self.values.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn into_keys(self) -> Vec<String> {
        self.values.into_keys().collect()
    }
}
