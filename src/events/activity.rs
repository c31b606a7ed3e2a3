// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Record
//!
//! The immutable, denormalized record produced by a successful construction.
//! Every participant is stored as an [`EntityRef`] plus the fields its
//! definition asked to cache, so rendering an activity needs no lookups.
//!
//! # Persisted Layout
//!
//! ```text
//! {
//!   "event_version": 1,
//!   "event_id": "0190…",
//!   "published_at": "2026-01-19T12:00:00Z",
//!   "verb": "new_enquiry",
//!   "roles":   { "actor": { "type": "user", "id": "u1", "cache": { "full_name": "Christos" } } },
//!   "groups":  { "act_object_group": [ { "type": "photo", "id": "p1", "cache": {} } ] },
//!   "options": { "visibility": "friends" },
//!   "receivers": [ { "type": "user", "id": "u2" } ]
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::domain::{CachedFields, EntityRef, FieldValue};

/// Current schema version of [`Activity`]
pub const ACTIVITY_EVENT_VERSION: u32 = 1;

/// One participant as stored on an activity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantSnapshot {
    #[serde(flatten)]
    pub(crate) entity: EntityRef,

    #[serde(default)]
    pub(crate) cache: CachedFields,
}

impl ParticipantSnapshot {
    pub fn new(entity: EntityRef, cache: CachedFields) -> Self {
        Self { entity, cache }
    }

    pub fn entity(&self) -> &EntityRef {
        &self.entity
    }

    /// Fields captured at publish time (or at the last refresh)
    pub fn cache(&self) -> &CachedFields {
        &self.cache
    }

    /// A single cached field
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.cache.get(name)
    }
}

/// A published activity
///
/// Identity (envelope, verb and every participant reference) is fixed when the
/// activity is constructed. Only cached fields change, and only through a
/// refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Event version for schema evolution
    pub(crate) event_version: u32,

    /// Unique event identifier (UUID v7 for time ordering)
    pub(crate) event_id: Uuid,

    /// When the activity was constructed
    pub(crate) published_at: DateTime<Utc>,

    pub(crate) verb: String,

    pub(crate) roles: BTreeMap<String, ParticipantSnapshot>,

    pub(crate) groups: BTreeMap<String, Vec<ParticipantSnapshot>>,

    pub(crate) options: BTreeMap<String, String>,

    pub(crate) receivers: Vec<EntityRef>,
}

impl Activity {
    pub(crate) fn new(
        verb: String,
        roles: BTreeMap<String, ParticipantSnapshot>,
        groups: BTreeMap<String, Vec<ParticipantSnapshot>>,
        options: BTreeMap<String, String>,
        receivers: Vec<EntityRef>,
    ) -> Self {
        Self {
            event_version: ACTIVITY_EVENT_VERSION,
            event_id: Uuid::now_v7(),
            published_at: Utc::now(),
            verb,
            roles,
            groups,
            options,
            receivers,
        }
    }

    pub fn event_version(&self) -> u32 {
        self.event_version
    }

    pub fn event_id(&self) -> Uuid {
        self.event_id
    }

    pub fn published_at(&self) -> DateTime<Utc> {
        self.published_at
    }

    pub fn verb(&self) -> &str {
        &self.verb
    }

    pub fn roles(&self) -> &BTreeMap<String, ParticipantSnapshot> {
        &self.roles
    }

    pub fn groups(&self) -> &BTreeMap<String, Vec<ParticipantSnapshot>> {
        &self.groups
    }

    pub fn options(&self) -> &BTreeMap<String, String> {
        &self.options
    }

    pub fn receivers(&self) -> &[EntityRef] {
        &self.receivers
    }

    pub fn role(&self, name: &str) -> Option<&ParticipantSnapshot> {
        self.roles.get(name)
    }

    pub fn group(&self, name: &str) -> Option<&[ParticipantSnapshot]> {
        self.groups.get(name).map(Vec::as_slice)
    }

    pub fn option(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(String::as_str)
    }

    /// Entity type shared by every receiver
    ///
    /// `None` when there are no receivers or their types differ.
    pub fn receiver_type(&self) -> Option<&str> {
        let (first, rest) = self.receivers.split_first()?;
        rest.iter()
            .all(|r| r.entity_type() == first.entity_type())
            .then(|| first.entity_type())
    }

    /// Whether `entity` is among the receivers
    pub fn is_received_by(&self, entity: &EntityRef) -> bool {
        self.receivers.contains(entity)
    }

    /// Every participant reference, roles first, then group members in order
    pub fn participants(&self) -> impl Iterator<Item = (&str, &EntityRef)> {
        let roles = self
            .roles
            .iter()
            .map(|(name, snapshot)| (name.as_str(), &snapshot.entity));
        let members = self.groups.iter().flat_map(|(name, members)| {
            members
                .iter()
                .map(move |snapshot| (name.as_str(), &snapshot.entity))
        });
        roles.chain(members)
    }

    /// Serialize to the persisted JSON layout
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
