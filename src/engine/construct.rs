// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Construction - Validate and Normalize Publish Input
//!
//! Turns a [`Definition`] plus raw [`ActivityData`] into an [`Activity`].
//! Everything here is pure: no I/O, no shared state, deterministic apart from
//! the envelope id and timestamp.
//!
//! # Algorithm
//!
//! 1. Take `receivers` if present and normalize to a list of references
//! 2. Take every declared role; each must be a single entity of a legal type
//! 3. Take every declared group; each must be a non-empty entity collection,
//!    every member of a legal type
//! 4. Take every declared option; each must be a scalar
//! 5. Reject whatever keys remain
//!
//! Validation stops at the first failure. Nothing is returned on failure, so
//! a partially populated activity can never escape.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::definition::{Definition, ParticipantSpec, TypeSpec, RECEIVERS_KEY};
use crate::domain::{CachedFields, Entity, EntityRef, FieldValue};
use crate::errors::{ActivityError, ActivityResult};
use crate::events::{Activity, ActivityData, ActivityValue, ParticipantSnapshot};

/// Validate `data` against `definition` and build the activity
pub fn build_activity(definition: &Definition, mut data: ActivityData) -> ActivityResult<Activity> {
    let receivers = match data.take(RECEIVERS_KEY) {
        Some(value) => normalize_receivers(value)?,
        None => Vec::new(),
    };

    let mut roles = BTreeMap::new();
    for spec in definition.roles() {
        let entity = match data.take(spec.name()) {
            Some(ActivityValue::Entity(entity)) => entity,
            Some(other) => {
                return Err(ActivityError::malformed(
                    spec.name(),
                    format!("expected a single entity, got {}", other.kind()),
                ))
            }
            None => {
                return Err(ActivityError::MissingParticipant {
                    role: spec.name().to_string(),
                })
            }
        };

        roles.insert(spec.name().to_string(), snapshot(spec, entity.as_ref())?);
    }

    let mut groups = BTreeMap::new();
    for spec in definition.groups() {
        let members = match data.take(spec.name()) {
            Some(ActivityValue::Entities(members)) if !members.is_empty() => members,
            Some(ActivityValue::Entities(_)) | None => {
                return Err(ActivityError::MissingParticipant {
                    role: spec.name().to_string(),
                })
            }
            Some(other) => {
                return Err(ActivityError::malformed(
                    spec.name(),
                    format!("expected an entity collection, got {}", other.kind()),
                ))
            }
        };

        let snapshots = members
            .iter()
            .map(|member| snapshot(spec, member.as_ref()))
            .collect::<ActivityResult<Vec<_>>>()?;
        groups.insert(spec.name().to_string(), snapshots);
    }

    let mut options = BTreeMap::new();
    for key in definition.options() {
        match data.take(key) {
            Some(ActivityValue::Scalar(value)) => {
                options.insert(key.clone(), value);
            }
            Some(other) => {
                return Err(ActivityError::malformed(
                    key,
                    format!("expected a scalar option value, got {}", other.kind()),
                ))
            }
            None => return Err(ActivityError::MissingOption { key: key.clone() }),
        }
    }

    if !data.is_empty() {
        return Err(ActivityError::UnexpectedArguments {
            keys: data.into_keys(),
        });
    }

    Ok(Activity::new(
        definition.name().to_string(),
        roles,
        groups,
        options,
        receivers,
    ))
}

/// Check a participant's type against its slot and snapshot its cache fields
pub fn snapshot(spec: &ParticipantSpec, entity: &dyn Entity) -> ActivityResult<ParticipantSnapshot> {
    let actual = entity.type_name();
    let type_spec = spec
        .type_spec(actual)
        .ok_or_else(|| ActivityError::InvalidParticipant {
            role: spec.name().to_string(),
            actual: actual.to_string(),
            expected: spec.allowed_types(),
        })?;

    let cache = cached_fields(spec.name(), type_spec, entity)?;
    Ok(ParticipantSnapshot::new(entity.entity_ref(), cache))
}

/// Read every field `type_spec` caches from `entity`
///
/// A field the entity lacks, or a non-finite float, is an `InvalidField`.
pub fn cached_fields(
    slot: &str,
    type_spec: &TypeSpec,
    entity: &dyn Entity,
) -> ActivityResult<CachedFields> {
    type_spec
        .cache()
        .iter()
        .map(|field| {
            entity
                .field(field)
                .filter(FieldValue::is_storable)
                .map(|value| (field.clone(), value))
                .ok_or_else(|| ActivityError::InvalidField {
                    role: slot.to_string(),
                    entity_type: type_spec.entity_type().to_string(),
                    field: field.clone(),
                })
        })
        .collect()
}

// Receivers are a single entity or a non-empty collection of any types.
fn normalize_receivers(value: ActivityValue) -> ActivityResult<Vec<EntityRef>> {
    let receivers: Vec<Arc<dyn Entity>> = match value {
        ActivityValue::Entity(entity) => vec![entity],
        ActivityValue::Entities(entities) if !entities.is_empty() => entities,
        ActivityValue::Entities(_) => {
            return Err(ActivityError::malformed(
                RECEIVERS_KEY,
                "receiver collection is empty",
            ))
        }
        ActivityValue::Scalar(_) => {
            return Err(ActivityError::malformed(
                RECEIVERS_KEY,
                "expected an entity or an entity collection, got a scalar",
            ))
        }
    };

    Ok(receivers.iter().map(|r| r.entity_ref()).collect())
}
