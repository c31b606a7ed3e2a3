// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Construction Engine
//!
//! Entry point for turning a verb plus raw input into a validated
//! [`Activity`], and for re-snapshotting cached fields later.
//!
//! # Architecture
//!
//! ```text
//! construct(verb, data)
//!     ↓
//! DefinitionRegistry::find(verb)
//!     ↓
//! construct::build_activity (pure)
//!     ↓
//! Activity
//!
//! refresh(activity, resolver)
//!     ↓
//! EntityResolver::resolve (all participants, concurrently)
//!     ↓
//! re-read the definition's cache list (null for vanished fields)
//!     ↓
//! Activity (same identity, new snapshots)
//! ```

pub mod construct;

use futures::future::try_join_all;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::config::{EngineConfig, RefreshPolicy};
use crate::definition::{Definition, DefinitionRegistry, ParticipantSpec};
use crate::domain::{CachedFields, Entity, FieldValue};
use crate::errors::{ActivityError, ActivityResult};
use crate::events::{Activity, ActivityData, ParticipantSnapshot};
use crate::resolver::EntityResolver;

pub use construct::build_activity;

/// Validates input against registered definitions and builds activities
///
/// Cheap to clone; clones share the registry.
#[derive(Debug, Clone)]
pub struct ActivityEngine {
    registry: Arc<DefinitionRegistry>,
    config: EngineConfig,
}

impl ActivityEngine {
    pub fn new(registry: Arc<DefinitionRegistry>) -> Self {
        Self::with_config(registry, EngineConfig::default())
    }

    pub fn with_config(registry: Arc<DefinitionRegistry>, config: EngineConfig) -> Self {
        Self { registry, config }
    }

    pub fn registry(&self) -> &DefinitionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validate `data` against the definition registered for `verb`
    ///
    /// # Errors
    ///
    /// - `UnknownActivity` if `verb` has no definition
    /// - `MissingParticipant`, `InvalidParticipant`, `InvalidField`,
    ///   `MissingOption`, `MalformedArgument` or `UnexpectedArguments` for the
    ///   first mismatch between `data` and the definition
    #[instrument(skip(self, data), fields(keys = data.len()))]
    pub fn construct(&self, verb: &str, data: ActivityData) -> ActivityResult<Activity> {
        let definition = self.registry.find(verb)?;
        let activity = build_activity(&definition, data)?;

        debug!(
            event_id = %activity.event_id(),
            roles = activity.roles().len(),
            groups = activity.groups().len(),
            receivers = activity.receivers().len(),
            "Constructed activity"
        );

        Ok(activity)
    }

    /// Re-snapshot every participant's cached fields from live state
    ///
    /// Participant types are not re-validated and the activity's identity is
    /// unchanged. If the verb's definition still declares a participant's
    /// type, its current cache list is used; otherwise the fields already in
    /// the snapshot are re-read. A cached field the entity no longer exposes
    /// is recorded as null; one that turns into a non-finite float fails with
    /// `InvalidField`.
    ///
    /// # Errors
    ///
    /// `DanglingReference` when a participant no longer resolves and the
    /// engine's [`RefreshPolicy`] is `Propagate`. Resolver failures are always
    /// returned.
    #[instrument(skip(self, activity, resolver), fields(verb = %activity.verb(), event_id = %activity.event_id()))]
    pub async fn refresh(
        &self,
        activity: &Activity,
        resolver: &dyn EntityResolver,
    ) -> ActivityResult<Activity> {
        let definition = self.registry.find(activity.verb()).ok();
        let mut refreshed = activity.clone();

        let resolved_roles = try_join_all(
            activity
                .roles()
                .values()
                .map(|snapshot| resolver.resolve(snapshot.entity())),
        )
        .await?;

        for ((name, snapshot), live) in refreshed.roles.iter_mut().zip(resolved_roles) {
            let spec = definition.as_deref().and_then(|d| d.role(name));
            self.resnapshot(name, spec, snapshot, live)?;
        }

        for (name, members) in refreshed.groups.iter_mut() {
            let resolved_members =
                try_join_all(members.iter().map(|member| resolver.resolve(member.entity()))).await?;

            let spec = definition.as_deref().and_then(|d| d.group(name));
            for (member, live) in members.iter_mut().zip(resolved_members) {
                self.resnapshot(name, spec, member, live)?;
            }
        }

        debug!("Refreshed activity snapshots");
        Ok(refreshed)
    }

    /// Resolve the live entity behind a role
    ///
    /// Returns `Ok(None)` when the activity has no such role.
    pub async fn load_instance(
        &self,
        activity: &Activity,
        role: &str,
        resolver: &dyn EntityResolver,
    ) -> ActivityResult<Option<Arc<dyn Entity>>> {
        let Some(snapshot) = activity.role(role) else {
            return Ok(None);
        };

        resolve_required(resolver, snapshot).await.map(Some)
    }

    /// Resolve the live entities behind a group, in stored order
    ///
    /// Returns an empty list when the activity has no such group.
    pub async fn load_group(
        &self,
        activity: &Activity,
        group: &str,
        resolver: &dyn EntityResolver,
    ) -> ActivityResult<Vec<Arc<dyn Entity>>> {
        let members = activity.group(group).unwrap_or_default();
        try_join_all(members.iter().map(|member| resolve_required(resolver, member))).await
    }

    /// Look up the definition an activity was built from
    pub fn definition_for(&self, activity: &Activity) -> ActivityResult<Arc<Definition>> {
        self.registry.find(activity.verb())
    }

    fn resnapshot(
        &self,
        slot: &str,
        spec: Option<&ParticipantSpec>,
        snapshot: &mut ParticipantSnapshot,
        live: Option<Arc<dyn Entity>>,
    ) -> ActivityResult<()> {
        let Some(entity) = live else {
            return match self.config.refresh_policy {
                RefreshPolicy::Propagate => Err(ActivityError::DanglingReference {
                    entity: snapshot.entity.clone(),
                }),
                RefreshPolicy::KeepStale => {
                    warn!(entity = %snapshot.entity, "Keeping stale snapshot for dangling reference");
                    Ok(())
                }
            };
        };

        let fields: Vec<String> = spec
            .and_then(|spec| spec.type_spec(snapshot.entity.entity_type()))
            .map(|type_spec| type_spec.cache().to_vec())
            .unwrap_or_else(|| snapshot.cache.keys().cloned().collect());

        snapshot.cache = fields
            .into_iter()
            .map(|field| match entity.field(&field) {
                Some(value) if !value.is_storable() => Err(ActivityError::InvalidField {
                    role: slot.to_string(),
                    entity_type: snapshot.entity.entity_type().to_string(),
                    field,
                }),
                value => Ok((field, value.unwrap_or(FieldValue::Null))),
            })
            .collect::<ActivityResult<CachedFields>>()?;

        Ok(())
    }
}

async fn resolve_required(
    resolver: &dyn EntityResolver,
    snapshot: &ParticipantSnapshot,
) -> ActivityResult<Arc<dyn Entity>> {
    resolver
        .resolve(snapshot.entity())
        .await?
        .ok_or_else(|| ActivityError::DanglingReference {
            entity: snapshot.entity().clone(),
        })
}
