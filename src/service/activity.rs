// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Service Layer
//!
//! Coordinates construction, persistence and refresh of activities.
//!
//! # Transaction Semantics
//!
//! `publish`:
//! 1. Construct and validate the activity (pure)
//! 2. Append it to the store
//!
//! `refresh_data`:
//! 1. Load the stored activity
//! 2. Re-resolve every participant and re-snapshot cached fields
//! 3. Replace the stored activity
//!
//! If any step fails, nothing is written.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::domain::Entity;
use crate::engine::ActivityEngine;
use crate::errors::ActivityError;
use crate::event_store::ActivityStore;
use crate::events::{Activity, ActivityData};
use crate::resolver::EntityResolver;

/// Service layer result type
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service layer errors
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Definition, validation, resolver or storage failure
    #[error("Activity error: {0}")]
    Activity(#[from] ActivityError),

    /// No activity stored under the id
    #[error("Activity not found: {0}")]
    NotFound(Uuid),
}

/// Activity service trait
#[async_trait]
pub trait ActivityService: Send + Sync {
    /// Construct an activity for `verb` and persist it
    async fn publish(&self, verb: &str, data: ActivityData) -> ServiceResult<Activity>;

    /// Re-snapshot a stored activity's cached fields and persist the result
    async fn refresh_data(&self, event_id: Uuid) -> ServiceResult<Activity>;

    /// Load a stored activity
    async fn get_activity(&self, event_id: Uuid) -> ServiceResult<Activity>;

    /// Resolve the live entity behind a stored activity's role
    async fn load_instance(
        &self,
        event_id: Uuid,
        role: &str,
    ) -> ServiceResult<Option<Arc<dyn Entity>>>;
}

/// [`ActivityService`] over a store and an entity resolver
pub struct StoredActivityService {
    engine: ActivityEngine,
    store: Arc<dyn ActivityStore>,
    resolver: Arc<dyn EntityResolver>,
}

impl StoredActivityService {
    pub fn new(
        engine: ActivityEngine,
        store: Arc<dyn ActivityStore>,
        resolver: Arc<dyn EntityResolver>,
    ) -> Self {
        Self {
            engine,
            store,
            resolver,
        }
    }

    pub fn engine(&self) -> &ActivityEngine {
        &self.engine
    }
}

#[async_trait]
impl ActivityService for StoredActivityService {
    #[instrument(skip(self, data))]
    async fn publish(&self, verb: &str, data: ActivityData) -> ServiceResult<Activity> {
        let activity = self.engine.construct(verb, data)?;
        self.store.append(&activity).await?;

        debug!(event_id = %activity.event_id(), "Published activity");
        Ok(activity)
    }

    #[instrument(skip(self))]
    async fn refresh_data(&self, event_id: Uuid) -> ServiceResult<Activity> {
        let activity = self.get_activity(event_id).await?;
        let refreshed = self
            .engine
            .refresh(&activity, self.resolver.as_ref())
            .await?;
        self.store.replace(&refreshed).await?;

        Ok(refreshed)
    }

    async fn get_activity(&self, event_id: Uuid) -> ServiceResult<Activity> {
        self.store
            .load(event_id)
            .await?
            .ok_or(ServiceError::NotFound(event_id))
    }

    async fn load_instance(
        &self,
        event_id: Uuid,
        role: &str,
    ) -> ServiceResult<Option<Arc<dyn Entity>>> {
        let activity = self.get_activity(event_id).await?;
        Ok(self
            .engine
            .load_instance(&activity, role, self.resolver.as_ref())
            .await?)
    }
}
