// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-Memory Activity Store
//!
//! Keeps activities as their persisted JSON documents, so everything stored
//! here has been through the same serialization a real backend would apply.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::errors::{ActivityError, ActivityResult};
use crate::event_store::ActivityStore;
use crate::events::Activity;

/// Activity store backed by a map of JSON documents
#[derive(Debug, Default)]
pub struct InMemoryActivityStore {
    documents: RwLock<HashMap<Uuid, serde_json::Value>>,
}

impl InMemoryActivityStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }

    /// Raw persisted document for an activity
    pub async fn document(&self, event_id: Uuid) -> Option<serde_json::Value> {
        self.documents.read().await.get(&event_id).cloned()
    }
}

#[async_trait]
impl ActivityStore for InMemoryActivityStore {
    async fn append(&self, activity: &Activity) -> ActivityResult<()> {
        let document = activity.to_json()?;
        let mut documents = self.documents.write().await;

        if documents.contains_key(&activity.event_id()) {
            return Err(ActivityError::Storage(format!(
                "activity {} already stored",
                activity.event_id()
            )));
        }

        documents.insert(activity.event_id(), document);
        debug!(event_id = %activity.event_id(), verb = %activity.verb(), "Stored activity");
        Ok(())
    }

    async fn load(&self, event_id: Uuid) -> ActivityResult<Option<Activity>> {
        let documents = self.documents.read().await;
        documents
            .get(&event_id)
            .map(|document| serde_json::from_value(document.clone()).map_err(ActivityError::from))
            .transpose()
    }

    async fn replace(&self, activity: &Activity) -> ActivityResult<()> {
        let document = activity.to_json()?;
        let mut documents = self.documents.write().await;

        match documents.get_mut(&activity.event_id()) {
            Some(existing) => {
                *existing = document;
                debug!(event_id = %activity.event_id(), "Replaced stored activity");
                Ok(())
            }
            None => Err(ActivityError::Storage(format!(
                "activity {} not found",
                activity.event_id()
            ))),
        }
    }
}
