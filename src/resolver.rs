// Copyright (c) 2025 - Cowboy AI, Inc.
//! Entity Resolution
//!
//! Stored activities only carry [`EntityRef`]s. Refreshing cached fields, or
//! loading a participant back as a live object, goes through an
//! [`EntityResolver`] supplied by the host application.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::{Entity, EntityRef};
use crate::errors::ActivityResult;

/// Resolves references back to live entities
///
/// Implementations return `Ok(None)` when the entity no longer exists and
/// reserve `Err` for failures of the lookup itself.
#[async_trait]
pub trait EntityResolver: Send + Sync {
    async fn resolve(&self, entity: &EntityRef) -> ActivityResult<Option<Arc<dyn Entity>>>;
}

/// Resolver over an in-memory entity table
#[derive(Debug, Default)]
pub struct InMemoryEntityResolver {
    entities: RwLock<HashMap<EntityRef, Arc<dyn Entity>>>,
}

impl InMemoryEntityResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entity, keyed by its reference
    pub async fn insert(&self, entity: Arc<dyn Entity>) {
        self.entities.write().await.insert(entity.entity_ref(), entity);
    }

    pub async fn remove(&self, entity: &EntityRef) -> Option<Arc<dyn Entity>> {
        self.entities.write().await.remove(entity)
    }

    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }
}

#[async_trait]
impl EntityResolver for InMemoryEntityResolver {
    async fn resolve(&self, entity: &EntityRef) -> ActivityResult<Option<Arc<dyn Entity>>> {
        Ok(self.entities.read().await.get(entity).cloned())
    }
}
