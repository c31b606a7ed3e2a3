// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Store Abstraction
//!
//! This module defines the storage interface the engine writes finished
//! activities into. Storage is a collaborator: the engine only relies on the
//! operations below, never on an indexing strategy or durability guarantee.
//!
//! # Architecture
//!
//! ```text
//! ActivityData → ActivityEngine → Activity → ActivityStore → Persistent Storage
//!                                                 ↓
//!                                        refresh_data (replace)
//! ```
//!
//! # Example
//!
//! ```rust
//! use activity_stream::event_store::{ActivityStore, InMemoryActivityStore};
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryActivityStore::new();
//! assert!(store.is_empty().await);
//! # });
//! ```

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::ActivityResult;
use crate::events::Activity;

pub mod memory;

pub use memory::InMemoryActivityStore;

/// Storage collaborator for published activities
#[async_trait]
pub trait ActivityStore: Send + Sync {
    /// Persist a newly constructed activity
    ///
    /// # Errors
    ///
    /// `Storage` if an activity with the same `event_id` already exists or the
    /// backend fails.
    async fn append(&self, activity: &Activity) -> ActivityResult<()>;

    /// Load an activity by its event id
    async fn load(&self, event_id: Uuid) -> ActivityResult<Option<Activity>>;

    /// Overwrite a stored activity after a refresh
    ///
    /// # Errors
    ///
    /// `Storage` if no activity with the same `event_id` is stored.
    async fn replace(&self, activity: &Activity) -> ActivityResult<()>;
}
