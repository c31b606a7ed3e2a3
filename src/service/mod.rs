// Copyright (c) 2025 - Cowboy AI, Inc.
//! Service Layer for Activity Publishing
//!
//! This module provides the application service layer that ties the
//! construction engine to the storage and entity-resolution collaborators.
//!
//! # Architecture
//!
//! ```text
//! Caller (publish / refresh_data)
//!     ↓
//! Service Layer (this module)
//!     ↓
//! ActivityEngine → Activity
//!     ↓
//! ActivityStore (append / replace)
//! ```
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use activity_stream::definition::{DefinitionDsl, DefinitionRegistry};
//! use activity_stream::domain::EntityRecord;
//! use activity_stream::engine::ActivityEngine;
//! use activity_stream::event_store::InMemoryActivityStore;
//! use activity_stream::events::ActivityData;
//! use activity_stream::resolver::InMemoryEntityResolver;
//! use activity_stream::service::{ActivityService, StoredActivityService};
//!
//! # tokio_test::block_on(async {
//! let registry = Arc::new(DefinitionRegistry::new());
//! registry
//!     .define(DefinitionDsl::new("new_comment").actor("user", &["full_name"]))
//!     .unwrap();
//!
//! let service = StoredActivityService::new(
//!     ActivityEngine::new(registry),
//!     Arc::new(InMemoryActivityStore::new()),
//!     Arc::new(InMemoryEntityResolver::new()),
//! );
//!
//! let user = Arc::new(EntityRecord::new("user", "u1").with_field("full_name", "Christos"));
//! let activity = service
//!     .publish("new_comment", ActivityData::new().entity("actor", user))
//!     .await
//!     .unwrap();
//! assert_eq!(activity.verb(), "new_comment");
//! # });
//! ```

pub mod activity;

pub use activity::{ActivityService, ServiceError, ServiceResult, StoredActivityService};
