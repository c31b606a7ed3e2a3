// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Demo
//!
//! Registers the enquiry definitions, publishes one activity through the
//! in-memory service, edits the listing, refreshes the stored activity and
//! prints the persisted document before and after.
//!
//! Run with: cargo run --bin activity-demo
//!
//! Environment:
//! - `RUST_LOG` - log filter (default: info)
//! - `ACTIVITY_REFRESH_POLICY` - `propagate` (default) or `keep_stale`

use anyhow::{Context, Result};
use activity_stream::definition::{DefinitionDsl, DefinitionRegistry};
use activity_stream::domain::{Entity, EntityRecord};
use activity_stream::event_store::InMemoryActivityStore;
use activity_stream::events::ActivityData;
use activity_stream::resolver::InMemoryEntityResolver;
use activity_stream::service::{ActivityService, StoredActivityService};
use activity_stream::{ActivityEngine, EngineConfig};
use std::sync::Arc;
use tracing::info;

fn register_definitions(registry: &DefinitionRegistry) -> Result<()> {
    registry.define(
        DefinitionDsl::new("new_enquiry")
            .actor("user", &["full_name"])
            .act_object("enquiry", &["comment"])
            .act_target("listing", &["title"]),
    )?;

    registry.define(
        DefinitionDsl::new("new_enquiry_without_cache")
            .actor("user", &[])
            .act_object("enquiry", &[])
            .act_target("listing", &[]),
    )?;

    registry.define(
        DefinitionDsl::new("new_comment")
            .actor("user", &["full_name"])
            .act_object("listing", &[]),
    )?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = EngineConfig::from_env().context("Failed to load engine configuration")?;
    info!("Refresh policy: {}", config.refresh_policy);

    let registry = Arc::new(DefinitionRegistry::new());
    register_definitions(&registry)?;
    info!("Registered verbs: {:?}", registry.verbs());

    let user: Arc<dyn Entity> =
        Arc::new(EntityRecord::new("user", "u1").with_field("full_name", "Christos"));
    let enquiry: Arc<dyn Entity> =
        Arc::new(EntityRecord::new("enquiry", "e1").with_field("comment", "I'm interested"));
    let listing: Arc<dyn Entity> =
        Arc::new(EntityRecord::new("listing", "l1").with_field("title", "A test listing"));
    let receivers: Vec<Arc<dyn Entity>> = (0..2)
        .map(|n| {
            Arc::new(
                EntityRecord::new("user", format!("r{}", n))
                    .with_field("full_name", format!("Receiver {}", n)),
            ) as Arc<dyn Entity>
        })
        .collect();

    let resolver = Arc::new(InMemoryEntityResolver::new());
    for entity in [&user, &enquiry, &listing] {
        resolver.insert(Arc::clone(entity)).await;
    }

    let store = Arc::new(InMemoryActivityStore::new());
    let service = StoredActivityService::new(
        ActivityEngine::with_config(registry, config),
        store.clone(),
        resolver.clone(),
    );

    let activity = service
        .publish(
            "new_enquiry",
            ActivityData::new()
                .entity("actor", user)
                .entity("act_object", enquiry)
                .entity("act_target", listing)
                .receivers(receivers),
        )
        .await
        .context("Failed to publish activity")?;

    let document = store
        .document(activity.event_id())
        .await
        .context("Published activity missing from store")?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    resolver
        .insert(Arc::new(
            EntityRecord::new("listing", "l1").with_field("title", "A renamed listing"),
        ))
        .await;

    let refreshed = service
        .refresh_data(activity.event_id())
        .await
        .context("Failed to refresh activity")?;
    info!(
        "Refreshed target title: {:?}",
        refreshed
            .role("act_target")
            .and_then(|target| target.field("title"))
    );

    let document = store
        .document(activity.event_id())
        .await
        .context("Refreshed activity missing from store")?;
    println!("{}", serde_json::to_string_pretty(&document)?);

    Ok(())
}
