// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for activity-stream
//!
//! Deterministic entities and definitions shared by the integration tests.
//! Fixtures are the only place that declares verbs; tests pick the ones they
//! need from [`registry`].

#![allow(dead_code)]

use std::sync::Arc;

use activity_stream::definition::{DefinitionDsl, DefinitionRegistry};
use activity_stream::domain::{Entity, EntityRecord};
use activity_stream::events::ActivityData;

pub const NEW_ENQUIRY: &str = "new_enquiry";
pub const NEW_ENQUIRY_WITHOUT_CACHE: &str = "new_enquiry_without_cache";
pub const NEW_COMMENT: &str = "new_comment";
pub const SHARE_PHOTOS: &str = "share_photos";

pub fn user() -> Arc<dyn Entity> {
    Arc::new(EntityRecord::new("user", "u1").with_field("full_name", "Christos"))
}

pub fn receiver(n: usize) -> Arc<dyn Entity> {
    Arc::new(
        EntityRecord::new("user", format!("r{}", n))
            .with_field("full_name", format!("Receiver {}", n)),
    )
}

pub fn company() -> Arc<dyn Entity> {
    Arc::new(EntityRecord::new("company", "c1").with_field("name", "Acme"))
}

pub fn enquiry() -> Arc<dyn Entity> {
    Arc::new(EntityRecord::new("enquiry", "e1").with_field("comment", "Interested"))
}

pub fn listing() -> Arc<dyn Entity> {
    Arc::new(EntityRecord::new("listing", "l1").with_field("title", "Flat"))
}

pub fn photo(n: usize) -> Arc<dyn Entity> {
    Arc::new(
        EntityRecord::new("photo", format!("p{}", n))
            .with_field("caption", format!("Photo {}", n))
            .with_field("width", 640i64),
    )
}

pub fn video(n: usize) -> Arc<dyn Entity> {
    Arc::new(EntityRecord::new("video", format!("v{}", n)))
}

/// `new_enquiry` with every cached field
pub fn new_enquiry() -> DefinitionDsl {
    DefinitionDsl::new(NEW_ENQUIRY)
        .actor("user", &["full_name"])
        .act_object("enquiry", &["comment"])
        .act_target("listing", &["title"])
}

/// `new_enquiry` declared with plain `object` / `target` role names
pub fn plain_new_enquiry() -> DefinitionDsl {
    DefinitionDsl::new(NEW_ENQUIRY)
        .role("actor", "user", &["full_name"])
        .role("object", "enquiry", &["comment"])
        .role("target", "listing", &["title"])
}

pub fn new_enquiry_without_cache() -> DefinitionDsl {
    DefinitionDsl::new(NEW_ENQUIRY_WITHOUT_CACHE)
        .actor("user", &[])
        .act_object("enquiry", &[])
        .act_target("listing", &[])
}

/// `new_comment` accepts users and companies as actors
pub fn new_comment() -> DefinitionDsl {
    DefinitionDsl::new(NEW_COMMENT)
        .actor("user", &["full_name"])
        .actor("company", &["name"])
        .act_object("listing", &[])
}

/// `share_photos` exercises groups and options
pub fn share_photos() -> DefinitionDsl {
    DefinitionDsl::new(SHARE_PHOTOS)
        .actor("user", &["full_name"])
        .act_object_group("photo", &["caption"])
        .act_object_group("video", &[])
        .option("visibility")
}

pub fn registry() -> Arc<DefinitionRegistry> {
    let registry = Arc::new(DefinitionRegistry::new());
    for dsl in [
        new_enquiry(),
        new_enquiry_without_cache(),
        new_comment(),
        share_photos(),
    ] {
        registry.define(dsl).expect("fixture definitions are valid");
    }
    registry
}

/// Exact input for `new_enquiry`
pub fn enquiry_input() -> ActivityData {
    ActivityData::new()
        .entity("actor", user())
        .entity("act_object", enquiry())
        .entity("act_target", listing())
}

/// Exact input for `share_photos`
pub fn share_input() -> ActivityData {
    ActivityData::new()
        .entity("actor", user())
        .entities("act_object_group", vec![photo(1), video(1), photo(2)])
        .option("visibility", "friends")
}
