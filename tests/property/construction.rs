// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Activity Construction
//!
//! Generates definitions with random role, group and option sets, builds the
//! exact input each one declares, then checks:
//! - exact input always constructs, with snapshots matching the input
//! - dropping any declared key is reported against that key
//! - any undeclared key is reported as unexpected
//! - refreshing against unchanged entities is a fixed point

use std::sync::Arc;

use activity_stream::definition::{DefinitionDsl, DefinitionRegistry};
use activity_stream::domain::{Entity, EntityRecord, EntityRef};
use activity_stream::events::ActivityData;
use activity_stream::{ActivityEngine, ActivityError, InMemoryEntityResolver};
use proptest::prelude::*;

const VERB: &str = "generated";

const EXTRA_ROLES: &[&str] = &["act_object", "act_target", "witness"];
const GROUPS: &[&str] = &["act_object_group", "act_target_group"];
const OPTIONS: &[&str] = &["reason", "visibility", "channel"];
const ENTITY_TYPES: &[&str] = &["user", "listing", "photo"];
const CACHE_FIELDS: &[&str] = &["title", "name", "caption"];

const GROUP_SIZE: usize = 2;

// ============================================================================
// Generated Definitions
// ============================================================================

/// A participant slot: name, accepted entity type and cached fields
type Slot = (&'static str, &'static str, Vec<&'static str>);

#[derive(Debug, Clone)]
struct Shape {
    roles: Vec<Slot>,
    groups: Vec<Slot>,
    options: Vec<&'static str>,
}

impl Shape {
    fn definition(&self) -> DefinitionDsl {
        let mut dsl = DefinitionDsl::new(VERB);
        for (name, entity_type, cache) in &self.roles {
            dsl = dsl.role(name, entity_type, cache);
        }
        for (name, entity_type, cache) in &self.groups {
            dsl = dsl.group(name, entity_type, cache);
        }
        for key in &self.options {
            dsl = dsl.option(key);
        }
        dsl
    }

    fn entities(&self) -> Vec<Arc<dyn Entity>> {
        let roles = self
            .roles
            .iter()
            .map(|(name, entity_type, _)| record(entity_type, name, 0));
        let members = self.groups.iter().flat_map(|(name, entity_type, _)| {
            (0..GROUP_SIZE).map(move |n| record(entity_type, name, n))
        });
        roles.chain(members).collect()
    }

    fn input(&self) -> ActivityData {
        let mut data = ActivityData::new();
        for (name, entity_type, _) in &self.roles {
            data = data.entity(name, record(entity_type, name, 0));
        }
        for (name, entity_type, _) in &self.groups {
            let members = (0..GROUP_SIZE)
                .map(|n| record(entity_type, name, n))
                .collect();
            data = data.entities(name, members);
        }
        for key in &self.options {
            data = data.option(key, format!("{}-value", key));
        }
        data
    }

    fn declared_keys(&self) -> Vec<&'static str> {
        self.roles
            .iter()
            .chain(&self.groups)
            .map(|(name, _, _)| *name)
            .chain(self.options.iter().copied())
            .collect()
    }

    fn engine(&self) -> ActivityEngine {
        let registry = Arc::new(DefinitionRegistry::new());
        registry
            .define(self.definition())
            .expect("generated definitions are valid");
        ActivityEngine::new(registry)
    }
}

fn record(entity_type: &str, slot: &str, n: usize) -> Arc<dyn Entity> {
    Arc::new(
        EntityRecord::new(entity_type, format!("{}-{}", slot, n))
            .with_field("title", format!("Title {}", n))
            .with_field("name", format!("Name {}", n))
            .with_field("caption", format!("Caption {}", n)),
    )
}

// ============================================================================
// Property Test Strategies
// ============================================================================

fn slot(name: &'static str) -> impl Strategy<Value = Slot> {
    (
        prop::sample::select(ENTITY_TYPES),
        prop::sample::subsequence(CACHE_FIELDS, 0..=CACHE_FIELDS.len()),
    )
        .prop_map(move |(entity_type, cache)| (name, entity_type, cache))
}

/// Generate a definition shape; `actor` is always declared
fn shape() -> impl Strategy<Value = Shape> {
    (
        prop::sample::subsequence(EXTRA_ROLES, 0..=EXTRA_ROLES.len()),
        prop::sample::subsequence(GROUPS, 0..=GROUPS.len()),
        prop::sample::subsequence(OPTIONS, 0..=OPTIONS.len()),
    )
        .prop_flat_map(|(extra_roles, groups, options)| {
            let roles: Vec<_> = std::iter::once("actor")
                .chain(extra_roles)
                .map(slot)
                .collect();
            let groups: Vec<_> = groups.into_iter().map(slot).collect();
            (roles, groups, Just(options))
        })
        .prop_map(|(roles, groups, options)| Shape {
            roles,
            groups,
            options,
        })
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Exact input always constructs
    ///
    /// Every declared participant is snapshotted with the reference it was
    /// given and exactly the fields its type caches.
    #[test]
    fn prop_exact_input_constructs(shape in shape()) {
        let activity = shape.engine().construct(VERB, shape.input()).unwrap();

        for (name, entity_type, cache) in &shape.roles {
            let snapshot = activity.role(name).unwrap();
            prop_assert_eq!(
                snapshot.entity(),
                &EntityRef::new(*entity_type, format!("{}-0", name))
            );
            let cached: Vec<&str> = snapshot.cache().keys().map(String::as_str).collect();
            let mut expected = cache.clone();
            expected.sort_unstable();
            prop_assert_eq!(cached, expected);
        }

        for (name, _, _) in &shape.groups {
            prop_assert_eq!(activity.group(name).unwrap().len(), GROUP_SIZE);
        }

        for key in &shape.options {
            let expected = format!("{}-value", key);
            prop_assert_eq!(activity.option(key), Some(expected.as_str()));
        }

        prop_assert_eq!(
            activity.participants().count(),
            shape.roles.len() + shape.groups.len() * GROUP_SIZE
        );
    }

    /// Property: Every declared key is required
    ///
    /// Removing any single declared key fails, naming that key.
    #[test]
    fn prop_omitted_key_is_reported(shape in shape(), index in any::<prop::sample::Index>()) {
        let keys = shape.declared_keys();
        let omitted = keys[index.index(keys.len())];

        let mut input = shape.input();
        input.take(omitted);

        let err = shape.engine().construct(VERB, input).unwrap_err();
        let expected = if shape.options.contains(&omitted) {
            ActivityError::MissingOption { key: omitted.to_string() }
        } else {
            ActivityError::MissingParticipant { role: omitted.to_string() }
        };
        prop_assert_eq!(err, expected);
    }

    /// Property: Undeclared keys are rejected
    ///
    /// A single extra key is the only one reported.
    #[test]
    fn prop_extra_key_is_unexpected(shape in shape(), extra in "[a-z]{3,10}") {
        prop_assume!(!shape.declared_keys().contains(&extra.as_str()));
        prop_assume!(extra != "receivers");

        let mut input = shape.input();
        input.insert(&extra, "surplus");

        let err = shape.engine().construct(VERB, input).unwrap_err();
        prop_assert_eq!(err, ActivityError::UnexpectedArguments { keys: vec![extra] });
    }

    /// Property: Refresh is a fixed point for unchanged entities
    ///
    /// Refreshing twice yields the same activity, equal to the original.
    #[test]
    fn prop_refresh_is_idempotent(shape in shape()) {
        let engine = shape.engine();
        let activity = engine.construct(VERB, shape.input()).unwrap();

        let (first, second) = tokio_test::block_on(async {
            let resolver = InMemoryEntityResolver::new();
            for entity in shape.entities() {
                resolver.insert(entity).await;
            }

            let first = engine.refresh(&activity, &resolver).await.unwrap();
            let second = engine.refresh(&first, &resolver).await.unwrap();
            (first, second)
        });

        prop_assert_eq!(&first, &second);
        prop_assert_eq!(&first, &activity);
    }
}
