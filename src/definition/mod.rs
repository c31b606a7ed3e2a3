// Copyright (c) 2025 - Cowboy AI, Inc.
//! Activity Definitions
//!
//! A [`Definition`] is the immutable schema for one verb. It declares which
//! participant roles and groups an activity requires, which entity types may
//! fill each of them, which fields to snapshot per type, and which options
//! must accompany the activity.
//!
//! # Lifecycle
//!
//! ```text
//! DefinitionDsl ──build()──> Definition ──register()──> DefinitionRegistry
//!   (mutable)                 (frozen)                  (write-once, read-many)
//! ```
//!
//! Declaring a role, group or option means requiring it. A verb that does not
//! need a participant leaves it out of its definition entirely.
//!
//! Roles, groups and options are declared in separate namespaces but are
//! supplied through one input map, so a definition may not reuse a name
//! across them.

pub mod dsl;
pub mod registry;

use serde::Serialize;

pub use dsl::DefinitionDsl;
pub use registry::DefinitionRegistry;

/// Input key reserved for the receiver list
pub const RECEIVERS_KEY: &str = "receivers";

/// One legal entity type for a role or group, with the fields to snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeSpec {
    entity_type: String,
    cache: Vec<String>,
}

impl TypeSpec {
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Field names to snapshot, in declaration order
    pub fn cache(&self) -> &[String] {
        &self.cache
    }
}

/// Declaration of a participant slot
///
/// The same shape serves single-valued roles and multi-valued groups; the
/// [`Definition`] keeps them in separate lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantSpec {
    name: String,
    types: Vec<TypeSpec>,
}

/// Single-entity participant declaration
pub type RoleSpec = ParticipantSpec;

/// Entity-collection participant declaration
pub type GroupSpec = ParticipantSpec;

impl ParticipantSpec {
    fn new(name: String) -> Self {
        Self {
            name,
            types: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Legal types in declaration order
    pub fn types(&self) -> &[TypeSpec] {
        &self.types
    }

    /// Legal type names in declaration order
    pub fn allowed_types(&self) -> Vec<String> {
        self.types.iter().map(|t| t.entity_type.clone()).collect()
    }

    /// Look up the declaration for a concrete entity type
    pub fn type_spec(&self, entity_type: &str) -> Option<&TypeSpec> {
        self.types.iter().find(|t| t.entity_type == entity_type)
    }

    pub fn accepts(&self, entity_type: &str) -> bool {
        self.type_spec(entity_type).is_some()
    }

    // Re-declaring a type replaces its cache list; a new type is appended.
    fn declare(&mut self, entity_type: String, cache: Vec<String>) {
        match self.types.iter_mut().find(|t| t.entity_type == entity_type) {
            Some(existing) => existing.cache = cache,
            None => self.types.push(TypeSpec { entity_type, cache }),
        }
    }
}

/// Immutable schema for one verb
///
/// Only [`DefinitionDsl::build`] creates definitions, so every definition in a
/// registry has passed declaration checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Definition {
    name: String,
    roles: Vec<RoleSpec>,
    groups: Vec<GroupSpec>,
    options: Vec<String>,
}

impl Definition {
    /// The verb this definition describes
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Role declarations in declaration order
    pub fn roles(&self) -> &[RoleSpec] {
        &self.roles
    }

    /// Group declarations in declaration order
    pub fn groups(&self) -> &[GroupSpec] {
        &self.groups
    }

    /// Required option keys in declaration order
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn role(&self, name: &str) -> Option<&RoleSpec> {
        self.roles.iter().find(|r| r.name == name)
    }

    pub fn group(&self, name: &str) -> Option<&GroupSpec> {
        self.groups.iter().find(|g| g.name == name)
    }

    pub fn has_option(&self, key: &str) -> bool {
        self.options.iter().any(|o| o == key)
    }

    /// Every input key the definition consumes, excluding receivers
    pub fn declared_keys(&self) -> Vec<&str> {
        self.roles
            .iter()
            .map(|r| r.name.as_str())
            .chain(self.groups.iter().map(|g| g.name.as_str()))
            .chain(self.options.iter().map(String::as_str))
            .collect()
    }
}
