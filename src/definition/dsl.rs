// Copyright (c) 2025 - Cowboy AI, Inc.
//! Definition Builder
//!
//! Fluent builder that accumulates role, group and option declarations for one
//! verb and freezes them into a [`Definition`].
//!
//! # Example
//!
//! ```rust
//! use activity_stream::definition::DefinitionDsl;
//!
//! let definition = DefinitionDsl::new("new_enquiry")
//!     .actor("user", &["full_name"])
//!     .act_object("enquiry", &["comment"])
//!     .act_target("listing", &["title"])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(definition.name(), "new_enquiry");
//! assert_eq!(definition.roles().len(), 3);
//! ```

use std::collections::HashSet;

use super::{Definition, ParticipantSpec, RECEIVERS_KEY};
use crate::errors::{ActivityError, ActivityResult};

/// Builder for [`Definition`]
///
/// Calling [`role`](Self::role) again for the same role with another entity
/// type makes the role polymorphic. Calling it again with the same type
/// replaces that type's cache list.
#[derive(Debug, Clone)]
pub struct DefinitionDsl {
    definition: Definition,
}

impl DefinitionDsl {
    /// Start an empty declaration for a verb
    pub fn new(verb: impl Into<String>) -> Self {
        Self {
            definition: Definition {
                name: verb.into(),
                roles: Vec::new(),
                groups: Vec::new(),
                options: Vec::new(),
            },
        }
    }

    /// The verb being declared
    pub fn name(&self) -> &str {
        &self.definition.name
    }

    /// Allow `entity_type` to fill `role`, snapshotting the `cache` fields
    pub fn role(mut self, role: &str, entity_type: &str, cache: &[&str]) -> Self {
        declare(&mut self.definition.roles, role, entity_type, cache);
        self
    }

    /// Allow `entity_type` as a member of `group`, snapshotting the `cache` fields
    pub fn group(mut self, group: &str, entity_type: &str, cache: &[&str]) -> Self {
        declare(&mut self.definition.groups, group, entity_type, cache);
        self
    }

    /// Require an option key at publish time
    pub fn option(mut self, key: &str) -> Self {
        if !self.definition.options.iter().any(|o| o == key) {
            self.definition.options.push(key.to_string());
        }
        self
    }

    pub fn actor(self, entity_type: &str, cache: &[&str]) -> Self {
        self.role("actor", entity_type, cache)
    }

    pub fn act_object(self, entity_type: &str, cache: &[&str]) -> Self {
        self.role("act_object", entity_type, cache)
    }

    pub fn act_target(self, entity_type: &str, cache: &[&str]) -> Self {
        self.role("act_target", entity_type, cache)
    }

    pub fn act_object_group(self, entity_type: &str, cache: &[&str]) -> Self {
        self.group("act_object_group", entity_type, cache)
    }

    pub fn act_target_group(self, entity_type: &str, cache: &[&str]) -> Self {
        self.group("act_target_group", entity_type, cache)
    }

    /// Freeze the declaration
    ///
    /// # Errors
    ///
    /// `ConflictingDeclaration` when a name appears in more than one of the
    /// role, group and option namespaces, or when a declaration uses the
    /// reserved `receivers` key.
    pub fn build(self) -> ActivityResult<Definition> {
        let definition = self.definition;
        let mut seen = HashSet::new();

        for key in definition.declared_keys() {
            if key == RECEIVERS_KEY || !seen.insert(key) {
                return Err(ActivityError::ConflictingDeclaration {
                    verb: definition.name.clone(),
                    name: key.to_string(),
                });
            }
        }

        Ok(definition)
    }
}

fn declare(specs: &mut Vec<ParticipantSpec>, name: &str, entity_type: &str, cache: &[&str]) {
    let cache = cache.iter().map(|field| field.to_string()).collect();

    match specs.iter_mut().find(|spec| spec.name == name) {
        Some(spec) => spec.declare(entity_type.to_string(), cache),
        None => {
            let mut spec = ParticipantSpec::new(name.to_string());
            spec.declare(entity_type.to_string(), cache);
            specs.push(spec);
        }
    }
}
