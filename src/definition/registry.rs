// Copyright (c) 2025 - Cowboy AI, Inc.
//! Definition Registry
//!
//! Maps verbs to their [`Definition`]s. The registry is populated while the
//! process starts and read concurrently by every construction afterwards.
//! Share it as `Arc<DefinitionRegistry>`; lookups hand out `Arc<Definition>`
//! clones so no lock is held while an activity is validated.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use super::{Definition, DefinitionDsl};
use crate::errors::{ActivityError, ActivityResult};

/// Verb to definition lookup
#[derive(Debug, Default)]
pub struct DefinitionRegistry {
    definitions: RwLock<HashMap<String, Arc<Definition>>>,
}

impl DefinitionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a definition under its verb
    ///
    /// # Errors
    ///
    /// `DuplicateDefinition` if the verb is already registered. The existing
    /// registration is left untouched.
    pub fn register(&self, definition: Definition) -> ActivityResult<Arc<Definition>> {
        // The map is only mutated by single inserts, so a poisoned guard still
        // holds a consistent map.
        let mut definitions = self
            .definitions
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        if definitions.contains_key(definition.name()) {
            return Err(ActivityError::DuplicateDefinition {
                verb: definition.name().to_string(),
            });
        }

        let verb = definition.name().to_string();
        let definition = Arc::new(definition);
        definitions.insert(verb.clone(), Arc::clone(&definition));

        info!(
            verb = %verb,
            roles = definition.roles().len(),
            groups = definition.groups().len(),
            options = definition.options().len(),
            "Registered activity definition"
        );

        Ok(definition)
    }

    /// Build a declaration and register it in one step
    pub fn define(&self, dsl: DefinitionDsl) -> ActivityResult<Arc<Definition>> {
        self.register(dsl.build()?)
    }

    /// Look up the definition for a verb
    ///
    /// # Errors
    ///
    /// `UnknownActivity` if nothing is registered under `verb`.
    pub fn find(&self, verb: &str) -> ActivityResult<Arc<Definition>> {
        self.definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(verb)
            .cloned()
            .ok_or_else(|| ActivityError::UnknownActivity {
                verb: verb.to_string(),
            })
    }

    pub fn contains(&self, verb: &str) -> bool {
        self.definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(verb)
    }

    /// Registered verbs, sorted
    pub fn verbs(&self) -> Vec<String> {
        let mut verbs: Vec<String> = self
            .definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        verbs.sort();
        verbs
    }

    pub fn len(&self) -> usize {
        self.definitions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
