//! Error types for activity definition and construction

use thiserror::Error;

use crate::domain::EntityRef;

/// Errors that can occur while defining, constructing, refreshing or
/// persisting activities
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ActivityError {
    /// No definition is registered under the verb
    #[error("Could not find a definition for `{verb}`")]
    UnknownActivity { verb: String },

    /// A definition with the same verb is already registered
    #[error("A definition for `{verb}` is already registered")]
    DuplicateDefinition { verb: String },

    /// A name is declared twice within one definition, or uses a reserved key
    #[error("Definition `{verb}` declares `{name}` more than once or uses a reserved key")]
    ConflictingDeclaration { verb: String, name: String },

    /// A declared role or group was not supplied
    #[error("Missing participant for `{role}`")]
    MissingParticipant { role: String },

    /// A participant's entity type is not legal for its role or group
    #[error("Invalid participant for `{role}`: got `{actual}`, expected one of {expected:?}")]
    InvalidParticipant {
        role: String,
        actual: String,
        expected: Vec<String>,
    },

    /// A participant does not expose a field its definition caches
    #[error("Participant `{role}` of type `{entity_type}` has no field `{field}`")]
    InvalidField {
        role: String,
        entity_type: String,
        field: String,
    },

    /// A declared option was not supplied
    #[error("Missing option `{key}`")]
    MissingOption { key: String },

    /// The input carried keys the definition does not declare
    #[error("Unexpected arguments: {keys:?}")]
    UnexpectedArguments { keys: Vec<String> },

    /// A declared key was supplied with the wrong shape of value
    #[error("Malformed argument `{key}`: {reason}")]
    MalformedArgument { key: String, reason: String },

    /// A stored reference no longer resolves to a live entity
    #[error("Dangling reference to {entity}")]
    DanglingReference { entity: EntityRef },

    /// Entity resolver failure
    #[error("Resolver error: {0}")]
    Resolver(String),

    /// Storage collaborator failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ActivityError {
    /// Whether the error comes from a schema mismatch in the caller's input
    ///
    /// Validation errors are never retried; they indicate a programming error
    /// rather than a transient condition.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ActivityError::MissingParticipant { .. }
                | ActivityError::InvalidParticipant { .. }
                | ActivityError::InvalidField { .. }
                | ActivityError::MissingOption { .. }
                | ActivityError::UnexpectedArguments { .. }
                | ActivityError::MalformedArgument { .. }
        )
    }

    pub(crate) fn malformed(key: &str, reason: impl Into<String>) -> Self {
        ActivityError::MalformedArgument {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type for activity operations
pub type ActivityResult<T> = Result<T, ActivityError>;

impl From<serde_json::Error> for ActivityError {
    fn from(err: serde_json::Error) -> Self {
        ActivityError::Serialization(err.to_string())
    }
}
