//! Domain error model.

use thiserror::Error;

use crate::id::RecordId;

/// Result type used across the record layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Store operations only ever raise `NotFound`. The remaining variants belong
/// to the edges: parsing ids, loading seed data, validating drafts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No record with this id exists in the store.
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: RecordId },

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// Seed data contained the same id twice.
    #[error("duplicate {kind} id in seed data: {id}")]
    DuplicateId { kind: &'static str, id: RecordId },

    /// A draft failed validation (e.g. a required field is blank).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn not_found(kind: &'static str, id: RecordId) -> Self {
        Self::NotFound { kind, id }
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = DomainError::not_found("job", RecordId::new(99));
        assert_eq!(err.to_string(), "job not found: 99");
        assert!(err.is_not_found());
    }

    #[test]
    fn validation_is_not_a_lookup_failure() {
        let err = DomainError::validation("title cannot be empty");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "validation failed: title cannot be empty");
    }
}
