//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Keep this focused on deterministic, business/domain failures (validation,
/// uniqueness, lookups, stock arithmetic). Presentation concerns belong to
/// the caller.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    /// A field failed validation at construction time.
    #[error("invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// An item number is already in use (compared case-insensitively).
    #[error("item number '{0}' is already in use")]
    DuplicateIdentifier(String),

    /// No stored item matched the lookup.
    #[error("item '{0}' doesn't exist")]
    NotFound(String),

    /// A stock change would drive the count below zero (or overflow it).
    #[error("cannot change stock of '{item_number}' by {delta}: only {current} in storage")]
    InvalidQuantity {
        item_number: String,
        current: i64,
        delta: i64,
    },
}

impl DomainError {
    pub fn validation(field: &'static str, msg: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: msg.into(),
        }
    }

    pub fn duplicate(item_number: impl Into<String>) -> Self {
        Self::DuplicateIdentifier(item_number.into())
    }

    pub fn not_found(item_number: impl Into<String>) -> Self {
        Self::NotFound(item_number.into())
    }

    pub fn invalid_quantity(item_number: impl Into<String>, current: i64, delta: i64) -> Self {
        Self::InvalidQuantity {
            item_number: item_number.into(),
            current,
            delta,
        }
    }

    /// Name of the offending field for validation failures.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_names_the_field() {
        let err = DomainError::validation("weight", "can't be 0 or a negative number");
        assert_eq!(err.field(), Some("weight"));
        assert_eq!(
            err.to_string(),
            "invalid weight: can't be 0 or a negative number"
        );
    }

    #[test]
    fn non_validation_errors_have_no_field() {
        assert_eq!(DomainError::not_found("477B").field(), None);
        assert_eq!(DomainError::duplicate("477B").field(), None);
    }

    #[test]
    fn invalid_quantity_message_includes_counts() {
        let err = DomainError::invalid_quantity("477B", 102, -200);
        assert_eq!(
            err.to_string(),
            "cannot change stock of '477B' by -200: only 102 in storage"
        );
    }
}
