//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::schema::NodeKind;

/// Domain errors represent builder usage violations.
/// They indicate a caller construction bug and are raised at the offending call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("scope '{scope}' is not defined for {kind}")]
    InvalidScope { scope: String, kind: NodeKind },

    #[error("scope '{name}' already attached to its parent")]
    DuplicateScope { name: String },

    #[error("'{name}' is already a {existing} of the current scope")]
    FieldConflict { name: String, existing: &'static str },

    #[error("deprecated field '{field}' has no canonical location")]
    UnknownAlias { field: String },

    #[error("no open scope to close")]
    NoOpenScope,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

/// Error decoding an entity from response fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_is_std_error_with_message() {
        let err: Box<dyn std::error::Error> = Box::new(DecodeError {
            message: "missing field 'token'".into(),
        });
        assert_eq!(err.to_string(), "missing field 'token'");
        assert!(err.source().is_none());
    }

    #[test]
    fn test_field_conflict_names_existing_kind() {
        let err = DomainError::FieldConflict {
            name: "individual".into(),
            existing: "child scope",
        };
        assert_eq!(
            err.to_string(),
            "'individual' is already a child scope of the current scope"
        );
    }
}
