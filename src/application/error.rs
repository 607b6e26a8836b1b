//! Application-level errors (wraps domain errors)

use thiserror::Error;

use crate::domain::{DecodeError, DomainError, ValidationErrors};

/// Application errors wrap domain errors and add gateway-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("{resource} not found")]
    NotFound { resource: String },

    /// A lookup the gateway answered with validation errors.
    #[error("{resource} lookup rejected with {} validation errors", .errors.deep_size())]
    Rejected {
        resource: String,
        errors: ValidationErrors,
    },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("cannot decode response: {0}")]
    Decode(#[from] DecodeError),

    #[error("transport failed: {context}")]
    Transport {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
