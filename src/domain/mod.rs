//! Domain layer: request trees, validation-error trees and entities
//!
//! This layer is independent of external concerns (no I/O, no transport, no config loading).

pub mod arena;
pub mod builder;
pub mod codes;
pub mod entities;
pub mod error;
pub mod schema;
pub mod validation;
pub mod value;

pub use arena::{ScopeArena, ScopeNode};
pub use builder::ScopedBuilder;
pub use codes::ValidationErrorCode;
pub use entities::*;
pub use error::{DecodeError, DomainError, DomainResult};
pub use schema::{applicant_alias, Alias, NodeKind, APPLICANT_ALIASES};
pub use validation::{RawValidationError, ValidationError, ValidationErrors};
pub use value::{FieldEntry, FieldTree, FieldValue};
