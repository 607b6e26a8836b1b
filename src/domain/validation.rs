//! Validation-error tree built from a gateway's flat error list.
//!
//! Errors are indexed by the same object path used to build the request,
//! so `errors.for_object("individual").for_object("address")` mirrors
//! `request.individual().address()`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::domain::codes::ValidationErrorCode;

/// One rejected field, as delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawValidationError {
    /// Nested object names leading to the object that owns `field`
    #[serde(default)]
    pub object_path: Vec<String>,
    pub field: String,
    pub code: String,
    pub message: String,
}

impl RawValidationError {
    pub fn new<P, S>(object_path: P, field: &str, code: &str, message: &str) -> Self
    where
        P: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            object_path: object_path.into_iter().map(Into::into).collect(),
            field: field.to_string(),
            code: code.to_string(),
            message: message.to_string(),
        }
    }
}

/// Field-level validation error stored in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    field: String,
    code: ValidationErrorCode,
    message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, code: ValidationErrorCode, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            code,
            message: message.into(),
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn code(&self) -> &ValidationErrorCode {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Empty node returned for object paths without errors.
static EMPTY: ValidationErrors = ValidationErrors::empty();

/// Node of the validation-error tree: the errors of one object plus the
/// nodes of its nested objects. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors {
    errors: Vec<ValidationError>,
    nested: BTreeMap<String, ValidationErrors>,
}

impl ValidationErrors {
    /// Tree without any errors.
    pub const fn empty() -> Self {
        Self {
            errors: Vec::new(),
            nested: BTreeMap::new(),
        }
    }

    /// Build the tree in one pass.
    ///
    /// Errors sharing an object path keep their input order.
    #[instrument(level = "debug", skip(raw))]
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = RawValidationError>,
    {
        let mut root = ValidationErrors::default();
        for item in raw {
            let node = item
                .object_path
                .iter()
                .fold(&mut root, |node, name| node.nested.entry(name.clone()).or_default());
            node.errors.push(ValidationError {
                code: ValidationErrorCode::parse(&item.code),
                field: item.field,
                message: item.message,
            });
        }
        root
    }

    /// Errors of the nested object `name`; an empty node if it has none.
    pub fn for_object(&self, name: &str) -> &ValidationErrors {
        self.nested.get(name).unwrap_or(&EMPTY)
    }

    /// Errors of the `index`-th element of a nested collection.
    pub fn for_index(&self, index: usize) -> &ValidationErrors {
        self.for_object(&format!("index-{}", index))
    }

    /// Errors on `field` of this object, in input order.
    pub fn on_field(&self, field: &str) -> Vec<&ValidationError> {
        self.errors.iter().filter(|e| e.field == field).collect()
    }

    /// All errors of this object, excluding nested objects.
    pub fn all(&self) -> &[ValidationError] {
        &self.errors
    }

    /// All errors of this object and its nested objects, pre-order.
    pub fn all_deep(&self) -> Vec<&ValidationError> {
        let mut result: Vec<&ValidationError> = self.errors.iter().collect();
        for child in self.nested.values() {
            result.extend(child.all_deep());
        }
        result
    }

    /// Number of errors on this object.
    pub fn size(&self) -> usize {
        self.errors.len()
    }

    /// Number of errors on this object and all nested objects.
    pub fn deep_size(&self) -> usize {
        self.errors.len() + self.nested.values().map(ValidationErrors::deep_size).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.deep_size() == 0
    }

    /// Names of nested objects that carry errors.
    pub fn object_names(&self) -> impl Iterator<Item = &str> {
        self.nested.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_object_on_missing_name_is_empty_and_chainable() {
        let errors = ValidationErrors::from_raw(vec![RawValidationError::new(
            ["individual"],
            "first-name",
            "IS_REQUIRED",
            "First name is required",
        )]);

        let missing = errors.for_object("funding").for_object("address");
        assert!(missing.is_empty());
        assert!(missing.on_field("region").is_empty());
        assert_eq!(missing.deep_size(), 0);
    }

    #[test]
    fn test_for_index_uses_index_prefix() {
        let errors = ValidationErrors::from_raw(vec![RawValidationError::new(
            ["addresses", "index-1"],
            "region",
            "IS_INVALID",
            "Region is invalid",
        )]);
        assert_eq!(errors.for_object("addresses").for_index(1).size(), 1);
        assert_eq!(errors.for_object("addresses").for_index(0).size(), 0);
    }
}
