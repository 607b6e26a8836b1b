//! Plain request/response data: scalar field values and nested field trees.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Scalar value stored under a field name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Bool(bool),
    /// Enumerated symbol, serialized by name (e.g. `EMAIL`)
    Symbol(String),
    /// Explicit null, used to clear a value on update
    Null,
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) | FieldValue::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{:?}", s),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Symbol(s) => write!(f, "{}", s),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// Entry of a [`FieldTree`]: either a scalar or a nested mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldEntry {
    Value(FieldValue),
    Node(FieldTree),
}

/// Plain nested mapping from field name to scalar or sub-mapping.
///
/// This is the finished shape of a request body (and of decoded response
/// entities). Keys are kept sorted so serialized output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldTree {
    entries: BTreeMap<String, FieldEntry>,
}

impl FieldTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_value(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.entries
            .insert(name.into(), FieldEntry::Value(value.into()));
    }

    pub fn insert_node(&mut self, name: impl Into<String>, node: FieldTree) {
        self.entries.insert(name.into(), FieldEntry::Node(node));
    }

    /// Builder-style variant of [`FieldTree::insert_value`].
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert_value(name, value);
        self
    }

    /// Builder-style variant of [`FieldTree::insert_node`].
    pub fn with_node(mut self, name: impl Into<String>, node: FieldTree) -> Self {
        self.insert_node(name, node);
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldEntry> {
        self.entries.get(name)
    }

    pub fn value(&self, name: &str) -> Option<&FieldValue> {
        match self.entries.get(name) {
            Some(FieldEntry::Value(v)) => Some(v),
            _ => None,
        }
    }

    /// Text of a scalar field; `None` when absent, null or not text.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.value(name).and_then(FieldValue::as_text)
    }

    pub fn node(&self, name: &str) -> Option<&FieldTree> {
        match self.entries.get(name) {
            Some(FieldEntry::Node(n)) => Some(n),
            _ => None,
        }
    }

    /// Follow a path of nested node names.
    pub fn node_at(&self, path: &[&str]) -> Option<&FieldTree> {
        path.iter().try_fold(self, |node, name| node.node(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldEntry)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_sorted_and_nested() {
        let tree = FieldTree::new()
            .with_value("tos-accepted", true)
            .with_node("individual", FieldTree::new().with_value("first-name", "Job"))
            .with_value("master-merchant-account-id", None::<String>);

        let json = serde_json::to_string(&tree).unwrap();
        assert_eq!(
            json,
            r#"{"individual":{"first-name":"Job"},"master-merchant-account-id":null,"tos-accepted":true}"#
        );
    }

    #[test]
    fn test_node_at_follows_path() {
        let tree = FieldTree::new().with_node(
            "individual",
            FieldTree::new().with_node("address", FieldTree::new().with_value("region", "IL")),
        );
        assert_eq!(
            tree.node_at(&["individual", "address"]).and_then(|a| a.text("region")),
            Some("IL")
        );
        assert!(tree.node_at(&["business"]).is_none());
    }
}
