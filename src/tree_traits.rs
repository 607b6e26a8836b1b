//! Tree rendering for request and validation-error trees.

use termtree::Tree;
use tracing::instrument;

use crate::domain::{FieldEntry, FieldTree, ValidationErrors};

pub trait TreeDisplay {
    fn to_tree_string(&self) -> Tree<String>;
}

fn field_tree(label: String, node: &FieldTree) -> Tree<String> {
    let leaves: Vec<_> = node
        .iter()
        .map(|(name, entry)| match entry {
            FieldEntry::Value(v) => Tree::new(format!("{}: {}", name, v)),
            FieldEntry::Node(n) => field_tree(name.clone(), n),
        })
        .collect();
    Tree::new(label).with_leaves(leaves)
}

impl TreeDisplay for FieldTree {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        field_tree("request".to_string(), self)
    }
}

fn errors_tree(label: String, node: &ValidationErrors) -> Tree<String> {
    let mut tree = Tree::new(label);
    for error in node.all() {
        tree.push(Tree::new(format!("{}: {}", error.field(), error.code())));
    }
    for name in node.object_names() {
        tree.push(errors_tree(name.to_string(), node.for_object(name)));
    }
    tree
}

impl TreeDisplay for ValidationErrors {
    #[instrument(level = "trace", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        errors_tree("errors".to_string(), self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RawValidationError;

    #[test]
    fn test_renders_nested_errors() {
        let errors = ValidationErrors::from_raw(vec![
            RawValidationError::new(["individual"], "first-name", "IS_REQUIRED", "required"),
            RawValidationError::new(["individual", "address"], "region", "IS_INVALID", "invalid"),
        ]);

        let rendered = errors.to_tree_string().to_string();

        assert!(rendered.starts_with("errors"));
        assert!(rendered.contains("first-name: IS_REQUIRED"));
        assert!(rendered.contains("region: IS_INVALID"));
    }

    #[test]
    fn test_renders_request_fields() {
        let request = FieldTree::new()
            .with_value("tos-accepted", true)
            .with_node("funding", FieldTree::new().with_value("email", "a@b.com"));

        let rendered = request.to_tree_string().to_string();

        assert!(rendered.contains("tos-accepted: true"));
        assert!(rendered.contains("email: \"a@b.com\""));
    }
}
