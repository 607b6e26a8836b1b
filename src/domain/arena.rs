use std::collections::BTreeMap;

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::schema::NodeKind;
use crate::domain::value::{FieldTree, FieldValue};

/// Node of a request under construction.
#[derive(Debug, Clone)]
pub struct ScopeNode {
    /// Schema kind of this scope
    pub kind: NodeKind,
    /// Field name under which this node attaches to its parent
    pub name: String,
    /// Index of the node this one attaches to on close, None for the root
    pub attach_to: Option<Index>,
    /// Scalar fields written in this scope (last write wins)
    pub fields: BTreeMap<String, FieldValue>,
    /// Closed child scopes, by field name
    pub children: BTreeMap<String, Index>,
}

/// Arena-based request tree.
///
/// Nodes reference each other only by arena index. A child node exists in
/// the arena from the moment its scope is entered, but is reachable from the
/// root only after [`ScopeArena::attach`].
#[derive(Debug, Clone)]
pub struct ScopeArena {
    /// Arena storage for all scope nodes
    arena: Arena<ScopeNode>,
    /// Index of the root node
    root: Index,
}

impl ScopeArena {
    pub fn new(root_kind: NodeKind) -> Self {
        let mut arena = Arena::new();
        let root = arena.insert(ScopeNode {
            kind: root_kind,
            name: root_kind.root_name().to_string(),
            attach_to: None,
            fields: BTreeMap::new(),
            children: BTreeMap::new(),
        });
        Self { arena, root }
    }

    pub fn root(&self) -> Index {
        self.root
    }

    /// Insert a detached node that will attach to `attach_to` under `name`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_node(&mut self, kind: NodeKind, name: &str, attach_to: Index) -> Index {
        self.arena.insert(ScopeNode {
            kind,
            name: name.to_string(),
            attach_to: Some(attach_to),
            fields: BTreeMap::new(),
            children: BTreeMap::new(),
        })
    }

    pub fn get_node(&self, idx: Index) -> Option<&ScopeNode> {
        self.arena.get(idx)
    }

    pub fn get_node_mut(&mut self, idx: Index) -> Option<&mut ScopeNode> {
        self.arena.get_mut(idx)
    }

    /// Attach a detached node into its parent.
    ///
    /// Fails with `DuplicateScope` if the parent already holds a child under
    /// the same name, or `FieldConflict` if it holds a scalar field of that
    /// name; the node stays detached in both cases.
    #[instrument(level = "trace", skip(self))]
    pub fn attach(&mut self, idx: Index) -> DomainResult<()> {
        let (name, parent_idx) = self.attachment(idx)?;
        let parent = self
            .arena
            .get_mut(parent_idx)
            .ok_or(DomainError::NoOpenScope)?;
        check_free(parent, &name)?;
        parent.children.insert(name, idx);
        Ok(())
    }

    /// Move every child of `idx` into the node `idx` attaches to, then drop `idx`.
    ///
    /// Used to close scopes that only stage writes for other locations.
    /// Duplicates are checked for all children before anything moves.
    #[instrument(level = "trace", skip(self))]
    pub fn merge_into_parent(&mut self, idx: Index) -> DomainResult<()> {
        let (_, parent_idx) = self.attachment(idx)?;
        let staged = self
            .arena
            .get(idx)
            .map(|n| n.children.clone())
            .unwrap_or_default();
        let parent = self.arena.get(parent_idx).ok_or(DomainError::NoOpenScope)?;
        for name in staged.keys() {
            check_free(parent, name)?;
        }

        for (name, child_idx) in staged {
            if let Some(child) = self.arena.get_mut(child_idx) {
                child.attach_to = Some(parent_idx);
            }
            if let Some(parent) = self.arena.get_mut(parent_idx) {
                parent.children.insert(name, child_idx);
            }
        }
        self.arena.remove(idx);
        Ok(())
    }

    /// Return the attached child `name` of `idx`, creating it if missing.
    #[instrument(level = "trace", skip(self))]
    pub fn ensure_child(&mut self, idx: Index, name: &str, kind: NodeKind) -> Index {
        if let Some(&existing) = self.arena.get(idx).and_then(|n| n.children.get(name)) {
            return existing;
        }
        let child = self.insert_node(kind, name, idx);
        if let Some(node) = self.arena.get_mut(idx) {
            node.children.insert(name.to_string(), child);
        }
        child
    }

    /// Number of node levels reachable from the root.
    pub fn depth(&self) -> usize {
        self.calculate_depth(self.root)
    }

    fn calculate_depth(&self, node_idx: Index) -> usize {
        if let Some(node) = self.get_node(node_idx) {
            1 + node
                .children
                .values()
                .map(|&child| self.calculate_depth(child))
                .max()
                .unwrap_or(0)
        } else {
            0
        }
    }

    /// Materialize the attached subtree at `idx` as a plain nested mapping.
    pub fn to_field_tree(&self, idx: Index) -> FieldTree {
        let mut tree = FieldTree::new();
        if let Some(node) = self.get_node(idx) {
            for (name, value) in &node.fields {
                tree.insert_value(name.clone(), value.clone());
            }
            for (name, &child) in &node.children {
                tree.insert_node(name.clone(), self.to_field_tree(child));
            }
        }
        tree
    }

    fn attachment(&self, idx: Index) -> DomainResult<(String, Index)> {
        let node = self.arena.get(idx).ok_or(DomainError::NoOpenScope)?;
        let parent = node.attach_to.ok_or(DomainError::NoOpenScope)?;
        Ok((node.name.clone(), parent))
    }
}

/// A node name must not collide with a closed child or a scalar field.
fn check_free(parent: &ScopeNode, name: &str) -> DomainResult<()> {
    if parent.children.contains_key(name) {
        return Err(DomainError::DuplicateScope {
            name: name.to_string(),
        });
    }
    if parent.fields.contains_key(name) {
        return Err(DomainError::FieldConflict {
            name: name.to_string(),
            existing: "field",
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_node_is_invisible_until_attached() {
        let mut arena = ScopeArena::new(NodeKind::MerchantAccount);
        let child = arena.insert_node(NodeKind::Individual, "individual", arena.root());
        if let Some(node) = arena.get_node_mut(child) {
            node.fields.insert("first-name".into(), "Job".into());
        }
        assert!(arena.to_field_tree(arena.root()).is_empty());

        arena.attach(child).unwrap();
        let tree = arena.to_field_tree(arena.root());
        assert_eq!(tree.node("individual").and_then(|n| n.text("first-name")), Some("Job"));
        assert_eq!(arena.depth(), 2);
    }

    #[test]
    fn test_attach_twice_under_same_name_fails() {
        let mut arena = ScopeArena::new(NodeKind::MerchantAccount);
        let first = arena.insert_node(NodeKind::Funding, "funding", arena.root());
        let second = arena.insert_node(NodeKind::Funding, "funding", arena.root());
        arena.attach(first).unwrap();

        let result = arena.attach(second);
        assert_eq!(
            result,
            Err(DomainError::DuplicateScope {
                name: "funding".into()
            })
        );
    }

    #[test]
    fn test_attach_over_scalar_field_fails_and_keeps_field() {
        let mut arena = ScopeArena::new(NodeKind::MerchantAccount);
        let root = arena.root();
        if let Some(node) = arena.get_node_mut(root) {
            node.fields.insert("funding".into(), "x".into());
        }
        let child = arena.insert_node(NodeKind::Funding, "funding", root);

        assert_eq!(
            arena.attach(child),
            Err(DomainError::FieldConflict {
                name: "funding".into(),
                existing: "field"
            })
        );
        assert_eq!(arena.to_field_tree(root).text("funding"), Some("x"));
    }

    #[test]
    fn test_attach_root_fails() {
        let mut arena = ScopeArena::new(NodeKind::CreditCard);
        assert_eq!(arena.attach(arena.root()), Err(DomainError::NoOpenScope));
    }
}
