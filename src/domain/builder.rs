//! Scoped builder for nested request trees.
//!
//! A [`ScopedBuilder`] keeps a cursor stack of open scopes over a
//! [`ScopeArena`]. Entering a scope pushes a detached node; closing it
//! attaches the node to its parent and pops the cursor. Scopes of an
//! aliasing kind (the deprecated applicant details) stage their writes at the
//! canonical locations given by the alias table and merge them into the
//! parent on close.

use generational_arena::Index;
use tracing::{debug, instrument, trace, warn};

use crate::domain::arena::ScopeArena;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::schema::{applicant_alias, Alias, NodeKind};
use crate::domain::value::{FieldTree, FieldValue};

/// Mutable cursor over one request tree under construction.
#[derive(Debug, Clone)]
pub struct ScopedBuilder {
    tree: ScopeArena,
    /// Open scopes, innermost last; the root is always at the bottom
    stack: Vec<Index>,
    /// First error raised by an infallible write, reported by the next close
    deferred: Option<DomainError>,
}

impl ScopedBuilder {
    pub fn new(root_kind: NodeKind) -> Self {
        let tree = ScopeArena::new(root_kind);
        let stack = vec![tree.root()];
        Self {
            tree,
            stack,
            deferred: None,
        }
    }

    fn current(&self) -> Index {
        self.stack.last().copied().unwrap_or_else(|| self.tree.root())
    }

    fn kind_of(&self, idx: Index) -> DomainResult<NodeKind> {
        self.tree
            .get_node(idx)
            .map(|n| n.kind)
            .ok_or(DomainError::NoOpenScope)
    }

    /// Kind of the innermost open scope.
    pub fn current_kind(&self) -> Option<NodeKind> {
        self.kind_of(self.current()).ok()
    }

    /// Number of open scopes above the root.
    pub fn depth(&self) -> usize {
        self.stack.len().saturating_sub(1)
    }

    /// Enter the child scope `name` of the current scope.
    ///
    /// # Errors
    /// `InvalidScope` if the current kind has no such child scope.
    #[instrument(level = "debug", skip(self))]
    pub fn enter(&mut self, name: &str) -> DomainResult<&mut Self> {
        let current = self.current();
        let kind = self.kind_of(current)?;
        let child_kind = kind.child(name).ok_or_else(|| DomainError::InvalidScope {
            scope: name.to_string(),
            kind,
        })?;

        let (attach_to, canonical) = if kind.is_alias() {
            let alias = Self::alias_for(name)?;
            (self.staging_node(current, alias)?, alias.canonical)
        } else {
            (current, name)
        };

        let idx = self.tree.insert_node(child_kind, canonical, attach_to);
        self.stack.push(idx);
        trace!(scope = canonical, depth = self.depth(), "entered scope");
        Ok(self)
    }

    /// Set a scalar field in the current scope. Last write wins.
    ///
    /// # Errors
    /// - `UnknownAlias` if the current scope aliases and `field` has no
    ///   canonical location
    /// - `FieldConflict` if a closed child scope already uses the name
    pub fn set(&mut self, field: &str, value: impl Into<FieldValue>) -> DomainResult<&mut Self> {
        self.try_write(field, value.into())?;
        Ok(self)
    }

    /// Close the current scope and return to its parent.
    ///
    /// # Errors
    /// - `DuplicateScope` if the parent already holds a child under this name
    /// - `FieldConflict` if the parent holds a scalar field of this name
    /// - `NoOpenScope` if only the root is open
    /// - any error deferred by an earlier [`ScopedBuilder::write`]
    #[instrument(level = "debug", skip(self))]
    pub fn done(&mut self) -> DomainResult<&mut Self> {
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        if self.stack.len() <= 1 {
            return Err(DomainError::NoOpenScope);
        }
        let idx = self.current();
        if self.kind_of(idx)?.is_alias() {
            self.tree.merge_into_parent(idx)?;
        } else {
            self.tree.attach(idx)?;
        }
        self.stack.pop();
        trace!(depth = self.depth(), "closed scope");
        Ok(self)
    }

    /// Close every open scope and return the finished request.
    ///
    /// Unclosed scopes are auto-closed innermost first, each with a warning.
    ///
    /// # Errors
    /// Any error [`ScopedBuilder::done`] raises while auto-closing.
    #[instrument(level = "debug", skip(self))]
    pub fn finish(mut self) -> DomainResult<FieldTree> {
        while self.stack.len() > 1 {
            let name = self
                .tree
                .get_node(self.current())
                .map(|n| n.name.clone())
                .unwrap_or_default();
            warn!(scope = %name, "auto-closing unclosed scope");
            self.done()?;
        }
        if let Some(err) = self.deferred.take() {
            return Err(err);
        }
        debug!(depth = self.tree.depth(), "request finished");
        Ok(self.root_map())
    }

    /// Finished request without consuming the builder.
    ///
    /// # Errors
    /// Same as [`ScopedBuilder::finish`].
    pub fn to_map(&self) -> DomainResult<FieldTree> {
        self.clone().finish()
    }

    /// Everything attached to the root so far; open scopes are not included.
    pub fn root_map(&self) -> FieldTree {
        self.tree.to_field_tree(self.tree.root())
    }

    /// Infallible write for callers whose field names are fixed at compile time.
    ///
    /// A failure is kept and reported by the next close.
    pub(crate) fn write(&mut self, field: &str, value: impl Into<FieldValue>) {
        if let Err(err) = self.try_write(field, value.into()) {
            self.deferred.get_or_insert(err);
        }
    }

    /// Infallible scope entry, see [`ScopedBuilder::write`].
    ///
    /// On failure the cursor stays put and the next close reports the error.
    pub(crate) fn open(&mut self, name: &str) {
        if let Err(err) = self.enter(name) {
            self.deferred.get_or_insert(err);
        }
    }

    fn try_write(&mut self, field: &str, value: FieldValue) -> DomainResult<()> {
        let current = self.current();
        let (target, canonical) = if self.kind_of(current)?.is_alias() {
            let alias = Self::alias_for(field)?;
            (self.staging_node(current, alias)?, alias.canonical)
        } else {
            (current, field)
        };
        let node = self
            .tree
            .get_node_mut(target)
            .ok_or(DomainError::NoOpenScope)?;
        if node.children.contains_key(canonical) {
            return Err(DomainError::FieldConflict {
                name: canonical.to_string(),
                existing: "child scope",
            });
        }
        trace!(field = canonical, value = %value, "set field");
        node.fields.insert(canonical.to_string(), value);
        Ok(())
    }

    fn alias_for(name: &str) -> DomainResult<&'static Alias> {
        applicant_alias(name).ok_or_else(|| DomainError::UnknownAlias {
            field: name.to_string(),
        })
    }

    /// Node under the aliasing scope `alias_idx` that stages writes for `alias.target`.
    fn staging_node(&mut self, alias_idx: Index, alias: &Alias) -> DomainResult<Index> {
        let parent_kind = self
            .tree
            .get_node(alias_idx)
            .and_then(|n| n.attach_to)
            .ok_or(DomainError::NoOpenScope)
            .and_then(|p| self.kind_of(p))?;

        let mut idx = alias_idx;
        let mut kind = parent_kind;
        for name in alias.target {
            kind = kind.child(name).ok_or_else(|| DomainError::UnknownAlias {
                field: alias.deprecated.to_string(),
            })?;
            idx = self.tree.ensure_child(idx, name, kind);
        }
        Ok(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_to_unknown_alias_is_reported_on_close() {
        let mut builder = ScopedBuilder::new(NodeKind::MerchantAccount);
        builder.open("applicant-details");
        builder.write("favorite-color", "blue");

        assert_eq!(
            builder.done().err(),
            Some(DomainError::UnknownAlias {
                field: "favorite-color".into()
            })
        );
    }

    #[test]
    fn test_depth_tracks_open_scopes() {
        let mut builder = ScopedBuilder::new(NodeKind::MerchantAccount);
        builder.enter("business").unwrap().enter("address").unwrap();
        assert_eq!(builder.depth(), 2);
        assert_eq!(builder.current_kind(), Some(NodeKind::Address));
        builder.done().unwrap();
        assert_eq!(builder.current_kind(), Some(NodeKind::Business));
    }

    #[test]
    fn test_cursor_on_missing_node_reports_no_open_scope() {
        let mut builder = ScopedBuilder::new(NodeKind::CreditCard);
        let mut other = ScopeArena::new(NodeKind::MerchantAccount);
        let stray = other.insert_node(NodeKind::Individual, "individual", other.root());
        builder.stack.push(stray);

        assert_eq!(builder.current_kind(), None);
        assert_eq!(
            builder.set("cardholder-name", "Job").err(),
            Some(DomainError::NoOpenScope)
        );
        assert_eq!(
            builder.enter("options").err(),
            Some(DomainError::NoOpenScope)
        );
    }
}
