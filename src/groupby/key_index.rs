//! Ordered index from composite keys to group ids

use std::collections::BTreeMap;

use super::key::{CompositeKey, GroupId};

/// Assigns a stable id to each distinct composite key
///
/// Backed by an ordered tree, so lookups and inserts are logarithmic in the
/// number of distinct keys. An index lives for a single grouping pass and is
/// kept by the grouped table it produced for key lookups.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyIndex {
    tree: BTreeMap<CompositeKey, GroupId>,
}

impl KeyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the id of `key`, allocating the next unused id on first sight
    pub fn find(&mut self, key: &CompositeKey) -> GroupId {
        if let Some(&id) = self.tree.get(key) {
            return id;
        }

        let id = self.tree.len();
        log::trace!("key {} -> group {}", key, id);
        self.tree.insert(key.clone(), id);
        id
    }

    /// Id of `key` if it has been seen
    pub fn get(&self, key: &CompositeKey) -> Option<GroupId> {
        self.tree.get(key).copied()
    }

    /// Number of distinct keys seen
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }
}
