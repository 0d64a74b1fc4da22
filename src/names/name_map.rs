//! NameMap - an insertion-ordered map from sibling names to nodes.

use crate::error::MergeError;
use std::collections::HashMap;
use tracing::warn;

/// DuplicateNames decides what happens when two siblings share a name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateNames {
    /// Abort with [`MergeError::DuplicateName`].
    #[default]
    Reject,
    /// Keep the first sibling and shadow the later ones.
    FirstWins,
}

#[derive(Debug, Clone)]
struct NamedEntry<'a, T> {
    name: String,
    node: &'a T,
}

/// NameMap indexes a sibling list by name and iterates in first-seen order.
#[derive(Debug, Clone)]
pub struct NameMap<'a, T> {
    entries: Vec<NamedEntry<'a, T>>,
    index: HashMap<String, usize>,
}

impl<'a, T> NameMap<'a, T> {
    /// Builds the map from `items`. `scope` names the enclosing declaration in
    /// duplicate-name errors.
    pub fn build<F>(items: &'a [T], name_of: F, scope: &str, policy: DuplicateNames) -> Result<Self, MergeError>
    where
        F: Fn(&T) -> String,
    {
        let mut entries = Vec::with_capacity(items.len());
        let mut index = HashMap::with_capacity(items.len());

        for node in items {
            let name = name_of(node);
            if index.contains_key(&name) {
                match policy {
                    DuplicateNames::Reject => return Err(MergeError::duplicate(scope, name)),
                    DuplicateNames::FirstWins => {
                        warn!(scope, name = %name, "duplicate sibling name; keeping the first occurrence");
                        continue;
                    }
                }
            }
            index.insert(name.clone(), entries.len());
            entries.push(NamedEntry { name, node });
        }

        Ok(NameMap { entries, index })
    }

    /// Returns the number of distinct names.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Gets the node registered under `name`.
    pub fn get(&self, name: &str) -> Option<&'a T> {
        self.index.get(name).map(|&i| self.entries[i].node)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates over `(name, node)` in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &'a T)> + '_ {
        self.entries.iter().map(|e| (e.name.as_str(), e.node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Node {
        name: &'static str,
        value: i32,
    }

    fn nodes() -> Vec<Node> {
        vec![
            Node { name: "c", value: 1 },
            Node { name: "a", value: 2 },
            Node { name: "b", value: 3 },
        ]
    }

    #[test]
    fn test_name_map_preserves_order() {
        let items = nodes();
        let map = NameMap::build(&items, |n| n.name.to_string(), "test", DuplicateNames::Reject).unwrap();

        assert_eq!(map.iter().map(|(n, _)| n).collect::<Vec<_>>(), vec!["c", "a", "b"]);
        assert_eq!(map.get("a").map(|n| n.value), Some(2));
        assert!(!map.contains("d"));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_name_map_rejects_duplicates() {
        let items = vec![Node { name: "a", value: 1 }, Node { name: "a", value: 2 }];
        let err = NameMap::build(&items, |n| n.name.to_string(), "record type 'X'", DuplicateNames::Reject)
            .unwrap_err();
        assert_eq!(err, MergeError::duplicate("record type 'X'", "a"));
    }

    #[test]
    fn test_name_map_first_wins() {
        let items = vec![Node { name: "a", value: 1 }, Node { name: "a", value: 2 }];
        let map = NameMap::build(&items, |n| n.name.to_string(), "test", DuplicateNames::FirstWins).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("a").map(|n| n.value), Some(1));
    }
}
