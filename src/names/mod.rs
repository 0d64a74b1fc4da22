//! Names module - matching sibling declarations across two trees by name.
//!
//! Generated trees carry no stable identity, so every sibling list (module
//! members, fields, parameters, methods, enum members) is paired up through the
//! same routine: index both sides with a [`NameMap`] and split the names into
//! matched, removed and added.

mod name_map;

pub use name_map::*;

use crate::error::MergeError;

/// Matching is the outcome of pairing a previous and a next sibling list.
#[derive(Debug, Clone)]
pub struct Matching<'a, T> {
    /// Pairs present on both sides, in next order.
    pub matched: Vec<(&'a T, &'a T)>,
    /// Previous-only siblings, in previous order.
    pub removed: Vec<&'a T>,
    /// Next-only siblings, in next order.
    pub added: Vec<&'a T>,
}

/// Pairs `prev` and `next` siblings by the name `name_of` extracts.
pub fn match_by_name<'a, T, F>(
    prev: &'a [T],
    next: &'a [T],
    name_of: F,
    scope: &str,
    policy: DuplicateNames,
) -> Result<Matching<'a, T>, MergeError>
where
    F: Fn(&T) -> String,
{
    let prev_map = NameMap::build(prev, &name_of, scope, policy)?;
    let next_map = NameMap::build(next, &name_of, scope, policy)?;

    let removed = prev_map
        .iter()
        .filter(|(name, _)| !next_map.contains(name))
        .map(|(_, node)| node)
        .collect();

    let mut matched = Vec::new();
    let mut added = Vec::new();
    for (name, next_node) in next_map.iter() {
        match prev_map.get(name) {
            Some(prev_node) => matched.push((prev_node, next_node)),
            None => added.push(next_node),
        }
    }

    Ok(Matching {
        matched,
        removed,
        added,
    })
}
