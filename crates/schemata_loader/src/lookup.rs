//! Alias and id lookup tables.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use schemata_foundation::{Alias, CstId, IntegrityIssue};

use crate::graph::Graph;
use crate::model::CstData;

/// Lookup tables over an ordered item list.
///
/// Both maps point at list positions. On a duplicate key the first
/// occurrence wins and the later one is recorded in [`Self::issues`].
#[derive(Clone, Debug, Default)]
pub struct LookupTables {
    /// Alias → position of the first item carrying it.
    pub by_alias: HashMap<Alias, usize>,
    /// Id → position of the first item carrying it.
    pub by_id: HashMap<CstId, usize>,
    /// Duplicates found while indexing, in list order.
    pub issues: Vec<IntegrityIssue>,
    /// Positions whose id was already taken by an earlier item.
    pub shadowed: Vec<usize>,
}

impl LookupTables {
    /// Resolves an alias to a list position.
    #[must_use]
    pub fn position_of_alias(&self, alias: &str) -> Option<usize> {
        self.by_alias.get(alias).copied()
    }

    /// Resolves an alias to a list position, treating aliases of items
    /// shadowed by a duplicate id as unresolved.
    #[must_use]
    pub fn position_of_reference(&self, alias: &str) -> Option<usize> {
        self.position_of_alias(alias)
            .filter(|position| !self.is_shadowed(*position))
    }

    /// Returns true if the item at `position` lost its id to an earlier item.
    #[must_use]
    pub fn is_shadowed(&self, position: usize) -> bool {
        self.shadowed.contains(&position)
    }

    /// Resolves an id to a list position.
    #[must_use]
    pub fn position_of_id(&self, id: CstId) -> Option<usize> {
        self.by_id.get(&id).copied()
    }

    /// Returns true if nothing was shadowed.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Indexes `items` by alias and id.
#[must_use]
pub fn build_lookup(items: &[CstData]) -> LookupTables {
    let mut tables = LookupTables {
        by_alias: HashMap::with_capacity(items.len()),
        by_id: HashMap::with_capacity(items.len()),
        issues: Vec::new(),
        shadowed: Vec::new(),
    };
    for (position, item) in items.iter().enumerate() {
        match tables.by_id.entry(item.id) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(slot) => {
                let issue = IntegrityIssue::DuplicateId {
                    id: item.id,
                    first: *slot.get(),
                    duplicate: position,
                };
                tracing::warn!(%issue, "schema integrity");
                tables.issues.push(issue);
                tables.shadowed.push(position);
            }
        }
        match tables.by_alias.entry(item.alias.clone()) {
            Entry::Vacant(slot) => {
                slot.insert(position);
            }
            Entry::Occupied(slot) => {
                let issue = IntegrityIssue::DuplicateAlias {
                    alias: item.alias.clone(),
                    first: *slot.get(),
                    duplicate: position,
                };
                tracing::warn!(%issue, "schema integrity");
                tables.issues.push(issue);
            }
        }
    }
    tables
}

/// Creates a graph holding every distinct id of `items`, in list order.
#[must_use]
pub fn seed_graph(items: &[CstData]) -> Graph {
    Graph::with_nodes(items.iter().map(|item| item.id))
}
