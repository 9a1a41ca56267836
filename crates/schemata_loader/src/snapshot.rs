//! Immutable loader output.

use std::collections::{HashSet, VecDeque};
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::Serialize;

use schemata_foundation::{CstId, IntegrityIssue, SchemaId};

use crate::graph::Graph;
use crate::model::Constituent;
use crate::stats::SchemaStats;

/// A loaded schema: the input items with every derived field populated,
/// plus the graphs and lookup maps built on the way.
///
/// Snapshots are never modified after loading. Cloning is cheap and the
/// snapshot can be shared across threads.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct LoadedSchema {
    /// Schema identifier.
    pub id: SchemaId,
    /// Version tag; `None` for the current version.
    pub version: Option<String>,
    /// Human-readable title.
    pub title: String,
    items: im::Vector<Constituent>,
    graph: Arc<Graph>,
    attribution_graph: Arc<Graph>,
    cst_by_alias: im::HashMap<String, usize>,
    cst_by_id: im::HashMap<CstId, usize>,
    order: Arc<[CstId]>,
    stats: SchemaStats,
    issues: im::Vector<IntegrityIssue>,
}

/// Parts assembled by the loader.
pub(crate) struct SnapshotParts {
    pub id: SchemaId,
    pub version: Option<String>,
    pub title: String,
    pub items: Vec<Constituent>,
    pub graph: Graph,
    pub attribution_graph: Graph,
    pub order: Vec<CstId>,
    pub issues: Vec<IntegrityIssue>,
}

impl LoadedSchema {
    pub(crate) fn assemble(parts: SnapshotParts) -> Self {
        let mut cst_by_alias = im::HashMap::new();
        let mut cst_by_id = im::HashMap::new();
        for (position, cst) in parts.items.iter().enumerate() {
            cst_by_alias
                .entry(cst.alias.as_str().to_string())
                .or_insert(position);
            cst_by_id.entry(cst.id).or_insert(position);
        }
        let stats = SchemaStats::collect(&parts.items);
        Self {
            id: parts.id,
            version: parts.version,
            title: parts.title,
            items: parts.items.into_iter().collect(),
            graph: Arc::new(parts.graph),
            attribution_graph: Arc::new(parts.attribution_graph),
            cst_by_alias,
            cst_by_id,
            order: parts.order.into(),
            stats,
            issues: parts.issues.into_iter().collect(),
        }
    }

    /// Returns the constituents in input order.
    pub fn items(&self) -> impl Iterator<Item = &Constituent> {
        self.items.iter()
    }

    /// Returns the constituent at a list position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Constituent> {
        self.items.get(position)
    }

    /// Returns the number of constituents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the schema has no constituents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Looks up a constituent by alias.
    #[must_use]
    pub fn by_alias(&self, alias: &str) -> Option<&Constituent> {
        self.cst_by_alias
            .get(alias)
            .and_then(|&position| self.items.get(position))
    }

    /// Looks up a constituent by id.
    #[must_use]
    pub fn by_id(&self, id: CstId) -> Option<&Constituent> {
        self.cst_by_id
            .get(&id)
            .and_then(|&position| self.items.get(position))
    }

    /// Returns the dependency graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Returns the attribution graph.
    #[must_use]
    pub fn attribution_graph(&self) -> &Graph {
        &self.attribution_graph
    }

    /// Returns the ids in dependency order.
    #[must_use]
    pub fn topological_order(&self) -> &[CstId] {
        &self.order
    }

    /// Returns the constituents `id` references.
    #[must_use]
    pub fn predecessors(&self, id: CstId) -> Vec<&Constituent> {
        self.resolve_all(self.graph.inputs(id))
    }

    /// Returns the constituents referencing `id`.
    #[must_use]
    pub fn successors(&self, id: CstId) -> Vec<&Constituent> {
        self.resolve_all(self.graph.outputs(id))
    }

    /// Returns the root of the spawner chain of `id`, or the constituent
    /// itself when it has no spawner.
    #[must_use]
    pub fn spawn_root(&self, id: CstId) -> Option<&Constituent> {
        let mut current = self.by_id(id)?;
        let mut seen = HashSet::new();
        while let Some(spawner) = current.spawner {
            if !seen.insert(current.id) {
                break;
            }
            match self.by_id(spawner) {
                Some(next) => current = next,
                None => break,
            }
        }
        Some(current)
    }

    /// Returns every constituent spawned from `id`, directly or through
    /// other spawn, in breadth-first order.
    #[must_use]
    pub fn spawn_tree(&self, id: CstId) -> Vec<CstId> {
        let mut result = Vec::new();
        let mut seen = HashSet::from([id]);
        let mut queue = VecDeque::from([id]);
        while let Some(next) = queue.pop_front() {
            let Some(cst) = self.by_id(next) else {
                continue;
            };
            for &child in &cst.spawn {
                if seen.insert(child) {
                    result.push(child);
                    queue.push_back(child);
                }
            }
        }
        result
    }

    /// Returns aggregate counts.
    #[must_use]
    pub fn stats(&self) -> &SchemaStats {
        &self.stats
    }

    /// Returns the integrity issues found while loading.
    pub fn issues(&self) -> impl Iterator<Item = &IntegrityIssue> {
        self.issues.iter()
    }

    /// Returns true if loading found no integrity issues.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.issues.is_empty()
    }

    fn resolve_all(&self, ids: &[CstId]) -> Vec<&Constituent> {
        ids.iter().filter_map(|&id| self.by_id(id)).collect()
    }
}
