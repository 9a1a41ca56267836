//! Dependency graph construction.

use schemata_language::extract_globals;

use crate::graph::Graph;
use crate::lookup::{LookupTables, seed_graph};
use crate::model::CstData;

/// Builds the dependency graph: an edge `s → c` for every alias in
/// `c.definition_formal` that resolves to `s`.
///
/// Unresolved aliases are skipped. Self-references become self-loops.
/// Items shadowed by an earlier item with the same id contribute no edges,
/// and references to their aliases count as unresolved.
#[must_use]
pub fn build_dependency_graph(
    items: &[CstData],
    lookup: &LookupTables,
    log_dangling: bool,
) -> Graph {
    let mut graph = seed_graph(items);
    for (position, item) in items.iter().enumerate() {
        if lookup.position_of_id(item.id) != Some(position) {
            continue;
        }
        for alias in extract_globals(&item.definition_formal) {
            match lookup.position_of_reference(alias.as_str()) {
                Some(source) => {
                    graph.add_edge(items[source].id, item.id);
                }
                None if log_dangling => {
                    tracing::trace!(from = %item.alias, to = %alias, "dangling reference skipped");
                }
                None => {}
            }
        }
    }
    graph
}
