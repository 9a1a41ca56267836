//! Attribution graph construction.

use crate::graph::Graph;
use crate::lookup::{LookupTables, seed_graph};
use crate::model::{AttributionRecord, Constituent, CstData};

/// Builds the attribution graph, an edge `container → attribute` per
/// record, and appends each attribute to its container's `attributes`.
///
/// Repeated records add nothing. Records naming unknown ids are skipped.
pub fn build_attribution_graph(
    data: &[CstData],
    records: &[AttributionRecord],
    lookup: &LookupTables,
    items: &mut [Constituent],
) -> Graph {
    let mut graph = seed_graph(data);
    for record in records {
        let Some(container) = lookup.position_of_id(record.container) else {
            tracing::warn!(container = %record.container, "attribution to unknown container skipped");
            continue;
        };
        if lookup.position_of_id(record.attribute).is_none() {
            tracing::warn!(attribute = %record.attribute, "unknown attribute skipped");
            continue;
        }
        if graph.add_edge(record.container, record.attribute) {
            items[container].attributes.push(record.attribute);
        }
    }
    graph
}
