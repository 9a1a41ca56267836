//! Dependency ordering.
//!
//! Kahn's algorithm over the graph's strongly connected components, with ties
//! broken by insertion position. Edges inside a component (self-loops and
//! cycles) do not constrain the order, so the result always covers every node.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use schemata_foundation::CstId;

use crate::graph::Graph;

/// Returns every node of `graph` exactly once.
///
/// For every edge `a → b` where `b` does not reach back to `a`, `a` precedes
/// `b`. Among nodes that are ready at the same time, the one inserted first
/// wins, so the result depends only on the graph's insertion order.
#[must_use]
pub fn topological_order(graph: &Graph) -> Vec<CstId> {
    let nodes: Vec<_> = graph.nodes().collect();
    let component = graph.components();
    let position_of = |id: CstId| graph.position(id);

    let mut in_degree: Vec<usize> = nodes
        .iter()
        .enumerate()
        .map(|(position, node)| {
            node.inputs
                .iter()
                .filter_map(|&input| position_of(input))
                .filter(|&input| component[input] != component[position])
                .count()
        })
        .collect();
    let mut ready: BinaryHeap<Reverse<usize>> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(position, _)| Reverse(position))
        .collect();

    let mut result = Vec::with_capacity(nodes.len());
    while let Some(Reverse(position)) = ready.pop() {
        let node = nodes[position];
        result.push(node.id);
        for &output in &node.outputs {
            let Some(next) = position_of(output) else {
                continue;
            };
            if component[next] == component[position] {
                continue;
            }
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                ready.push(Reverse(next));
            }
        }
    }
    result
}

/// Returns true if `order` lists every node of `graph` once and respects
/// every edge that is not part of a cycle.
#[must_use]
pub fn respects_dependencies(graph: &Graph, order: &[CstId]) -> bool {
    if order.len() != graph.len() {
        return false;
    }
    let mut rank = std::collections::HashMap::with_capacity(order.len());
    for (i, id) in order.iter().enumerate() {
        if rank.insert(*id, i).is_some() || !graph.contains(*id) {
            return false;
        }
    }
    let component = graph.components();
    graph.nodes().enumerate().all(|(position, node)| {
        node.outputs.iter().all(|&output| {
            graph
                .position(output)
                .is_some_and(|other| component[other] == component[position])
                || rank[&node.id] < rank[&output]
        })
    })
}
