//! Directed graph over constituent ids.
//!
//! Nodes live in an arena indexed by insertion position; adjacency lists hold
//! ids in edge insertion order. Cycles, including self-loops, are ordinary
//! edges.

use std::collections::{HashMap, HashSet, VecDeque};

#[cfg(feature = "serde")]
use serde::Serialize;

use schemata_foundation::CstId;

/// A node with its ordered neighbor lists.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct GraphNode {
    /// The node's id.
    pub id: CstId,
    /// Ids with an edge into this node.
    pub inputs: Vec<CstId>,
    /// Ids this node has an edge to.
    pub outputs: Vec<CstId>,
}

impl GraphNode {
    fn new(id: CstId) -> Self {
        Self {
            id,
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }
}

/// Directed graph keyed by [`CstId`].
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Graph {
    nodes: Vec<GraphNode>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<CstId, usize>,
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes
    }
}

impl Eq for Graph {}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a graph seeded with the given nodes and no edges.
    #[must_use]
    pub fn with_nodes(ids: impl IntoIterator<Item = CstId>) -> Self {
        let mut graph = Self::new();
        for id in ids {
            graph.add_node(id);
        }
        graph
    }

    /// Adds a node. Returns false if it already existed.
    pub fn add_node(&mut self, id: CstId) -> bool {
        if self.index.contains_key(&id) {
            return false;
        }
        self.index.insert(id, self.nodes.len());
        self.nodes.push(GraphNode::new(id));
        true
    }

    /// Adds an edge, creating missing endpoints. Returns false if the edge
    /// already existed.
    pub fn add_edge(&mut self, source: CstId, destination: CstId) -> bool {
        if self.has_edge(source, destination) {
            return false;
        }
        self.add_node(source);
        self.add_node(destination);
        let s = self.index[&source];
        let d = self.index[&destination];
        self.nodes[s].outputs.push(destination);
        self.nodes[d].inputs.push(source);
        true
    }

    /// Removes an edge. Returns false if it did not exist.
    pub fn remove_edge(&mut self, source: CstId, destination: CstId) -> bool {
        if !self.has_edge(source, destination) {
            return false;
        }
        let s = self.index[&source];
        let d = self.index[&destination];
        self.nodes[s].outputs.retain(|id| *id != destination);
        self.nodes[d].inputs.retain(|id| *id != source);
        true
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: CstId) -> Option<GraphNode> {
        let position = self.index.remove(&id)?;
        let node = self.nodes.remove(position);
        for other in &mut self.nodes {
            other.inputs.retain(|n| *n != id);
            other.outputs.retain(|n| *n != id);
        }
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(node)
    }

    /// Returns the node for `id`.
    #[must_use]
    pub fn at(&self, id: CstId) -> Option<&GraphNode> {
        self.index.get(&id).map(|&i| &self.nodes[i])
    }

    /// Returns the insertion position of `id`.
    #[must_use]
    pub fn position(&self, id: CstId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Returns true if the node exists.
    #[must_use]
    pub fn contains(&self, id: CstId) -> bool {
        self.index.contains_key(&id)
    }

    /// Returns true if the edge `source → destination` exists.
    #[must_use]
    pub fn has_edge(&self, source: CstId, destination: CstId) -> bool {
        self.at(source)
            .is_some_and(|node| node.outputs.contains(&destination))
    }

    /// Returns the ids with an edge into `id`.
    #[must_use]
    pub fn inputs(&self, id: CstId) -> &[CstId] {
        self.at(id).map_or(&[], |node| node.inputs.as_slice())
    }

    /// Returns the ids `id` has an edge to.
    #[must_use]
    pub fn outputs(&self, id: CstId) -> &[CstId] {
        self.at(id).map_or(&[], |node| node.outputs.as_slice())
    }

    /// Returns the nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.iter()
    }

    /// Returns the node ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = CstId> + '_ {
        self.nodes.iter().map(|node| node.id)
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|node| node.outputs.len()).sum()
    }

    /// Returns the nodes without inputs, in insertion order.
    #[must_use]
    pub fn roots(&self) -> Vec<CstId> {
        self.nodes
            .iter()
            .filter(|node| node.inputs.is_empty())
            .map(|node| node.id)
            .collect()
    }

    /// Returns the nodes without outputs, in insertion order.
    #[must_use]
    pub fn sinks(&self) -> Vec<CstId> {
        self.nodes
            .iter()
            .filter(|node| node.outputs.is_empty())
            .map(|node| node.id)
            .collect()
    }

    /// Returns every node reachable from `targets` through outputs,
    /// excluding the targets themselves, in breadth-first order.
    #[must_use]
    pub fn expand_outputs(&self, targets: &[CstId]) -> Vec<CstId> {
        self.expand(targets, |node| &node.outputs)
    }

    /// Returns every node reaching `targets` through inputs, excluding
    /// the targets themselves, in breadth-first order.
    #[must_use]
    pub fn expand_inputs(&self, targets: &[CstId]) -> Vec<CstId> {
        self.expand(targets, |node| &node.inputs)
    }

    /// Returns `targets` followed by [`Self::expand_outputs`].
    #[must_use]
    pub fn expand_all_outputs(&self, targets: &[CstId]) -> Vec<CstId> {
        let mut result = targets.to_vec();
        result.extend(self.expand_outputs(targets));
        result
    }

    /// Returns `targets` followed by [`Self::expand_inputs`].
    #[must_use]
    pub fn expand_all_inputs(&self, targets: &[CstId]) -> Vec<CstId> {
        let mut result = targets.to_vec();
        result.extend(self.expand_inputs(targets));
        result
    }

    fn expand(&self, targets: &[CstId], next: impl Fn(&GraphNode) -> &Vec<CstId>) -> Vec<CstId> {
        let mut visited: HashSet<CstId> = targets.iter().copied().collect();
        let mut queue: VecDeque<CstId> = targets.iter().copied().collect();
        let mut result = Vec::new();
        while let Some(id) = queue.pop_front() {
            let Some(node) = self.at(id) else {
                continue;
            };
            for &neighbor in next(node) {
                if visited.insert(neighbor) {
                    result.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        result
    }

    /// Returns one cycle as a path `[a, b, ..., a]`, or `None` if the graph
    /// is acyclic. Self-loops count as cycles.
    #[must_use]
    pub fn find_cycle(&self) -> Option<Vec<CstId>> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            New,
            Open,
            Done,
        }

        let mut marks = vec![Mark::New; self.nodes.len()];
        for start in 0..self.nodes.len() {
            if marks[start] != Mark::New {
                continue;
            }
            // (node position, next output to visit)
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            marks[start] = Mark::Open;
            while let Some(frame) = stack.last_mut() {
                let position = frame.0;
                let outputs = &self.nodes[position].outputs;
                if frame.1 >= outputs.len() {
                    marks[position] = Mark::Done;
                    stack.pop();
                    continue;
                }
                let child = self.index[&outputs[frame.1]];
                frame.1 += 1;
                match marks[child] {
                    Mark::New => {
                        marks[child] = Mark::Open;
                        stack.push((child, 0));
                    }
                    Mark::Open => {
                        let from = stack
                            .iter()
                            .position(|(p, _)| *p == child)
                            .unwrap_or_default();
                        let mut cycle: Vec<CstId> =
                            stack[from..].iter().map(|(p, _)| self.nodes[*p].id).collect();
                        cycle.push(self.nodes[child].id);
                        return Some(cycle);
                    }
                    Mark::Done => {}
                }
            }
        }
        None
    }

    /// Returns a component number for each node, indexed by insertion
    /// position. Two nodes share a number exactly when each reaches the other.
    #[must_use]
    pub fn components(&self) -> Vec<usize> {
        let count = self.nodes.len();
        let mut visited = vec![false; count];
        let mut finished = Vec::with_capacity(count);
        for start in 0..count {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
            while let Some(frame) = stack.last_mut() {
                let position = frame.0;
                let outputs = &self.nodes[position].outputs;
                if frame.1 >= outputs.len() {
                    finished.push(position);
                    stack.pop();
                    continue;
                }
                let child = self.index[&outputs[frame.1]];
                frame.1 += 1;
                if !visited[child] {
                    visited[child] = true;
                    stack.push((child, 0));
                }
            }
        }

        let mut component = vec![usize::MAX; count];
        let mut next = 0;
        for &start in finished.iter().rev() {
            if component[start] != usize::MAX {
                continue;
            }
            component[start] = next;
            let mut stack = vec![start];
            while let Some(position) = stack.pop() {
                for input in &self.nodes[position].inputs {
                    let other = self.index[input];
                    if component[other] == usize::MAX {
                        component[other] = next;
                        stack.push(other);
                    }
                }
            }
            next += 1;
        }
        component
    }

    /// Returns a copy without edges implied by longer paths.
    ///
    /// Intended for acyclic graphs; on cyclic input, edges inside a cycle
    /// may be dropped.
    #[must_use]
    pub fn transitive_reduction(&self) -> Self {
        let mut result = Self::with_nodes(self.ids());
        for node in &self.nodes {
            for &output in &node.outputs {
                let implied = node.outputs.iter().any(|&other| {
                    other != output && other != node.id && self.reaches(other, output)
                });
                if !implied {
                    result.add_edge(node.id, output);
                }
            }
        }
        result
    }

    /// Returns true if `to` is reachable from `from` through at least one edge.
    #[must_use]
    pub fn reaches(&self, from: CstId, to: CstId) -> bool {
        self.has_edge(from, to) || self.expand_outputs(&[from]).contains(&to)
    }

    /// Returns the ids in dependency order. See [`crate::sequence::topological_order`].
    #[must_use]
    pub fn topological_order(&self) -> Vec<CstId> {
        crate::sequence::topological_order(self)
    }
}
