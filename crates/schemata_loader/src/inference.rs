//! Attribute inference.
//!
//! Derived fields are computed in dependency order so that every input of a
//! constituent is classified before the constituent itself. Inputs that are
//! not yet classified when they are needed (members of a cycle) are treated
//! as absent.
//!
//! Three relationships are kept apart here: formal dependency (graph edges),
//! inheritance across schemas, and template instantiation (spawner/spawn).

use schemata_foundation::{CstClass, CstId, CstType};
use schemata_language::{
    extract_bound_arguments, extract_globals, is_simple_expression, is_template_expression,
    split_template_definition,
};

use crate::graph::Graph;
use crate::inheritance::apply_inheritance;
use crate::lookup::LookupTables;
use crate::model::{Constituent, SchemaData};

/// Returns list positions in visitation order: the dependency order of the
/// graph, followed by items shadowed by a duplicate id, in list order.
#[must_use]
pub fn visit_order(graph: &Graph, lookup: &LookupTables, len: usize) -> Vec<usize> {
    let mut visited = vec![false; len];
    let mut order = Vec::with_capacity(len);
    for id in graph.topological_order() {
        if let Some(position) = lookup.position_of_id(id) {
            visited[position] = true;
            order.push(position);
        }
    }
    order.extend((0..len).filter(|position| !visited[*position]));
    order
}

/// Computes every derived field except `attributes`, `analysis` and `status`.
///
/// `visit` is the order produced by [`visit_order`].
#[must_use]
pub fn infer_attributes(
    schema: &SchemaData,
    lookup: &LookupTables,
    graph: &Graph,
    visit: &[usize],
) -> Vec<Constituent> {
    let mut items: Vec<Constituent> = schema.items.iter().map(Constituent::from_data).collect();
    apply_inheritance(schema.id, &schema.inheritance, lookup, &mut items);

    let mut engine = Inference {
        processed: vec![false; items.len()],
        items,
        graph,
        lookup,
    };
    for &position in visit {
        engine.classify(position);
    }
    let mut items = engine.items;
    materialize_spawn(&mut items, lookup);
    items
}

struct Inference<'a> {
    items: Vec<Constituent>,
    processed: Vec<bool>,
    graph: &'a Graph,
    lookup: &'a LookupTables,
}

impl Inference<'_> {
    fn classify(&mut self, position: usize) {
        let is_template = is_template_expression(&self.items[position].definition_formal);
        let cst = &mut self.items[position];
        cst.is_template = is_template;
        cst.cst_class = if is_template {
            CstClass::Template
        } else {
            cst.cst_type.base_class()
        };

        let simple = self.infer_simple_expression(position);
        self.items[position].is_simple_expression = simple;
        if simple && self.items[position].cst_type != CstType::Structured {
            let spawner = self.infer_spawner(position);
            let alias = spawner
                .and_then(|id| self.lookup.position_of_id(id))
                .map(|p| self.items[p].alias.clone());
            let cst = &mut self.items[position];
            cst.spawner = spawner;
            cst.spawner_alias = alias;
        }
        self.processed[position] = true;
    }

    /// Ids with an edge into the item at `position`. Shadowed items have none.
    fn inputs(&self, position: usize) -> &[CstId] {
        let id = self.items[position].id;
        if self.lookup.position_of_id(id) == Some(position) {
            self.graph.inputs(id)
        } else {
            &[]
        }
    }

    /// Returns an already classified constituent, or the one being classified.
    fn resolved(&self, current: usize, other: usize) -> Option<&Constituent> {
        if other == current || self.processed[other] {
            Some(&self.items[other])
        } else {
            tracing::trace!(
                cst = %self.items[current].alias,
                input = %self.items[other].alias,
                "input not yet resolved"
            );
            None
        }
    }

    fn resolved_id(&self, current: usize, id: CstId) -> Option<&Constituent> {
        let other = self.lookup.position_of_id(id)?;
        self.resolved(current, other)
    }

    fn resolved_alias(&self, current: usize, alias: &str) -> Option<&Constituent> {
        let other = self.lookup.position_of_reference(alias)?;
        self.resolved(current, other)
    }

    fn infer_simple_expression(&self, position: usize) -> bool {
        let cst = &self.items[position];
        if cst.cst_type == CstType::Structured || cst.cst_type.is_base_set() {
            return false;
        }
        let poisoned = self
            .inputs(position)
            .iter()
            .filter_map(|&id| self.resolved_id(position, id))
            .any(|input| input.is_template && !input.is_simple_expression);
        if poisoned {
            return false;
        }
        if cst.cst_type.is_functional() {
            is_simple_expression(&split_template_definition(&cst.definition_formal).body)
        } else {
            is_simple_expression(&cst.definition_formal)
        }
    }

    fn infer_spawner(&self, position: usize) -> Option<CstId> {
        let sources = self.extract_sources(position);
        let [source] = sources.as_slice() else {
            return None;
        };
        if *source == self.items[position].id {
            return None;
        }
        let parent = &self.items[self.lookup.position_of_id(*source)?];
        if parent.cst_type.is_base_set() {
            return None;
        }
        Some(*source)
    }

    /// Distinct constituents the expression ultimately resolves through.
    fn extract_sources(&self, position: usize) -> Vec<CstId> {
        let cst = &self.items[position];
        let mut sources = Vec::new();

        if !cst.cst_type.is_functional() {
            // Base sets bound as arguments of an application are not origins.
            let bound = extract_bound_arguments(&cst.definition_formal);
            for input in self
                .inputs(position)
                .iter()
                .filter_map(|&id| self.resolved_id(position, id))
            {
                let is_bound_base = input.cst_type.is_base_set()
                    && bound.iter().any(|alias| *alias == input.alias);
                if !is_bound_base && !input.is_collapsed_template() {
                    push_unique(&mut sources, input.resolved_root());
                }
            }
            return sources;
        }

        let parts = split_template_definition(&cst.definition_formal);
        for alias in extract_globals(&parts.body) {
            if let Some(input) = self.resolved_alias(position, alias.as_str()) {
                if !input.is_collapsed_template() {
                    push_unique(&mut sources, input.resolved_root());
                }
            }
        }

        let check_head = match sources.as_slice() {
            [] => true,
            [single] => self.lookup.position_of_id(*single).is_some_and(|p| {
                let base = &self.items[p];
                !base.cst_type.is_functional()
                    || split_template_definition(&base.definition_formal).head != parts.head
            }),
            _ => false,
        };
        if check_head {
            for alias in extract_globals(&parts.head) {
                if let Some(input) = self.resolved_alias(position, alias.as_str()) {
                    if !input.cst_type.is_base_set() {
                        push_unique(&mut sources, input.resolved_root());
                    }
                }
            }
        }
        sources
    }
}

fn push_unique(sources: &mut Vec<CstId>, id: CstId) {
    if !sources.contains(&id) {
        sources.push(id);
    }
}

/// Appends every constituent to its spawner's `spawn` list, in list order.
fn materialize_spawn(items: &mut [Constituent], lookup: &LookupTables) {
    let links: Vec<(usize, usize)> = items
        .iter()
        .enumerate()
        .filter_map(|(position, cst)| {
            let spawner = lookup.position_of_id(cst.spawner?)?;
            Some((spawner, position))
        })
        .collect();
    for (spawner, child) in links {
        let id = items[child].id;
        let alias = items[child].alias.clone();
        items[spawner].spawn.push(id);
        items[spawner].spawn_alias.push(alias);
    }
}
