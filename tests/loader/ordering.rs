//! Integration tests for dependency ordering and determinism

use proptest::prelude::*;
use schemata_foundation::CstType;
use schemata_loader::{CstData, SchemaData, respects_dependencies};

use crate::{id, load};

/// Terms `D1..Dn` over `X1`; each definition unions the listed terms.
fn schema_from_references(references: &[Vec<usize>]) -> SchemaData {
    let mut schema = SchemaData::new(1).with_item(CstData::new(1, "X1", CstType::Base));
    for (i, targets) in references.iter().enumerate() {
        let mut parts = vec!["X1".to_string()];
        parts.extend(targets.iter().map(|t| format!("D{}", t + 1)));
        schema = schema.with_item(
            CstData::new(i as u64 + 2, &format!("D{}", i + 1), CstType::Term)
                .with_definition(parts.join(" ∪ ")),
        );
    }
    schema
}

fn arb_references(acyclic: bool) -> impl Strategy<Value = Vec<Vec<usize>>> {
    (1usize..20).prop_flat_map(move |size| {
        prop::collection::vec(prop::collection::vec(0..size, 0..4), size).prop_map(
            move |mut references| {
                if acyclic {
                    for (i, targets) in references.iter_mut().enumerate() {
                        targets.retain(|t| *t < i);
                    }
                }
                references
            },
        )
    })
}

#[test]
fn reverse_listed_chain_is_reordered() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(4, "D3", CstType::Term).with_definition("D2"))
        .with_item(CstData::new(3, "D2", CstType::Term).with_definition("D1"))
        .with_item(CstData::new(2, "D1", CstType::Term).with_definition("X1"))
        .with_item(CstData::new(1, "X1", CstType::Base));
    let loaded = load(&schema);
    assert_eq!(loaded.topological_order(), &[id(1), id(2), id(3), id(4)]);
    // Items keep their input order.
    let aliases: Vec<&str> = loaded.items().map(|c| c.alias.as_str()).collect();
    assert_eq!(aliases, vec!["D3", "D2", "D1", "X1"]);
}

#[test]
fn dangling_references_do_not_become_edges() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "D1", CstType::Term).with_definition("X1 ∪ X7"));
    let loaded = load(&schema);
    assert_eq!(loaded.graph().edge_count(), 1);
    assert_eq!(loaded.graph().len(), 2);
}

proptest! {
    #[test]
    fn acyclic_schemas_order_every_edge(references in arb_references(true)) {
        let loaded = load(&schema_from_references(&references));
        let graph = loaded.graph();
        let order = loaded.topological_order();
        let rank = |target| order.iter().position(|id| *id == target).unwrap();
        for node in graph.nodes() {
            for &output in &node.outputs {
                prop_assert!(rank(node.id) < rank(output));
            }
        }
    }

    #[test]
    fn cyclic_schemas_still_order_every_item(references in arb_references(false)) {
        let loaded = load(&schema_from_references(&references));
        prop_assert_eq!(loaded.topological_order().len(), references.len() + 1);
        prop_assert!(respects_dependencies(loaded.graph(), loaded.topological_order()));
        prop_assert!(loaded.items().all(|cst| cst.analysis.is_some()));
    }

    #[test]
    fn loading_is_deterministic(references in arb_references(false)) {
        let schema = schema_from_references(&references);
        let first = load(&schema);
        let second = load(&schema);
        prop_assert_eq!(first.topological_order(), second.topological_order());
        let a: Vec<_> = first.items().cloned().collect();
        let b: Vec<_> = second.items().cloned().collect();
        prop_assert_eq!(a, b);
    }
}
