//! End-to-end scenarios for the loader

use schemata_foundation::{CstClass, CstType, ExpressionStatus};
use schemata_loader::{CstData, SchemaData};

use crate::{cst, load};

#[test]
fn bare_reference_to_base_set() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "D1", CstType::Term).with_definition("X1"));
    let loaded = load(&schema);
    let x1 = cst(&loaded, "X1");
    let d1 = cst(&loaded, "D1");

    assert!(d1.is_simple_expression);
    assert_eq!(d1.spawner, None);
    assert!(loaded.graph().has_edge(x1.id, d1.id));
    assert_eq!(loaded.topological_order(), &[x1.id, d1.id]);
    assert!(x1.spawn.is_empty());
}

#[test]
fn base_set_beside_another_origin_blocks_the_spawner() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "D1", CstType::Term).with_definition("card(X9)"))
        .with_item(CstData::new(3, "F1", CstType::Function).with_definition("[α∈X1] {α}"))
        .with_item(CstData::new(4, "D2", CstType::Term).with_definition("F1[X1]"))
        .with_item(CstData::new(5, "D3", CstType::Term).with_definition("D1 ∪ X1"));
    let loaded = load(&schema);

    // X1 is free in D3, so D1 is not its only origin.
    assert_eq!(cst(&loaded, "D3").spawner, None);
    assert!(cst(&loaded, "D1").spawn.is_empty());
    // Bound as an argument, X1 leaves F1 as the origin of D2.
    assert_eq!(cst(&loaded, "D2").spawner, Some(cst(&loaded, "F1").id));
}

#[test]
fn function_application_is_spawned_by_function() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "F1", CstType::Function).with_definition("[α∈X1] {α}"))
        .with_item(CstData::new(3, "D2", CstType::Term).with_definition("F1[X1]"));
    let loaded = load(&schema);
    let f1 = cst(&loaded, "F1");
    let d2 = cst(&loaded, "D2");

    assert_eq!(d2.spawner, Some(f1.id));
    assert_eq!(d2.spawner_alias.as_ref().map(|a| a.as_str()), Some("F1"));
    assert_eq!(f1.spawn, vec![d2.id]);
    assert_eq!(f1.spawn_alias[0].as_str(), "D2");
    assert_eq!(f1.spawner, None);
}

#[test]
fn attribution_is_independent_of_dependencies() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "D1", CstType::Term).with_definition("ℬ(X1)"))
        .with_item(CstData::new(3, "D2", CstType::Term).with_definition("X1"))
        .with_attribution(2, 3);
    let loaded = load(&schema);
    let d1 = cst(&loaded, "D1");
    let d2 = cst(&loaded, "D2");

    assert!(loaded.attribution_graph().has_edge(d1.id, d2.id));
    assert_eq!(d1.attributes, vec![d2.id]);
    assert!(!loaded.graph().has_edge(d1.id, d2.id));
    assert!(!loaded.graph().has_edge(d2.id, d1.id));
}

#[test]
fn recursive_template_references_itself() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "F2", CstType::Function).with_definition("[α∈R1] F2[α]"))
        .with_item(CstData::new(3, "D1", CstType::Term).with_definition("F2[X1]"));
    let loaded = load(&schema);
    let f2 = cst(&loaded, "F2");
    let d1 = cst(&loaded, "D1");

    assert!(loaded.graph().has_edge(f2.id, f2.id));
    assert_eq!(loaded.graph().find_cycle(), Some(vec![f2.id, f2.id]));
    assert!(f2.is_template);
    assert_eq!(f2.cst_class, CstClass::Template);
    assert_eq!(f2.spawner, None);
    assert_ne!(f2.status, ExpressionStatus::Undefined);

    // The self-reference poisons the template and every application of it.
    assert!(!f2.is_simple_expression);
    assert!(!d1.is_simple_expression);
    assert_eq!(d1.spawner, None);
}

#[test]
fn spawn_chains_resolve_to_the_root() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "F1", CstType::Function).with_definition("[α∈ℬ(X1)] X1\\α"))
        .with_item(CstData::new(3, "D1", CstType::Term).with_definition("F1[X1]"))
        .with_item(CstData::new(4, "D2", CstType::Term).with_definition("D1"))
        .with_item(CstData::new(5, "D3", CstType::Term).with_definition("D2"));
    let loaded = load(&schema);
    let f1 = cst(&loaded, "F1");

    // D2 and D3 resolve through D1 to its spawner.
    for alias in ["D1", "D2", "D3"] {
        assert_eq!(cst(&loaded, alias).spawner, Some(f1.id), "{alias}");
    }
    assert_eq!(f1.spawn.len(), 3);
    assert_eq!(loaded.spawn_root(cst(&loaded, "D3").id).map(|c| c.id), Some(f1.id));
    assert_eq!(loaded.spawn_tree(f1.id).len(), 3);
}
