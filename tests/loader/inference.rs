//! Integration tests for derived attributes

use schemata_foundation::{CstClass, CstType, SchemaId};
use schemata_loader::{CstData, InheritanceRecord, SchemaData};

use crate::{cst, id, load};

fn inherit(child: u64, parent: u64, child_source: u64, parent_source: u64) -> InheritanceRecord {
    InheritanceRecord {
        child: id(child),
        parent: id(parent),
        child_source: SchemaId(child_source),
        parent_source: SchemaId(parent_source),
    }
}

#[test]
fn classes_by_type_and_template_marker() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "N1", CstType::Nominal))
        .with_item(CstData::new(2, "X1", CstType::Base))
        .with_item(CstData::new(3, "S1", CstType::Structured).with_definition("ℬ(X1)"))
        .with_item(CstData::new(4, "D1", CstType::Term).with_definition("Pr1(S1)"))
        .with_item(CstData::new(5, "A1", CstType::Axiom).with_definition("D1⊆X1"))
        .with_item(CstData::new(6, "P1", CstType::Predicate).with_definition("[α∈R1] α⊆X1"));
    let loaded = load(&schema);

    let classes: Vec<CstClass> = loaded.items().map(|c| c.cst_class).collect();
    assert_eq!(
        classes,
        vec![
            CstClass::Nominal,
            CstClass::Basic,
            CstClass::Basic,
            CstClass::Derived,
            CstClass::Statement,
            CstClass::Template,
        ]
    );
}

#[test]
fn base_sets_and_structures_are_never_simple() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "C1", CstType::Constant))
        .with_item(CstData::new(3, "S1", CstType::Structured).with_definition("X1"))
        .with_item(CstData::new(4, "D1", CstType::Term).with_definition("S1"));
    let loaded = load(&schema);

    assert!(!cst(&loaded, "X1").is_simple_expression);
    assert!(!cst(&loaded, "C1").is_simple_expression);
    assert!(!cst(&loaded, "S1").is_simple_expression);
    assert_eq!(cst(&loaded, "S1").spawner, None);
    // A structure is an ordinary origin for what references it.
    assert_eq!(cst(&loaded, "D1").spawner, Some(id(3)));
}

#[test]
fn predicate_head_names_the_origin() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "D1", CstType::Term).with_definition("ℬ(X1)"))
        .with_item(CstData::new(3, "P1", CstType::Predicate).with_definition("[α∈D1] α=α"));
    let loaded = load(&schema);

    let p1 = cst(&loaded, "P1");
    assert!(p1.is_simple_expression);
    assert_eq!(p1.spawner, Some(id(2)));
    assert_eq!(cst(&loaded, "D1").spawn, vec![id(3)]);
}

#[test]
fn inheritance_flags_from_records() {
    let schema = SchemaData::new(10)
        .with_item(CstData::new(1, "X1", CstType::Base))
        .with_item(CstData::new(2, "X2", CstType::Base))
        .with_item(CstData::new(3, "D1", CstType::Term).with_definition("X1×X2"))
        .with_inheritance(inherit(1, 100, 10, 20))
        .with_inheritance(inherit(2, 200, 10, 30))
        .with_inheritance(inherit(400, 3, 40, 10))
        .with_inheritance(inherit(99, 500, 10, 20));
    let loaded = load(&schema);

    let x1 = cst(&loaded, "X1");
    assert!(x1.is_inherited);
    assert_eq!(x1.parent_schema, Some(SchemaId(20)));
    assert_eq!(x1.parent_schema_index, 1);

    let x2 = cst(&loaded, "X2");
    assert_eq!(x2.parent_schema, Some(SchemaId(30)));
    assert_eq!(x2.parent_schema_index, 2);

    let d1 = cst(&loaded, "D1");
    assert!(!d1.is_inherited);
    assert_eq!(d1.parent_schema_index, 0);
    assert!(d1.has_inherited_children);

    assert_eq!(loaded.stats().count_inherited, 2);
}

#[test]
fn statistics_count_types_and_texts() {
    let schema = SchemaData::new(1)
        .with_item(CstData::new(1, "X1", CstType::Base).with_term("points"))
        .with_item(CstData::new(2, "X2", CstType::Base).with_convention("lines"))
        .with_item(CstData::new(3, "D1", CstType::Term).with_definition("ℬ(X1)"))
        .with_item(CstData::new(4, "D2", CstType::Term).with_definition("X1∪X2"));
    let stats = load(&schema).stats().clone();

    assert_eq!(stats.count_all, 4);
    assert_eq!(stats.count_of(CstType::Base), 2);
    assert_eq!(stats.count_of(CstType::Term), 2);
    assert_eq!(stats.count_of(CstType::Axiom), 0);
    assert_eq!(stats.count_text_term, 1);
    assert_eq!(stats.count_convention, 1);
    assert_eq!(stats.count_definition, 2);
}
