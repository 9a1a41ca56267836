//! Integration tests for Layer 2: Loader
//!
//! Tests for the dependency graph, ordering, attribute inference,
//! verification, and integrity handling.

mod inference;
mod ordering;
mod scenarios;
mod verification;

use schemata_foundation::CstId;
use schemata_loader::{Constituent, LoadedSchema, SchemaData, SchemaLoader};

pub fn load(schema: &SchemaData) -> LoadedSchema {
    SchemaLoader::new().load(schema).unwrap()
}

pub fn cst<'a>(schema: &'a LoadedSchema, alias: &str) -> &'a Constituent {
    schema
        .by_alias(alias)
        .unwrap_or_else(|| panic!("no constituent {alias}"))
}

pub fn id(raw: u64) -> CstId {
    CstId::new(raw)
}
