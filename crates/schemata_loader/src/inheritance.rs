//! Cross-schema inheritance flags.

use std::collections::HashMap;

use schemata_foundation::{CstId, SchemaId};

use crate::lookup::LookupTables;
use crate::model::{Constituent, InheritanceRecord};

/// Inheritance records indexed for one schema.
#[derive(Clone, Debug, Default)]
pub struct InheritanceIndex {
    /// Child id → parent schema, first record wins.
    parent_schema: HashMap<CstId, SchemaId>,
    /// Distinct parent schemas in first-occurrence order.
    parent_order: Vec<SchemaId>,
    /// Ids in this schema that other schemas inherit.
    parents: Vec<CstId>,
}

impl InheritanceIndex {
    /// Indexes the records relevant to `schema`.
    #[must_use]
    pub fn new(schema: SchemaId, records: &[InheritanceRecord]) -> Self {
        let mut index = Self::default();
        for record in records {
            if record.child_source == schema {
                index
                    .parent_schema
                    .entry(record.child)
                    .or_insert(record.parent_source);
                if !index.parent_order.contains(&record.parent_source) {
                    index.parent_order.push(record.parent_source);
                }
            }
            if record.parent_source == schema && !index.parents.contains(&record.parent) {
                index.parents.push(record.parent);
            }
        }
        index
    }

    /// Returns the schema `child` was inherited from.
    #[must_use]
    pub fn parent_schema(&self, child: CstId) -> Option<SchemaId> {
        self.parent_schema.get(&child).copied()
    }

    /// Returns the 1-based index of `schema` among the parent schemas, or 0.
    #[must_use]
    pub fn parent_schema_index(&self, schema: SchemaId) -> usize {
        self.parent_order
            .iter()
            .position(|s| *s == schema)
            .map_or(0, |i| i + 1)
    }

    /// Returns true if another schema inherits `id`.
    #[must_use]
    pub fn has_children(&self, id: CstId) -> bool {
        self.parents.contains(&id)
    }

    /// Writes the inheritance fields of `cst`.
    pub fn apply(&self, cst: &mut Constituent) {
        cst.parent_schema = self.parent_schema(cst.id);
        cst.parent_schema_index = cst
            .parent_schema
            .map_or(0, |schema| self.parent_schema_index(schema));
        cst.is_inherited = cst.parent_schema.is_some();
        cst.has_inherited_children = self.has_children(cst.id);
    }
}

/// Fills the inheritance fields of every item. Records naming ids absent
/// from the schema are skipped.
pub fn apply_inheritance(
    schema: SchemaId,
    records: &[InheritanceRecord],
    lookup: &LookupTables,
    items: &mut [Constituent],
) {
    let known: Vec<InheritanceRecord> = records
        .iter()
        .filter(|record| {
            let local = if record.child_source == schema {
                record.child
            } else if record.parent_source == schema {
                record.parent
            } else {
                return false;
            };
            let found = lookup.position_of_id(local).is_some();
            if !found {
                tracing::debug!(id = %local, "inheritance record for unknown constituent");
            }
            found
        })
        .copied()
        .collect();
    let index = InheritanceIndex::new(schema, &known);
    for cst in items.iter_mut() {
        index.apply(cst);
    }
}
