//! Schema statistics.

use std::collections::BTreeMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use schemata_foundation::{CstType, ExpressionStatus};

use crate::model::Constituent;

/// Aggregate counts over a loaded schema.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SchemaStats {
    /// Number of constituents.
    pub count_all: usize,
    /// Constituents with an incorrect expression.
    pub count_errors: usize,
    /// Constituents whose expression is a property.
    pub count_property: usize,
    /// Constituents whose value cannot be computed.
    pub count_incalculable: usize,
    /// Constituents inherited from another schema.
    pub count_inherited: usize,
    /// Constituents with a non-empty term.
    pub count_text_term: usize,
    /// Constituents with a non-empty formal definition.
    pub count_definition: usize,
    /// Constituents with a non-empty convention.
    pub count_convention: usize,
    /// Constituents per type.
    pub by_type: BTreeMap<CstType, usize>,
}

impl SchemaStats {
    /// Computes statistics over `items`.
    #[must_use]
    pub fn collect<'a>(items: impl IntoIterator<Item = &'a Constituent>) -> Self {
        let mut stats = Self::default();
        for cst in items {
            stats.count_all += 1;
            match cst.status {
                ExpressionStatus::Incorrect => stats.count_errors += 1,
                ExpressionStatus::Property => stats.count_property += 1,
                ExpressionStatus::Incalculable => stats.count_incalculable += 1,
                _ => {}
            }
            stats.count_inherited += usize::from(cst.is_inherited);
            stats.count_text_term += usize::from(!cst.term_raw.trim().is_empty());
            stats.count_definition += usize::from(!cst.definition_formal.trim().is_empty());
            stats.count_convention += usize::from(!cst.convention.trim().is_empty());
            *stats.by_type.entry(cst.cst_type).or_default() += 1;
        }
        stats
    }

    /// Returns the number of constituents of the given type.
    #[must_use]
    pub fn count_of(&self, cst_type: CstType) -> usize {
        self.by_type.get(&cst_type).copied().unwrap_or(0)
    }
}

impl fmt::Display for SchemaStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "constituents: {}", self.count_all)?;
        writeln!(f, "  errors:       {}", self.count_errors)?;
        writeln!(f, "  properties:   {}", self.count_property)?;
        writeln!(f, "  incalculable: {}", self.count_incalculable)?;
        writeln!(f, "  inherited:    {}", self.count_inherited)?;
        writeln!(f, "  with term:    {}", self.count_text_term)?;
        writeln!(f, "  with formal:  {}", self.count_definition)?;
        writeln!(f, "  with comment: {}", self.count_convention)?;
        for (cst_type, count) in &self.by_type {
            writeln!(f, "  {:<12}  {count}", format!("{}:", cst_type.name()))?;
        }
        Ok(())
    }
}
