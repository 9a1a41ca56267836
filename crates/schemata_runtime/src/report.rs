//! Plain-text rendering of loaded schemas.

use std::fmt::Write;

use schemata_foundation::CstId;
use schemata_loader::{Constituent, LoadedSchema};

/// Returns the alias of `id`, or its numeric form when it is unknown.
fn alias_of(schema: &LoadedSchema, id: CstId) -> String {
    schema
        .by_id(id)
        .map_or_else(|| id.to_string(), |cst| cst.alias.to_string())
}

fn aliases(schema: &LoadedSchema, ids: &[CstId]) -> String {
    if ids.is_empty() {
        return "-".to_string();
    }
    ids.iter()
        .map(|&id| alias_of(schema, id))
        .collect::<Vec<_>>()
        .join(", ")
}

/// One-line summary: alias, type, status and definition.
#[must_use]
pub fn summary_line(cst: &Constituent) -> String {
    format!(
        "{:<6} {:<10} {:<12} {}",
        cst.alias.as_str(),
        cst.cst_type.name(),
        cst.status.to_string(),
        cst.definition_formal
    )
}

/// Full description of one constituent.
#[must_use]
pub fn describe(schema: &LoadedSchema, cst: &Constituent) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} ({}, {})", cst.alias, cst.cst_type, cst.cst_class);
    let _ = writeln!(out, "  id:          {}", cst.id);
    let _ = writeln!(out, "  status:      {}", cst.status);
    if !cst.definition_formal.is_empty() {
        let _ = writeln!(out, "  definition:  {}", cst.definition_formal);
    }
    if let Some(analysis) = &cst.analysis {
        if !analysis.typification.is_empty() {
            let _ = writeln!(out, "  type:        {}", analysis.typification);
        }
        for error in &analysis.errors {
            let _ = writeln!(out, "  error at {}: {}", error.position, error.message);
        }
    }
    if !cst.term_raw.is_empty() {
        let _ = writeln!(out, "  term:        {}", cst.term_raw);
    }
    if !cst.convention.is_empty() {
        let _ = writeln!(out, "  convention:  {}", cst.convention);
    }
    let _ = writeln!(
        out,
        "  template:    {}  simple: {}",
        cst.is_template, cst.is_simple_expression
    );
    if let Some(spawner) = &cst.spawner_alias {
        let _ = writeln!(out, "  spawner:     {spawner}");
    }
    if !cst.spawn.is_empty() {
        let _ = writeln!(out, "  spawn:       {}", aliases(schema, &cst.spawn));
    }
    if let Some(parent) = cst.parent_schema {
        let _ = writeln!(out, "  inherited:   from {parent} (#{})", cst.parent_schema_index);
    }
    if cst.has_inherited_children {
        let _ = writeln!(out, "  inherited by other schemas");
    }
    if !cst.attributes.is_empty() {
        let _ = writeln!(out, "  attributes:  {}", aliases(schema, &cst.attributes));
    }
    out
}

/// Aliases in dependency order.
#[must_use]
pub fn order_listing(schema: &LoadedSchema) -> String {
    aliases(schema, schema.topological_order())
}

/// Integrity issues, one per line.
#[must_use]
pub fn issues_listing(schema: &LoadedSchema) -> String {
    let lines: Vec<String> = schema.issues().map(ToString::to_string).collect();
    if lines.is_empty() {
        "no integrity issues".to_string()
    } else {
        lines.join("\n")
    }
}

/// Batch report: header, statistics, issues and every constituent in
/// dependency order.
#[must_use]
pub fn batch_report(schema: &LoadedSchema) -> String {
    let mut out = String::new();
    let title = if schema.title.is_empty() {
        "untitled"
    } else {
        schema.title.as_str()
    };
    let _ = writeln!(out, "{} ({})", title, schema.id);
    if let Some(version) = &schema.version {
        let _ = writeln!(out, "version {version}");
    }
    let _ = writeln!(out);
    let _ = write!(out, "{}", schema.stats());
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", issues_listing(schema));
    let _ = writeln!(out);
    for &id in schema.topological_order() {
        if let Some(cst) = schema.by_id(id) {
            let _ = writeln!(out, "{}", summary_line(cst));
        }
    }
    out
}
