//! Semantic loader for Schemata concept schemas.
//!
//! This crate provides:
//! - [`SchemaLoader`] - Turns stored [`SchemaData`] into a [`LoadedSchema`]
//! - [`Graph`] - Arena graph over constituent ids, tolerant of cycles
//! - [`topological_order`] - Deterministic dependency ordering
//! - [`infer_attributes`] - Classes, templates, spawn relations, inheritance
//! - [`infer_status`] - Status derived from expression analysis
//!
//! Pipeline: lookup tables, dependency graph, dependency order, attribute
//! inference, expression verification, attribution graph.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribution;
pub mod config;
pub mod dependency;
pub mod graph;
pub mod inference;
pub mod inheritance;
pub mod loader;
pub mod lookup;
pub mod model;
pub mod sequence;
pub mod snapshot;
pub mod stats;
pub mod verify;

pub use attribution::build_attribution_graph;
pub use config::{IntegrityPolicy, LoaderConfig};
pub use dependency::build_dependency_graph;
pub use graph::{Graph, GraphNode};
pub use inference::{infer_attributes, visit_order};
pub use inheritance::InheritanceIndex;
pub use loader::SchemaLoader;
pub use lookup::{LookupTables, build_lookup};
pub use model::{AttributionRecord, Constituent, CstData, InheritanceRecord, SchemaData, TermForm};
pub use sequence::{respects_dependencies, topological_order};
pub use snapshot::LoadedSchema;
pub use stats::SchemaStats;
pub use verify::{infer_status, verify_expressions};
