//! Schemata - Semantic loader for concept schemas
//!
//! This crate re-exports all layers of the Schemata system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: schemata_runtime    — CLI, REPL, schema files
//! Layer 2: schemata_loader     — Graphs, ordering, attribute inference
//! Layer 1: schemata_language   — Lexer, reference extraction, analysis
//! Layer 0: schemata_foundation — Core types (CstId, Alias, Error)
//! ```

pub use schemata_foundation as foundation;
pub use schemata_language as language;
pub use schemata_loader as loader;
pub use schemata_runtime as runtime;
