//! Cross-layer integration tests for Schemata
//!
//! Tests that verify correct interaction between multiple crates.

mod files;
mod sessions;
