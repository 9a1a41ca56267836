//! Integration tests for Layer 0: Foundation
//!
//! Tests for core types: CstId, Alias, constituent kinds, and Error.

mod aliases;
mod errors;
