//! Core identifiers, constituent kinds, and error types for Schemata.
//!
//! This crate provides:
//! - [`CstId`] - Numeric constituent identifiers
//! - [`Alias`] - Typed constituent aliases (`X1`, `D12`, `F3`, ...)
//! - [`CstType`], [`CstClass`], [`ValueClass`], [`ExpressionStatus`] - Constituent kinds
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod types;

pub use error::{Error, ErrorContext, ErrorKind, IntegrityIssue, Result};
pub use ids::{Alias, CstId, SchemaId};
pub use types::{CstClass, CstType, ExpressionStatus, ValueClass};
