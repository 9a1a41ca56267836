//! Error types for the Schemata system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids::{Alias, CstId};

/// Convenience alias for results carrying a Schemata [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Schemata operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an invalid alias error.
    #[must_use]
    pub fn invalid_alias(text: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidAlias(text.into()))
    }

    /// Creates an unknown constituent error.
    #[must_use]
    pub fn unknown_constituent(reference: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownConstituent(reference.into()))
    }

    /// Creates an integrity error from the detected issues.
    #[must_use]
    pub fn integrity(issues: Vec<IntegrityIssue>) -> Self {
        Self::new(ErrorKind::Integrity(issues))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Text does not follow the alias grammar.
    #[error("invalid alias: {0:?}")]
    InvalidAlias(String),

    /// A referenced constituent is not part of the schema.
    #[error("unknown constituent: {0}")]
    UnknownConstituent(String),

    /// The input schema violates identity invariants.
    #[error("schema integrity violated: {}", format_issues(.0))]
    Integrity(Vec<IntegrityIssue>),

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// File system access failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

fn format_issues(issues: &[IntegrityIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A data-integrity problem detected while indexing a schema.
///
/// The first occurrence of a duplicated key stays in the lookup tables;
/// later occurrences are reported here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "issue", rename_all = "snake_case"))]
pub enum IntegrityIssue {
    /// Two items share the same numeric id.
    DuplicateId {
        /// The shared id.
        id: CstId,
        /// Position of the item kept in the lookup table.
        first: usize,
        /// Position of the shadowed item.
        duplicate: usize,
    },
    /// Two items share the same alias.
    DuplicateAlias {
        /// The shared alias.
        alias: Alias,
        /// Position of the item kept in the lookup table.
        first: usize,
        /// Position of the shadowed item.
        duplicate: usize,
    },
}

impl fmt::Display for IntegrityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId {
                id,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate id {id} at position {duplicate} (first at {first})"
            ),
            Self::DuplicateAlias {
                alias,
                first,
                duplicate,
            } => write!(
                f,
                "duplicate alias {alias} at position {duplicate} (first at {first})"
            ),
        }
    }
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Schema or file the error relates to.
    pub source: Option<String>,
    /// Constituent alias the error relates to.
    pub alias: Option<String>,
    /// Chain of operations that led to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source name.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the constituent alias.
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "in {source}")?;
        }
        if let Some(alias) = &self.alias {
            write!(f, " at {alias}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
