//! Loader configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// What the loader does when the input violates identity invariants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum IntegrityPolicy {
    /// Keep the first occurrence and report the rest on the snapshot.
    #[default]
    Report,
    /// Fail the load with [`schemata_foundation::ErrorKind::Integrity`].
    Reject,
}

/// Configuration for a [`crate::SchemaLoader`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoaderConfig {
    /// Handling of duplicate ids and aliases.
    pub integrity: IntegrityPolicy,

    /// Whether expressions are checked by the analyzer.
    /// When false every status stays `Undefined` (Nominal stays `Unknown`).
    pub verify_expressions: bool,

    /// Emit a trace event for every reference that does not resolve.
    pub log_dangling_references: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            integrity: IntegrityPolicy::Report,
            verify_expressions: true,
            log_dangling_references: true,
        }
    }
}

impl LoaderConfig {
    /// Creates a configuration that rejects schemas with duplicate keys.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            integrity: IntegrityPolicy::Reject,
            ..Self::default()
        }
    }

    /// Creates a configuration that only rebuilds structure: no analyzer
    /// calls and no dangling-reference events.
    #[must_use]
    pub fn lenient() -> Self {
        Self {
            integrity: IntegrityPolicy::Report,
            verify_expressions: false,
            log_dangling_references: false,
        }
    }

    /// Builder method to set the integrity policy.
    #[must_use]
    pub fn with_integrity(mut self, policy: IntegrityPolicy) -> Self {
        self.integrity = policy;
        self
    }

    /// Builder method to enable/disable the verifier.
    #[must_use]
    pub fn with_verify_expressions(mut self, verify: bool) -> Self {
        self.verify_expressions = verify;
        self
    }

    /// Builder method to enable/disable dangling-reference events.
    #[must_use]
    pub fn with_log_dangling_references(mut self, log: bool) -> Self {
        self.log_dangling_references = log;
        self
    }
}
