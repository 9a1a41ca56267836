//! Constituent kinds and derived classifications.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stored kind of a constituent.
///
/// Each kind owns exactly one alias prefix letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CstType {
    /// Undefined notion carrying no computable value (`N`).
    Nominal,
    /// Base set (`X`).
    Base,
    /// Constant set (`C`).
    Constant,
    /// Structure domain (`S`).
    Structured,
    /// Term (`D`).
    Term,
    /// Parametrized term (`F`).
    Function,
    /// Parametrized statement (`P`).
    Predicate,
    /// Axiom (`A`).
    Axiom,
    /// Theorem (`T`).
    Theorem,
}

impl CstType {
    /// Every constituent type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Nominal,
        Self::Base,
        Self::Constant,
        Self::Structured,
        Self::Term,
        Self::Function,
        Self::Predicate,
        Self::Axiom,
        Self::Theorem,
    ];

    /// Returns the alias prefix letter for this type.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Nominal => 'N',
            Self::Base => 'X',
            Self::Constant => 'C',
            Self::Structured => 'S',
            Self::Term => 'D',
            Self::Function => 'F',
            Self::Predicate => 'P',
            Self::Axiom => 'A',
            Self::Theorem => 'T',
        }
    }

    /// Returns the type owning the given alias prefix letter.
    #[must_use]
    pub const fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'N' => Some(Self::Nominal),
            'X' => Some(Self::Base),
            'C' => Some(Self::Constant),
            'S' => Some(Self::Structured),
            'D' => Some(Self::Term),
            'F' => Some(Self::Function),
            'P' => Some(Self::Predicate),
            'A' => Some(Self::Axiom),
            'T' => Some(Self::Theorem),
            _ => None,
        }
    }

    /// Returns true for base and constant sets.
    #[must_use]
    pub const fn is_base_set(self) -> bool {
        matches!(self, Self::Base | Self::Constant)
    }

    /// Returns true for parametrized types (functions and predicates).
    #[must_use]
    pub const fn is_functional(self) -> bool {
        matches!(self, Self::Function | Self::Predicate)
    }

    /// Returns true for types whose definition is a logical statement.
    #[must_use]
    pub const fn is_logical(self) -> bool {
        matches!(self, Self::Predicate | Self::Axiom | Self::Theorem)
    }

    /// Returns the class a non-template constituent of this type belongs to.
    #[must_use]
    pub const fn base_class(self) -> CstClass {
        match self {
            Self::Nominal => CstClass::Nominal,
            Self::Base | Self::Constant | Self::Structured => CstClass::Basic,
            Self::Term | Self::Function | Self::Predicate => CstClass::Derived,
            Self::Axiom | Self::Theorem => CstClass::Statement,
        }
    }

    /// Returns a human-readable name for this type.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Base => "base",
            Self::Constant => "constant",
            Self::Structured => "structured",
            Self::Term => "term",
            Self::Function => "function",
            Self::Predicate => "predicate",
            Self::Axiom => "axiom",
            Self::Theorem => "theorem",
        }
    }
}

impl fmt::Display for CstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Derived semantic class of a constituent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CstClass {
    /// Nominal notions.
    #[default]
    Nominal,
    /// Base sets, constant sets and structures.
    Basic,
    /// Terms, functions and predicates.
    Derived,
    /// Axioms and theorems.
    Statement,
    /// Any constituent whose definition contains a template marker.
    Template,
}

impl fmt::Display for CstClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Nominal => "nominal",
            Self::Basic => "basic",
            Self::Derived => "derived",
            Self::Statement => "statement",
            Self::Template => "template",
        };
        f.write_str(name)
    }
}

/// Value class reported by the expression analyzer.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ValueClass {
    /// The expression denotes a computable value.
    Value,
    /// The expression denotes a property (not enumerable).
    Property,
}

/// Verification status of a constituent's formal definition.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExpressionStatus {
    /// Not yet verified.
    #[default]
    Undefined,
    /// Verification does not apply (nominal constituents).
    Unknown,
    /// The expression failed analysis.
    Incorrect,
    /// The expression is valid but its value cannot be computed.
    Incalculable,
    /// The expression denotes a property.
    Property,
    /// The expression is valid and computable.
    Verified,
}

impl fmt::Display for ExpressionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Undefined => "undefined",
            Self::Unknown => "unknown",
            Self::Incorrect => "incorrect",
            Self::Incalculable => "incalculable",
            Self::Property => "property",
            Self::Verified => "verified",
        };
        f.write_str(name)
    }
}
