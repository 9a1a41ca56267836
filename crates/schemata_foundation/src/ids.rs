//! Constituent identifiers and aliases.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::types::CstType;

/// Numeric constituent identifier, unique within a schema.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct CstId(pub u64);

impl CstId {
    /// Creates a new constituent ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for CstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CstId({})", self.0)
    }
}

impl fmt::Display for CstId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u64> for CstId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Identifier of a schema, used to resolve cross-schema inheritance records.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SchemaId(pub u64);

impl fmt::Display for SchemaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "schema {}", self.0)
    }
}

/// Typed short name of a constituent.
///
/// An alias is one uppercase prefix letter encoding the [`CstType`] followed
/// by a positive decimal index, e.g. `X1`, `D12`, `F3`.
///
/// Construction through [`Alias::parse`] validates the grammar. Stored data may
/// still carry malformed aliases, so [`Alias::new_unchecked`] exists for values
/// that only need to round-trip through lookups.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Alias(String);

impl Alias {
    /// Parses and validates an alias.
    ///
    /// # Errors
    /// Returns an error if the text is not a prefix letter followed by a positive index.
    pub fn parse(text: &str) -> Result<Self, Error> {
        if Self::is_valid(text) {
            Ok(Self(text.to_string()))
        } else {
            Err(Error::invalid_alias(text))
        }
    }

    /// Wraps text as an alias without validating it.
    #[must_use]
    pub fn new_unchecked(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Creates an alias from a type and index.
    #[must_use]
    pub fn from_parts(cst_type: CstType, index: u32) -> Self {
        Self(format!("{}{index}", cst_type.prefix()))
    }

    /// Returns true if the text matches the alias grammar.
    #[must_use]
    pub fn is_valid(text: &str) -> bool {
        let mut chars = text.chars();
        let Some(prefix) = chars.next() else {
            return false;
        };
        if CstType::from_prefix(prefix).is_none() {
            return false;
        }
        let digits = chars.as_str();
        !digits.is_empty()
            && digits.chars().all(|c| c.is_ascii_digit())
            && digits.parse::<u32>().is_ok_and(|n| n > 0)
    }

    /// Returns the alias text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the constituent type encoded by the prefix letter.
    #[must_use]
    pub fn cst_type(&self) -> Option<CstType> {
        self.0.chars().next().and_then(CstType::from_prefix)
    }

    /// Returns the numeric index following the prefix letter.
    #[must_use]
    pub fn index(&self) -> Option<u32> {
        let mut chars = self.0.chars();
        chars.next()?;
        chars.as_str().parse().ok()
    }
}

impl fmt::Debug for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Alias({})", self.0)
    }
}

impl fmt::Display for Alias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Alias {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Alias {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::borrow::Borrow<str> for Alias {
    fn borrow(&self) -> &str {
        &self.0
    }
}
