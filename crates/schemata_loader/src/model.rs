//! Schema data model.
//!
//! [`SchemaData`] is the stored representation handed to the loader.
//! [`Constituent`] carries the stored fields plus every field the loader derives.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use schemata_foundation::{Alias, CstClass, CstId, CstType, ExpressionStatus, SchemaId};
use schemata_language::AnalysisResult;

/// A natural-language form of a constituent's term.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TermForm {
    /// Inflected text.
    pub text: String,
    /// Grammeme tags describing the form.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Vec<String>,
}

/// Stored fields of a constituent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CstData {
    /// Unique id within the schema.
    pub id: CstId,
    /// Unique alias within the schema.
    pub alias: Alias,
    /// Stored kind.
    pub cst_type: CstType,
    /// Formal definition text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub definition_formal: String,
    /// Raw term text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub term_raw: String,
    /// Convention or comment.
    #[cfg_attr(feature = "serde", serde(default))]
    pub convention: String,
    /// Natural-language forms of the term.
    #[cfg_attr(feature = "serde", serde(default))]
    pub term_forms: Vec<TermForm>,
}

impl CstData {
    /// Creates stored data with an empty definition.
    #[must_use]
    pub fn new(id: u64, alias: &str, cst_type: CstType) -> Self {
        Self {
            id: CstId::new(id),
            alias: Alias::new_unchecked(alias),
            cst_type,
            definition_formal: String::new(),
            term_raw: String::new(),
            convention: String::new(),
            term_forms: Vec::new(),
        }
    }

    /// Sets the formal definition.
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition_formal = definition.into();
        self
    }

    /// Sets the raw term.
    #[must_use]
    pub fn with_term(mut self, term: impl Into<String>) -> Self {
        self.term_raw = term.into();
        self
    }

    /// Sets the convention.
    #[must_use]
    pub fn with_convention(mut self, convention: impl Into<String>) -> Self {
        self.convention = convention.into();
        self
    }
}

/// Cross-schema provenance: `child` in `child_source` is a propagated copy
/// of `parent` in `parent_source`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InheritanceRecord {
    /// The inheriting constituent.
    pub child: CstId,
    /// The original constituent.
    pub parent: CstId,
    /// Schema holding `child`.
    pub child_source: SchemaId,
    /// Schema holding `parent`.
    pub parent_source: SchemaId,
}

/// Explicit association of `attribute` to `container`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AttributionRecord {
    /// The constituent receiving the attribute.
    pub container: CstId,
    /// The attributed constituent.
    pub attribute: CstId,
}

/// Stored schema snapshot handed to the loader.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchemaData {
    /// Schema identifier.
    pub id: SchemaId,
    /// Version tag; `None` for the current version.
    #[cfg_attr(feature = "serde", serde(default))]
    pub version: Option<String>,
    /// Human-readable title.
    #[cfg_attr(feature = "serde", serde(default))]
    pub title: String,
    /// Ordered constituents.
    pub items: Vec<CstData>,
    /// Inheritance records touching this schema.
    #[cfg_attr(feature = "serde", serde(default))]
    pub inheritance: Vec<InheritanceRecord>,
    /// Attribution records.
    #[cfg_attr(feature = "serde", serde(default))]
    pub attribution: Vec<AttributionRecord>,
}

impl SchemaData {
    /// Creates an empty schema with the given id.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            id: SchemaId(id),
            ..Self::default()
        }
    }

    /// Appends a constituent.
    #[must_use]
    pub fn with_item(mut self, item: CstData) -> Self {
        self.items.push(item);
        self
    }

    /// Appends an attribution record.
    #[must_use]
    pub fn with_attribution(mut self, container: u64, attribute: u64) -> Self {
        self.attribution.push(AttributionRecord {
            container: CstId::new(container),
            attribute: CstId::new(attribute),
        });
        self
    }

    /// Appends an inheritance record.
    #[must_use]
    pub fn with_inheritance(mut self, record: InheritanceRecord) -> Self {
        self.inheritance.push(record);
        self
    }
}

/// A constituent with every derived field populated by the loader.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Constituent {
    // Stored fields
    /// Unique id within the schema.
    pub id: CstId,
    /// Unique alias within the schema.
    pub alias: Alias,
    /// Stored kind.
    pub cst_type: CstType,
    /// Formal definition text.
    pub definition_formal: String,
    /// Raw term text.
    pub term_raw: String,
    /// Convention or comment.
    pub convention: String,
    /// Natural-language forms of the term.
    pub term_forms: Vec<TermForm>,

    // Derived fields
    /// Semantic class.
    pub cst_class: CstClass,
    /// Whether the definition contains a template radical.
    pub is_template: bool,
    /// Whether the definition is a bare reference rather than a combinator expression.
    pub is_simple_expression: bool,
    /// Constituent this one was instantiated from.
    pub spawner: Option<CstId>,
    /// Alias of [`Self::spawner`].
    pub spawner_alias: Option<Alias>,
    /// Constituents instantiated from this one.
    pub spawn: Vec<CstId>,
    /// Aliases of [`Self::spawn`].
    pub spawn_alias: Vec<Alias>,
    /// Schema this constituent was inherited from.
    pub parent_schema: Option<SchemaId>,
    /// 1-based index of [`Self::parent_schema`] among this schema's parents; 0 if not inherited.
    pub parent_schema_index: usize,
    /// Whether this constituent is inherited from another schema.
    pub is_inherited: bool,
    /// Whether other schemas inherit this constituent.
    pub has_inherited_children: bool,
    /// Constituents attributed to this one.
    pub attributes: Vec<CstId>,
    /// Raw analyzer result.
    pub analysis: Option<AnalysisResult>,
    /// Status derived from [`Self::analysis`].
    pub status: ExpressionStatus,
}

impl Constituent {
    /// Creates a constituent from stored data with derived fields reset.
    #[must_use]
    pub fn from_data(data: &CstData) -> Self {
        Self {
            id: data.id,
            alias: data.alias.clone(),
            cst_type: data.cst_type,
            definition_formal: data.definition_formal.clone(),
            term_raw: data.term_raw.clone(),
            convention: data.convention.clone(),
            term_forms: data.term_forms.clone(),
            cst_class: data.cst_type.base_class(),
            is_template: false,
            is_simple_expression: false,
            spawner: None,
            spawner_alias: None,
            spawn: Vec::new(),
            spawn_alias: Vec::new(),
            parent_schema: None,
            parent_schema_index: 0,
            is_inherited: false,
            has_inherited_children: false,
            attributes: Vec::new(),
            analysis: None,
            status: ExpressionStatus::Undefined,
        }
    }

    /// Returns true if this constituent is a template that reduces to a
    /// bare reference.
    #[must_use]
    pub const fn is_collapsed_template(&self) -> bool {
        self.is_template && self.is_simple_expression
    }

    /// Returns the constituent this one ultimately resolves to:
    /// its spawner if it has one, otherwise itself.
    #[must_use]
    pub fn resolved_root(&self) -> CstId {
        self.spawner.unwrap_or(self.id)
    }
}
