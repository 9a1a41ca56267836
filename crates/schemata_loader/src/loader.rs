//! The schema loader.

use schemata_foundation::{Error, ErrorContext, Result};
use schemata_language::{ExpressionAnalyzer, SyntaxAnalyzer};

use crate::attribution::build_attribution_graph;
use crate::config::{IntegrityPolicy, LoaderConfig};
use crate::dependency::build_dependency_graph;
use crate::inference::{infer_attributes, visit_order};
use crate::lookup::build_lookup;
use crate::model::SchemaData;
use crate::snapshot::{LoadedSchema, SnapshotParts};
use crate::verify::{skip_verification, verify_expressions};

/// Turns stored schema data into a [`LoadedSchema`].
///
/// Loading is a pure function of the input: every call builds fresh
/// tables and graphs, and nothing is kept between calls.
///
/// # Example
///
/// ```
/// use schemata_foundation::{CstId, CstType};
/// use schemata_loader::{CstData, SchemaData, SchemaLoader};
///
/// let schema = SchemaData::new(1)
///     .with_item(CstData::new(1, "X1", CstType::Base))
///     .with_item(CstData::new(2, "D1", CstType::Term).with_definition("X1"));
///
/// let loaded = SchemaLoader::new().load(&schema).unwrap();
/// let d1 = loaded.by_alias("D1").unwrap();
/// assert!(d1.is_simple_expression);
/// assert!(loaded.graph().has_edge(CstId::new(1), CstId::new(2)));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SchemaLoader<A = SyntaxAnalyzer> {
    analyzer: A,
    config: LoaderConfig,
}

impl SchemaLoader<SyntaxAnalyzer> {
    /// Creates a loader using the bundled syntax analyzer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<A: ExpressionAnalyzer> SchemaLoader<A> {
    /// Creates a loader using the given analyzer.
    #[must_use]
    pub fn with_analyzer(analyzer: A) -> Self {
        Self {
            analyzer,
            config: LoaderConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Returns the analyzer.
    #[must_use]
    pub fn analyzer(&self) -> &A {
        &self.analyzer
    }

    /// Loads a schema.
    ///
    /// # Errors
    /// Returns [`schemata_foundation::ErrorKind::Integrity`] when the schema
    /// has duplicate ids or aliases and the policy is
    /// [`IntegrityPolicy::Reject`]. Under the default policy loading never
    /// fails.
    pub fn load(&self, schema: &SchemaData) -> Result<LoadedSchema> {
        let span = tracing::debug_span!("load", schema = schema.id.0, items = schema.items.len());
        let _guard = span.enter();

        let lookup = build_lookup(&schema.items);
        if !lookup.is_consistent() && self.config.integrity == IntegrityPolicy::Reject {
            return Err(Error::integrity(lookup.issues).with_context(
                ErrorContext::new()
                    .with_source(schema.id.to_string())
                    .with_frame("build_lookup"),
            ));
        }

        let graph =
            build_dependency_graph(&schema.items, &lookup, self.config.log_dangling_references);
        if let Some(cycle) = graph.find_cycle() {
            tracing::debug!(?cycle, "dependency cycle");
        }
        let order = graph.topological_order();
        let visit = visit_order(&graph, &lookup, schema.items.len());

        let mut items = infer_attributes(schema, &lookup, &graph, &visit);
        if self.config.verify_expressions {
            verify_expressions(&mut items, &visit, &self.analyzer);
        } else {
            skip_verification(&mut items);
        }
        let attribution_graph =
            build_attribution_graph(&schema.items, &schema.attribution, &lookup, &mut items);

        tracing::debug!(
            edges = graph.edge_count(),
            attributions = attribution_graph.edge_count(),
            issues = lookup.issues.len(),
            "schema loaded"
        );
        Ok(LoadedSchema::assemble(SnapshotParts {
            id: schema.id,
            version: schema.version.clone(),
            title: schema.title.clone(),
            items,
            graph,
            attribution_graph,
            order,
            issues: lookup.issues,
        }))
    }
}
