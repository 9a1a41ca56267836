//! Session state for the CLI and REPL.
//!
//! A session owns the loaded snapshot and remembers where it came from so
//! it can be reloaded from scratch after the file changes.

use std::path::{Path, PathBuf};

use schemata_foundation::{Error, ErrorKind, Result};
use schemata_loader::{Constituent, LoadedSchema, LoaderConfig, SchemaData, SchemaLoader};

use crate::serialize::load_schema;

/// A loaded schema and its origin.
pub struct Session {
    /// File the schema was read from, if any.
    path: Option<PathBuf>,

    /// Loader used for the initial load and every reload.
    loader: SchemaLoader,

    /// The current snapshot.
    schema: LoadedSchema,
}

impl Session {
    /// Reads and loads a schema file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the load is rejected.
    pub fn open<P: AsRef<Path>>(path: P, config: LoaderConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let loader = SchemaLoader::new().with_config(config);
        let schema = loader.load(&load_schema(&path)?)?;
        Ok(Self {
            path: Some(path),
            loader,
            schema,
        })
    }

    /// Loads schema data that is already in memory.
    ///
    /// # Errors
    ///
    /// Returns an error if the load is rejected.
    pub fn from_data(data: &SchemaData, config: LoaderConfig) -> Result<Self> {
        let loader = SchemaLoader::new().with_config(config);
        let schema = loader.load(data)?;
        Ok(Self {
            path: None,
            loader,
            schema,
        })
    }

    /// Re-reads the file and replaces the snapshot. On failure the previous
    /// snapshot stays in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the session has no file, the file cannot be
    /// read, or the load is rejected.
    pub fn reload(&mut self) -> Result<()> {
        let Some(path) = &self.path else {
            return Err(Error::new(ErrorKind::IoError(
                "session was not loaded from a file".to_string(),
            )));
        };
        let schema = self.loader.load(&load_schema(path)?)?;
        tracing::info!(path = %path.display(), items = schema.len(), "schema reloaded");
        self.schema = schema;
        Ok(())
    }

    /// Returns the current snapshot.
    #[must_use]
    pub const fn schema(&self) -> &LoadedSchema {
        &self.schema
    }

    /// Returns the file the schema was read from.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns the loader configuration.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        self.loader.config()
    }

    /// Resolves an alias in the current snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error if no constituent has that alias.
    pub fn resolve(&self, alias: &str) -> Result<&Constituent> {
        self.schema
            .by_alias(alias)
            .ok_or_else(|| Error::unknown_constituent(alias))
    }
}
