//! Schema file formats.
//!
//! Stored schemas are read from JSON or `MessagePack`; the format is chosen
//! by file extension. Loaded snapshots are written the same way.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use schemata_foundation::{Error, ErrorKind, Result};
use schemata_loader::{LoadedSchema, SchemaData};

/// On-disk encoding of a schema file.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    /// Human-readable JSON.
    Json,
    /// Binary `MessagePack` with named fields.
    MessagePack,
}

impl Format {
    /// Picks the format from a file extension: `.msgpack` and `.mp` are
    /// `MessagePack`, anything else is JSON.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("msgpack") || ext.eq_ignore_ascii_case("mp") => {
                Self::MessagePack
            }
            _ => Self::Json,
        }
    }
}

/// Encodes a value in the given format.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes<T: Serialize + ?Sized>(value: &T, format: Format) -> Result<Vec<u8>> {
    match format {
        Format::Json => serde_json::to_vec_pretty(value).map_err(serialization_error),
        Format::MessagePack => rmp_serde::to_vec_named(value).map_err(serialization_error),
    }
}

/// Decodes a value in the given format.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes<T: DeserializeOwned>(bytes: &[u8], format: Format) -> Result<T> {
    match format {
        Format::Json => serde_json::from_slice(bytes).map_err(serialization_error),
        Format::MessagePack => rmp_serde::from_slice(bytes).map_err(serialization_error),
    }
}

fn serialization_error(error: impl std::fmt::Display) -> Error {
    Error::new(ErrorKind::SerializationError(error.to_string()))
}

/// Reads stored schema data from a file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn load_schema<P: AsRef<Path>>(path: P) -> Result<SchemaData> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to open file '{}': {e}",
            path.display()
        )))
    })?;

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to read file '{}': {e}",
            path.display()
        )))
    })?;

    let schema: SchemaData = from_bytes(&bytes, Format::from_path(path))?;
    tracing::info!(path = %path.display(), items = schema.items.len(), "schema read");
    Ok(schema)
}

/// Writes stored schema data to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_schema<P: AsRef<Path>>(schema: &SchemaData, path: P) -> Result<()> {
    write_file(schema, path.as_ref())
}

/// Writes a loaded snapshot, derived fields included, to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written or serialization fails.
pub fn save_snapshot<P: AsRef<Path>>(snapshot: &LoadedSchema, path: P) -> Result<()> {
    write_file(snapshot, path.as_ref())
}

fn write_file<T: Serialize>(value: &T, path: &Path) -> Result<()> {
    let bytes = to_bytes(value, Format::from_path(path))?;
    let file = File::create(path).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to create file '{}': {e}",
            path.display()
        )))
    })?;

    let mut writer = BufWriter::new(file);
    writer.write_all(&bytes).map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to write to file '{}': {e}",
            path.display()
        )))
    })?;
    writer.flush().map_err(|e| {
        Error::new(ErrorKind::IoError(format!(
            "failed to flush file '{}': {e}",
            path.display()
        )))
    })?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "file written");
    Ok(())
}
