//! Schema files on disk feeding the loader.

use std::path::{Path, PathBuf};

use schemata::foundation::ErrorKind;
use schemata::loader::{SchemaData, SchemaLoader};
use schemata::runtime::{Format, from_bytes, load_schema, save_schema, save_snapshot, to_bytes};

use crate::geometry::geometry;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("schemata_it_{}_{name}", std::process::id()))
}

fn round_trip(path: &Path) -> SchemaData {
    save_schema(&geometry(), path).unwrap();
    let restored = load_schema(path).unwrap();
    let _ = std::fs::remove_file(path);
    restored
}

// =============================================================================
// Stored schemas
// =============================================================================

#[test]
fn json_file_loads_like_memory() {
    let restored = round_trip(&temp_path("geometry.json"));
    assert_eq!(restored, geometry());

    let from_file = SchemaLoader::new().load(&restored).unwrap();
    let from_memory = SchemaLoader::new().load(&geometry()).unwrap();
    assert_eq!(from_file.topological_order(), from_memory.topological_order());
    assert_eq!(from_file.stats(), from_memory.stats());
}

#[test]
fn messagepack_file_loads_like_memory() {
    let path = temp_path("geometry.msgpack");
    assert_eq!(Format::from_path(&path), Format::MessagePack);
    let restored = round_trip(&path);
    assert_eq!(restored, geometry());
    assert_eq!(restored.title, "Incidence geometry");
    assert_eq!(restored.inheritance.len(), 1);
}

#[test]
fn messagepack_is_smaller_than_json() {
    let schema = geometry();
    let json = to_bytes(&schema, Format::Json).unwrap();
    let packed = to_bytes(&schema, Format::MessagePack).unwrap();
    assert!(packed.len() < json.len());
}

#[test]
fn wrong_format_is_rejected() {
    let packed = to_bytes(&geometry(), Format::MessagePack).unwrap();
    let error = from_bytes::<SchemaData>(&packed, Format::Json).unwrap_err();
    assert!(matches!(error.kind, ErrorKind::SerializationError(_)));
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn snapshot_file_carries_derived_fields() {
    let loaded = SchemaLoader::new().load(&geometry()).unwrap();
    let path = temp_path("snapshot.json");
    save_snapshot(&loaded, &path).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    let _ = std::fs::remove_file(&path);

    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value["title"], serde_json::json!("Incidence geometry"));

    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), 11);
    let d2 = items
        .iter()
        .find(|item| item["alias"] == serde_json::json!("D2"))
        .unwrap();
    assert_eq!(d2["spawner_alias"], serde_json::json!("F1"));
    assert_eq!(d2["status"], serde_json::json!("verified"));
    assert_eq!(d2["is_simple_expression"], serde_json::json!(true));

    let x1 = items
        .iter()
        .find(|item| item["alias"] == serde_json::json!("X1"))
        .unwrap();
    assert_eq!(x1["is_inherited"], serde_json::json!(true));
}
