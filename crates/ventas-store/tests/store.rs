//! Tests for the object store implementations.

use ventas_model::PipelineError;
use ventas_store::{FsStore, MemoryStore, ObjectStore};

#[test]
fn memory_store_round_trips_and_overwrites() {
    let store = MemoryStore::new();

    store
        .put("uploads", "raw/a.csv", b"first", "text/csv")
        .unwrap();
    store
        .put("uploads", "raw/a.csv", b"second", "text/csv")
        .unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.get("uploads", "raw/a.csv").unwrap(), b"second");
}

#[test]
fn memory_store_get_missing_is_source_not_found() {
    let store = MemoryStore::new();

    let error = store.get("uploads", "raw/missing.csv").unwrap_err();
    match error {
        PipelineError::SourceNotFound(location) => {
            assert_eq!(location, "s3://uploads/raw/missing.csv");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn fs_store_round_trips_nested_keys() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    store
        .put("clean", "processed/2024/a.csv", b"data", "text/csv")
        .unwrap();

    assert_eq!(store.get("clean", "processed/2024/a.csv").unwrap(), b"data");
    assert!(dir.path().join("clean/processed/2024/a.csv").exists());
}

#[test]
fn fs_store_get_missing_is_source_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let store = FsStore::new(dir.path());

    let error = store.get("clean", "absent.csv").unwrap_err();
    match error {
        PipelineError::SourceNotFound(location) => {
            assert_eq!(location, "s3://clean/absent.csv");
        }
        other => panic!("unexpected error: {other}"),
    }
}
