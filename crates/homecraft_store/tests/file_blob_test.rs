//! Tests for the filesystem blob store backend.

use homecraft_store::{BlobStore, FileBlobStore};
use tempfile::TempDir;

#[test]
fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileBlobStore::new(temp_dir.path()).unwrap();

    let bytes = br#"{"products":[]}"#;
    store.save("products", bytes).unwrap();

    let loaded = store.load("products").unwrap();
    assert_eq!(loaded.as_deref(), Some(bytes.as_slice()));
    assert!(store.exists("products").unwrap());
}

#[test]
fn test_missing_blob_loads_as_none() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileBlobStore::new(temp_dir.path()).unwrap();

    assert_eq!(store.load("products").unwrap(), None);
    assert!(!store.exists("products").unwrap());
}

#[test]
fn test_save_replaces_previous_contents() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileBlobStore::new(temp_dir.path()).unwrap();

    store.save("products", b"first").unwrap();
    store.save("products", b"second").unwrap();

    assert_eq!(store.load("products").unwrap().unwrap(), b"second");
}

#[test]
fn test_blobs_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let mut store = FileBlobStore::new(temp_dir.path()).unwrap();
        store.save("products", b"persisted").unwrap();
    }

    let store = FileBlobStore::new(temp_dir.path()).unwrap();
    assert_eq!(store.load("products").unwrap().unwrap(), b"persisted");
}

#[test]
fn test_names_cannot_escape_base_directory() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileBlobStore::new(temp_dir.path()).unwrap();

    assert!(store.save("../escape", b"x").is_err());
    assert!(store.save("a/b", b"x").is_err());
    assert!(store.save("", b"x").is_err());
    assert!(store.load("..").is_err());
    assert!(store.exists("../escape").is_err());
}

#[test]
fn test_blob_is_written_as_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let mut store = FileBlobStore::new(temp_dir.path()).unwrap();

    store.save("products", b"{}").unwrap();

    let path = temp_dir.path().join("products.json");
    assert!(path.exists());
    assert_eq!(std::fs::read(path).unwrap(), b"{}");
}
