use kotoba_storage::backend::{FileStorage, LocalStorage, MemoryStorage};
use kotoba_storage::error::StorageError;

#[test]
fn file_storage_round_trip_and_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::open(dir.path()).unwrap();

    assert_eq!(storage.get_item("words").unwrap(), None);
    storage.set_item("words", "[]").unwrap();
    storage.set_item("words", "[1]").unwrap();
    assert_eq!(storage.get_item("words").unwrap().as_deref(), Some("[1]"));
    assert!(dir.path().join("words.json").exists());
    assert!(!dir.path().join("words.json.tmp").exists());

    storage.remove_item("words").unwrap();
    storage.remove_item("words").unwrap();
    assert_eq!(storage.get_item("words").unwrap(), None);
}

#[test]
fn file_storage_rejects_path_like_keys() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::open(dir.path()).unwrap();
    let err = storage.set_item("../escape", "x").unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
    assert!(storage.get_item("").is_err());
}

#[test]
fn clear_only_removes_json_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("notes.txt"), "keep me").unwrap();

    let mut storage = FileStorage::open(dir.path()).unwrap();
    storage.set_item("images", "[]").unwrap();
    storage.set_item("links", "[]").unwrap();
    storage.clear().unwrap();

    assert_eq!(storage.get_item("images").unwrap(), None);
    assert_eq!(storage.get_item("links").unwrap(), None);
    assert!(dir.path().join("notes.txt").exists());
}

#[test]
fn clear_removes_interrupted_writes() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("words.json.tmp"), "[{\"partial\"").unwrap();

    let mut storage = FileStorage::open(dir.path()).unwrap();
    storage.set_item("words", "[]").unwrap();
    std::fs::write(dir.path().join("links.json.tmp"), "[").unwrap();
    storage.clear().unwrap();

    assert!(!dir.path().join("words.json").exists());
    assert!(!dir.path().join("words.json.tmp").exists());
    assert!(!dir.path().join("links.json.tmp").exists());
}

#[test]
fn memory_storage_clear() {
    let mut storage = MemoryStorage::new();
    storage.set_item("a", "1").unwrap();
    storage.set_item("b", "2").unwrap();
    storage.clear().unwrap();
    assert_eq!(storage.get_item("a").unwrap(), None);
}
