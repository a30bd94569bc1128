use json_filestore::{Error, JsonFile};
use serde_json::json;
use tempfile::tempdir;

// ---- create ------------------------------------------------------------------

#[test]
fn create_requires_existing_parent_dir() {
    let dir = tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("nope").join("store.json"));

    let err = store.create().unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
    assert!(!store.path().exists());
}

#[test]
fn create_with_requires_existing_parent_dir() {
    let dir = tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("nope").join("store.json"));

    let err = store
        .create_with(vec![("a".to_string(), json!(1))])
        .unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn create_in_existing_dir_succeeds() {
    let dir = tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("store.json"));

    store.create().unwrap();
    assert!(store.path().exists());
    assert!(store.read_all().is_empty());
}

// ---- remove ------------------------------------------------------------------

#[test]
fn remove_missing_file_returns_false() {
    let dir = tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("ghost.json"));
    assert!(!store.remove().unwrap());
}

#[test]
fn remove_existing_file_returns_true_and_unlinks() {
    let dir = tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("store.json"));
    store.create_with(vec![("a".to_string(), json!(1))]).unwrap();

    assert!(store.remove().unwrap());
    assert!(!store.path().exists());
    // reads after removal fail soft
    assert!(store.read_all().is_empty());
}

#[test]
fn remove_twice_is_harmless() {
    let dir = tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("store.json"));
    store.create().unwrap();
    assert!(store.remove().unwrap());
    assert!(!store.remove().unwrap());
}

// ---- write hygiene -----------------------------------------------------------

#[test]
fn writes_leave_no_tmp_file_behind() {
    let dir = tempdir().unwrap();
    let store = JsonFile::new(dir.path().join("store.json"));
    store.create_with(vec![("a".to_string(), json!(1))]).unwrap();
    store.remove_keys(["a"]).unwrap();

    let tmp = dir.path().join("store.json.tmp");
    assert!(!tmp.exists());
    assert!(store.path().exists());
}

#[test]
fn reload_after_reopen_sees_persisted_content() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("store.json");
    {
        let store = JsonFile::new(&path);
        store
            .create_with(vec![("k1".to_string(), json!("v1"))])
            .unwrap();
    }
    let store = JsonFile::new(&path);
    assert_eq!(
        store.read_by_key("k1"),
        Some(("k1".to_string(), json!("v1")))
    );
}
