use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_round_trips_values() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    assert_eq!(storage.get("k"), Some("v".to_owned()));
}

#[test]
fn memory_storage_overwrites_existing_key() {
    let storage = MemoryStorage::new();
    storage.set("k", "old");
    storage.set("k", "new");
    assert_eq!(storage.get("k"), Some("new".to_owned()));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_deletes_key() {
    let storage = MemoryStorage::new();
    storage.set("k", "v");
    storage.remove("k");
    assert_eq!(storage.get("k"), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_storage_clones_share_state() {
    let storage = MemoryStorage::new();
    let view = storage.clone();
    storage.set("k", "v");
    assert_eq!(view.get("k"), Some("v".to_owned()));
}

// =============================================================
// BrowserStorage native stubs
// =============================================================

#[test]
fn browser_storage_is_inert_natively() {
    let storage = BrowserStorage::local();
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
    storage.remove("k");
}

#[test]
fn browser_session_storage_is_inert_natively() {
    let storage = BrowserStorage::session();
    storage.set("k", "v");
    assert_eq!(storage.get("k"), None);
}
