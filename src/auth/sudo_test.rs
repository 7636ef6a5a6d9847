use super::*;
use crate::util::storage::{MemoryStorage, StorageBackend};

#[test]
fn enter_at_stores_four_hour_expiry() {
    let storage = MemoryStorage::new();
    let sudo = SudoMode::new(storage.clone());
    sudo.enter_at(1_000);
    assert_eq!(
        storage.get(SUDO_EXPIRY_KEY),
        Some((1_000 + SUDO_WINDOW_MS).to_string())
    );
}

#[test]
fn active_inside_window_only() {
    let sudo = SudoMode::new(MemoryStorage::new());
    sudo.enter_at(0);
    assert!(sudo.is_active_at(SUDO_WINDOW_MS - 1));
    assert!(!sudo.is_active_at(SUDO_WINDOW_MS));
    assert!(!sudo.is_active_at(SUDO_WINDOW_MS + 1));
}

#[test]
fn inactive_when_never_armed() {
    let sudo = SudoMode::new(MemoryStorage::new());
    assert!(!sudo.is_active_at(0));
}

#[test]
fn corrupt_expiry_reads_as_inactive() {
    let storage = MemoryStorage::new();
    let sudo = SudoMode::new(storage.clone());
    storage.set(SUDO_EXPIRY_KEY, "four hours from now");
    assert!(!sudo.is_active_at(0));
}

#[test]
fn clear_disarms_window() {
    let storage = MemoryStorage::new();
    let sudo = SudoMode::new(storage.clone());
    sudo.enter_at(0);
    sudo.clear();
    assert!(storage.is_empty());
    assert!(!sudo.is_active_at(1));
}
