use super::*;
use crate::util::storage::MemoryStorage;

fn sample_user() -> UserDto {
    UserDto {
        id: 7,
        email: "ada@example.com".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        created_at: "2029-01-01T00:00:00Z".to_owned(),
        last_login_at: None,
        profile_picture_url: None,
        o_auth_provider: None,
    }
}

fn sample_credentials() -> Credentials {
    Credentials {
        access_token: "access-1".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        token_expiry: "2030-01-01T00:00:00Z".to_owned(),
        user: Some(sample_user()),
    }
}

fn store() -> (CredentialStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (CredentialStore::new(storage.clone()), storage)
}

// =============================================================
// Atomicity — the four keys behave as one record.
// =============================================================

#[test]
fn save_writes_all_four_keys() {
    let (store, storage) = store();
    store.save(&sample_credentials());
    assert_eq!(storage.get(ACCESS_TOKEN_KEY), Some("access-1".to_owned()));
    assert_eq!(storage.get(REFRESH_TOKEN_KEY), Some("refresh-1".to_owned()));
    assert_eq!(storage.get(TOKEN_EXPIRY_KEY), Some("2030-01-01T00:00:00Z".to_owned()));
    assert!(storage.get(USER_KEY).is_some());
}

#[test]
fn clear_removes_all_four_keys() {
    let (store, storage) = store();
    store.save(&sample_credentials());
    store.clear();
    assert!(storage.is_empty());
}

#[test]
fn load_round_trips_saved_record() {
    let (store, _storage) = store();
    let credentials = sample_credentials();
    store.save(&credentials);
    assert_eq!(store.load(), Some(credentials));
}

#[test]
fn partial_record_reads_as_absent() {
    let (store, storage) = store();
    storage.set(ACCESS_TOKEN_KEY, "access-1");
    storage.set(TOKEN_EXPIRY_KEY, "2030-01-01T00:00:00Z");
    // No refresh token stored.
    assert_eq!(store.load(), None);
    assert!(!store.is_authenticated_at(0));
}

#[test]
fn corrupt_stored_user_reads_as_absent() {
    let (store, storage) = store();
    store.save(&sample_credentials());
    storage.set(USER_KEY, "{not json");
    assert_eq!(store.load(), None);
    assert!(!store.is_authenticated_at(0));
}

#[test]
fn record_without_user_is_still_complete() {
    let (store, storage) = store();
    let mut credentials = sample_credentials();
    credentials.user = None;
    store.save(&credentials);
    assert_eq!(storage.get(USER_KEY), None);
    assert_eq!(store.load(), Some(credentials));
}

#[test]
fn save_without_user_removes_stale_profile() {
    let (store, storage) = store();
    store.save(&sample_credentials());
    let mut credentials = sample_credentials();
    credentials.user = None;
    store.save(&credentials);
    assert_eq!(storage.get(USER_KEY), None);
}

#[test]
fn update_profile_keeps_token_fields() {
    let (store, _storage) = store();
    store.save(&sample_credentials());
    let mut updated = sample_user();
    updated.full_name = "Ada King".to_owned();
    store.update_profile(&updated);
    let loaded = store.load().unwrap();
    assert_eq!(loaded.access_token, "access-1");
    assert_eq!(loaded.user.unwrap().full_name, "Ada King");
}

#[test]
fn update_profile_without_record_is_noop() {
    let (store, storage) = store();
    store.update_profile(&sample_user());
    assert!(storage.is_empty());
}

// =============================================================
// Expiry predicate — boundary is inclusive-expired.
// =============================================================

#[test]
fn parse_expiry_ms_accepts_rfc3339() {
    assert_eq!(parse_expiry_ms("1970-01-01T00:00:01Z"), Some(1_000));
    assert_eq!(parse_expiry_ms("1970-01-01T00:00:00.500Z"), Some(500));
}

#[test]
fn parse_expiry_ms_rejects_garbage() {
    assert_eq!(parse_expiry_ms("not a date"), None);
    assert_eq!(parse_expiry_ms(""), None);
    assert_eq!(parse_expiry_ms("2030-13-99T99:99:99Z"), None);
}

#[test]
fn is_valid_before_expiry() {
    let credentials = sample_credentials();
    let expiry = credentials.expiry_ms().unwrap();
    assert!(credentials.is_valid_at(expiry - 1));
}

#[test]
fn expired_exactly_at_expiry() {
    let credentials = sample_credentials();
    let expiry = credentials.expiry_ms().unwrap();
    assert!(!credentials.is_valid_at(expiry));
    assert!(!credentials.is_valid_at(expiry + 1));
}

#[test]
fn unparseable_expiry_is_never_valid() {
    let mut credentials = sample_credentials();
    credentials.token_expiry = "soon".to_owned();
    assert!(!credentials.is_valid_at(0));
}

#[test]
fn is_authenticated_at_uses_stored_record() {
    let (store, _storage) = store();
    store.save(&sample_credentials());
    let expiry = parse_expiry_ms("2030-01-01T00:00:00Z").unwrap();
    assert!(store.is_authenticated_at(expiry - 1_000));
    assert!(!store.is_authenticated_at(expiry));
}

#[test]
fn is_authenticated_false_with_empty_storage() {
    let (store, _storage) = store();
    assert!(!store.is_authenticated_at(0));
}
