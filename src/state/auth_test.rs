use super::*;
use crate::auth::credentials::parse_expiry_ms;
use crate::auth::session::SESSION_ENDPOINT;
use crate::net::api::{ApiConfig, ApiError, HttpMethod, HttpResponse};
use crate::util::storage::MemoryStorage;

const FUTURE_EXPIRY: &str = "2030-01-01T00:00:00Z";

fn profile() -> UserDto {
    UserDto {
        id: 7,
        email: "ada@example.com".to_owned(),
        full_name: "Ada Lovelace".to_owned(),
        created_at: "2029-01-01T00:00:00Z".to_owned(),
        last_login_at: Some("2029-06-01T00:00:00Z".to_owned()),
        profile_picture_url: None,
        o_auth_provider: None,
    }
}

fn credentials(user: Option<UserDto>) -> Credentials {
    Credentials {
        access_token: "access-1".to_owned(),
        refresh_token: "refresh-1".to_owned(),
        token_expiry: FUTURE_EXPIRY.to_owned(),
        user,
    }
}

fn server_session() -> ServerSession {
    ServerSession {
        user: SessionUser {
            id: "7".to_owned(),
            email: "ada@example.com".to_owned(),
            name: "Ada".to_owned(),
        },
        access_token: "server-access".to_owned(),
        refresh_token: "server-refresh".to_owned(),
        token_expiry: FUTURE_EXPIRY.to_owned(),
    }
}

// =============================================================
// reconcile — server session wins, cached profile enriches.
// =============================================================

#[test]
fn server_session_authenticates_and_cached_profile_enriches() {
    let session = server_session();
    let cached = credentials(Some(profile()));
    let state = reconcile(Some(&session), Some(&cached), 0);
    let SessionState::Authenticated { user, tokens } = state else {
        panic!("expected authenticated");
    };
    // Richer cached snapshot wins over the minimal projection.
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(user.last_login_at, Some("2029-06-01T00:00:00Z".to_owned()));
    // Tokens come from the server session.
    assert_eq!(tokens.access_token, "server-access");
}

#[test]
fn server_session_without_cache_uses_minimal_projection() {
    let session = server_session();
    let state = reconcile(Some(&session), None, 0);
    let SessionState::Authenticated { user, .. } = state else {
        panic!("expected authenticated");
    };
    assert_eq!(user.id, 7);
    assert_eq!(user.full_name, "Ada");
    assert!(user.created_at.is_empty());
}

#[test]
fn mismatched_cached_profile_is_ignored() {
    let session = server_session();
    let mut stale = profile();
    stale.email = "someone-else@example.com".to_owned();
    let cached = credentials(Some(stale));
    let state = reconcile(Some(&session), Some(&cached), 0);
    let SessionState::Authenticated { user, .. } = state else {
        panic!("expected authenticated");
    };
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(user.full_name, "Ada");
}

#[test]
fn server_session_wins_even_when_credentials_expired() {
    let session = server_session();
    let cached = credentials(Some(profile()));
    let past_everything = i64::MAX;
    assert!(matches!(
        reconcile(Some(&session), Some(&cached), past_everything),
        SessionState::Authenticated { .. }
    ));
}

// =============================================================
// reconcile — credential-store fallback.
// =============================================================

#[test]
fn valid_cached_credentials_authenticate() {
    let cached = credentials(Some(profile()));
    let state = reconcile(None, Some(&cached), 0);
    let SessionState::Authenticated { user, tokens } = state else {
        panic!("expected authenticated");
    };
    assert_eq!(user.email, "ada@example.com");
    assert_eq!(tokens.access_token, "access-1");
}

#[test]
fn expired_cached_credentials_are_anonymous() {
    let cached = credentials(Some(profile()));
    let expiry = parse_expiry_ms(FUTURE_EXPIRY).unwrap();
    assert_eq!(reconcile(None, Some(&cached), expiry), SessionState::Anonymous);
}

#[test]
fn valid_tokens_without_profile_keep_resolving() {
    let cached = credentials(None);
    assert_eq!(reconcile(None, Some(&cached), 0), SessionState::Authenticating);
}

#[test]
fn nothing_anywhere_is_anonymous() {
    assert_eq!(reconcile(None, None, 0), SessionState::Anonymous);
}

// =============================================================
// resolve_session — profile chase for token-only records.
// =============================================================

struct StubHttp {
    session_body: &'static str,
    me_body: &'static str,
}

impl crate::net::api::HttpClient for StubHttp {
    async fn request(
        &self,
        _method: HttpMethod,
        path: &str,
        _body: Option<&serde_json::Value>,
        _bearer: Option<&str>,
    ) -> Result<HttpResponse, ApiError> {
        if path == SESSION_ENDPOINT {
            return Ok(HttpResponse { status: 200, body: self.session_body.to_owned() });
        }
        if path.ends_with("/auth/me") {
            return Ok(HttpResponse { status: 200, body: self.me_body.to_owned() });
        }
        Ok(HttpResponse { status: 404, body: String::new() })
    }
}

fn stub_service(http: StubHttp, cached: Option<Credentials>) -> SessionService<StubHttp, MemoryStorage> {
    let store = CredentialStore::new(MemoryStorage::new());
    if let Some(credentials) = cached {
        store.save(&credentials);
    }
    SessionService::new(http, store, &ApiConfig::default())
}

#[tokio::test]
async fn resolve_session_chases_profile_for_token_only_record() {
    let http = StubHttp {
        session_body: "null",
        me_body: r#"{
            "success": true,
            "user": { "id": 7, "email": "ada@example.com", "fullName": "Ada Lovelace", "createdAt": "2029-01-01T00:00:00Z" }
        }"#,
    };
    let service = stub_service(http, Some(credentials(None)));

    let state = resolve_session(&service).await;
    let SessionState::Authenticated { user, tokens } = state else {
        panic!("expected authenticated");
    };
    assert_eq!(user.full_name, "Ada Lovelace");
    assert_eq!(tokens.access_token, "access-1");
    // The chased profile is written back to the cache.
    assert!(service.credentials().stored_user().is_some());
}

#[tokio::test]
async fn resolve_session_degrades_to_anonymous_when_profile_fetch_fails() {
    let http = StubHttp {
        session_body: "null",
        me_body: r#"{ "success": false, "user": null }"#,
    };
    let service = stub_service(http, Some(credentials(None)));
    assert_eq!(resolve_session(&service).await, SessionState::Anonymous);
}

#[tokio::test]
async fn resolve_session_is_anonymous_with_no_sources() {
    let http = StubHttp { session_body: "null", me_body: "{}" };
    let service = stub_service(http, None);
    assert_eq!(resolve_session(&service).await, SessionState::Anonymous);
}

// =============================================================
// AuthState — the invariant is structural.
// =============================================================

#[test]
fn default_state_is_signed_out_and_settled() {
    let state = AuthState::default();
    assert!(!state.is_authenticated());
    assert!(!state.loading);
}

#[test]
fn resolving_state_is_not_authenticated() {
    let state = AuthState::resolving();
    assert!(state.loading);
    assert!(!state.is_authenticated());
}

#[test]
fn apply_authenticated_sets_user_and_settles() {
    let mut state = AuthState::resolving();
    state.apply(&SessionState::Authenticated {
        user: profile(),
        tokens: SessionTokens {
            access_token: "a".to_owned(),
            refresh_token: "r".to_owned(),
            token_expiry: FUTURE_EXPIRY.to_owned(),
        },
    });
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().unwrap().email, "ada@example.com");
}

#[test]
fn apply_anonymous_clears_user() {
    let mut state = AuthState { user: Some(profile()), loading: false };
    state.apply(&SessionState::Anonymous);
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
}

#[test]
fn login_and_reset_flip_the_view() {
    let mut state = AuthState::resolving();
    state.login(profile());
    assert!(state.is_authenticated());
    state.reset();
    assert!(!state.is_authenticated());
    assert_eq!(state.user, None);
}

#[test]
fn update_user_writes_through_to_store() {
    let store = CredentialStore::new(MemoryStorage::new());
    store.save(&credentials(Some(profile())));
    let mut state = AuthState { user: Some(profile()), loading: false };

    let mut renamed = profile();
    renamed.full_name = "Ada King".to_owned();
    update_user(&mut state, &store, renamed);

    assert_eq!(state.user.as_ref().unwrap().full_name, "Ada King");
    assert_eq!(store.stored_user().unwrap().full_name, "Ada King");
}
