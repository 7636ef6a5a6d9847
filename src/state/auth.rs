//! Auth context state: one reconciled view over the server session and the
//! credential store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components never look at the two session sources directly. Bootstrap
//! resolves them into a `SessionState` through one reconciliation function,
//! and the resulting `AuthState` is what `useAuth`-style consumers read.
//! The invariant `is_authenticated ⇒ user present` holds by construction —
//! there is no way to mark the state authenticated without a user.

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;

use crate::auth::credentials::{CredentialStore, Credentials};
use crate::auth::service::SessionService;
use crate::auth::session::{ServerSession, SessionUser};
use crate::net::api::HttpClient;
use crate::net::types::UserDto;
use crate::util::clock;
use crate::util::storage::StorageBackend;

/// Token bundle carried by an authenticated session state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionTokens {
    pub access_token: String,
    pub refresh_token: String,
    pub token_expiry: String,
}

impl SessionTokens {
    fn from_credentials(credentials: &Credentials) -> Self {
        Self {
            access_token: credentials.access_token.clone(),
            refresh_token: credentials.refresh_token.clone(),
            token_expiry: credentials.token_expiry.clone(),
        }
    }
}

/// The single logical session state both sources reconcile into.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionState {
    /// No live session anywhere.
    Anonymous,
    /// A valid token bundle exists but the profile is not known yet; the
    /// resolver follows up with `/auth/me`.
    Authenticating,
    /// A live session with a known user.
    Authenticated { user: UserDto, tokens: SessionTokens },
}

/// Reconcile the two session representations at `now_ms`.
///
/// The server session wins when present: it survives credential wipes and
/// is what the navigation guard trusts. Its identity projection is minimal,
/// so a matching cached profile (richer fields) replaces it wholesale.
/// Without a server session, the credential store's own validity predicate
/// decides.
#[must_use]
pub fn reconcile(server: Option<&ServerSession>, cached: Option<&Credentials>, now_ms: i64) -> SessionState {
    if let Some(session) = server {
        let user = merge_profile(&session.user, cached.and_then(|c| c.user.as_ref()));
        return SessionState::Authenticated {
            user,
            tokens: SessionTokens {
                access_token: session.access_token.clone(),
                refresh_token: session.refresh_token.clone(),
                token_expiry: session.token_expiry.clone(),
            },
        };
    }

    match cached {
        Some(credentials) if credentials.is_valid_at(now_ms) => match &credentials.user {
            Some(user) => SessionState::Authenticated {
                user: user.clone(),
                tokens: SessionTokens::from_credentials(credentials),
            },
            None => SessionState::Authenticating,
        },
        _ => SessionState::Anonymous,
    }
}

/// Pick the profile for a server-session identity. The cached snapshot is
/// the richer record and wins when it describes the same account;
/// otherwise the minimal projection is widened into a bare profile.
#[must_use]
pub fn merge_profile(identity: &SessionUser, cached: Option<&UserDto>) -> UserDto {
    match cached {
        Some(profile) if profile.email.eq_ignore_ascii_case(&identity.email) => profile.clone(),
        _ => UserDto {
            id: identity.id.parse().unwrap_or_default(),
            email: identity.email.clone(),
            full_name: identity.name.clone(),
            created_at: String::new(),
            last_login_at: None,
            profile_picture_url: None,
            o_auth_provider: None,
        },
    }
}

/// Resolve the live session state: fetch the server session, reconcile
/// with the credential store, and chase the profile when only tokens are
/// known. Every failure path degrades to `Anonymous`.
pub async fn resolve_session<C: HttpClient, S: StorageBackend>(service: &SessionService<C, S>) -> SessionState {
    let server = service.fetch_server_session().await;
    let cached = service.credentials().load();
    match reconcile(server.as_ref(), cached.as_ref(), clock::now_ms()) {
        SessionState::Authenticating => match service.current_user().await {
            // The profile fetch may itself have refreshed the tokens;
            // re-read the store for the bundle.
            Ok(user) => match service.credentials().load() {
                Some(credentials) => SessionState::Authenticated {
                    user,
                    tokens: SessionTokens::from_credentials(&credentials),
                },
                None => SessionState::Anonymous,
            },
            Err(err) => {
                log::warn!("profile fetch during session resolve failed: {err}");
                SessionState::Anonymous
            }
        },
        resolved => resolved,
    }
}

/// The reactive view components consume, provided as a context signal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<UserDto>,
    pub loading: bool,
}

impl AuthState {
    /// Initial pre-bootstrap state.
    #[must_use]
    pub fn resolving() -> Self {
        Self { user: None, loading: true }
    }

    /// True only when resolution finished with a user present.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.loading && self.user.is_some()
    }

    /// Adopt a resolved session state.
    pub fn apply(&mut self, state: &SessionState) {
        match state {
            SessionState::Authenticated { user, .. } => {
                self.user = Some(user.clone());
                self.loading = false;
            }
            SessionState::Anonymous => {
                self.user = None;
                self.loading = false;
            }
            SessionState::Authenticating => {
                self.user = None;
                self.loading = true;
            }
        }
    }

    /// In-memory sign-in after a flow completes. Storage writes already
    /// happened in the session service; this only updates the view.
    pub fn login(&mut self, user: UserDto) {
        self.user = Some(user);
        self.loading = false;
    }

    /// In-memory sign-out. Storage clears happen in the session service.
    pub fn reset(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Replace the current profile in memory and write it through to the
/// credential store's cached snapshot.
pub fn update_user<S: StorageBackend>(auth: &mut AuthState, store: &CredentialStore<S>, user: UserDto) {
    store.update_profile(&user);
    auth.user = Some(user);
}
