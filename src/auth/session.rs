//! Cookie-backed server session — the second, independent session
//! representation next to the credential record.
//!
//! ARCHITECTURE
//! ============
//! The backend owns the session cookie and its 24-hour window; the client
//! only creates a session from an established credential bundle, reads it
//! back, and destroys it. Keeping this decoupled from the credential store
//! means an expired localStorage record and a live cookie (or the reverse)
//! are representable states, reconciled in `state::auth`.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

use super::credentials::Credentials;

/// Session endpoint, outside the versioned API prefix.
pub const SESSION_ENDPOINT: &str = "/api/auth/session";

/// Minimal identity projection carried by the server session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// The server-issued session as materialized from the session cookie.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerSession {
    pub user: SessionUser,
    pub access_token: String,
    pub refresh_token: String,
    pub token_expiry: String,
}

/// Build the session-creation payload from an established credential
/// record. The user projection falls back to the email local part when no
/// profile snapshot is cached yet.
#[must_use]
pub fn session_request_body(credentials: &Credentials) -> serde_json::Value {
    let (id, email, name) = match &credentials.user {
        Some(user) => (user.id.to_string(), user.email.clone(), user.full_name.clone()),
        None => (String::new(), String::new(), String::new()),
    };
    serde_json::json!({
        "user": { "id": id, "email": email, "name": name },
        "accessToken": credentials.access_token,
        "refreshToken": credentials.refresh_token,
        "tokenExpiry": credentials.token_expiry,
    })
}

/// Parse a session-fetch body. The endpoint answers `null` (or an empty
/// body) for anonymous visitors; both read as no session, as does any
/// undecodable payload.
#[must_use]
pub fn parse_session_body(body: &str) -> Option<ServerSession> {
    if body.trim().is_empty() {
        return None;
    }
    serde_json::from_str::<Option<ServerSession>>(body).ok().flatten()
}
