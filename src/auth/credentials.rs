//! Persisted credential record and the shared authentication predicate.
//!
//! DESIGN
//! ======
//! The four storage keys form one logical record. Writes and clears always
//! touch all of them together, and a record that reads back partial or
//! corrupt is treated as absent — other code must never observe a token
//! without an expiry or vice versa.
//!
//! Key names are a contract shared with the rest of the app; do not rename.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod tests;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use crate::net::types::UserDto;
use crate::util::clock;
use crate::util::storage::StorageBackend;

pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const REFRESH_TOKEN_KEY: &str = "refreshToken";
pub const TOKEN_EXPIRY_KEY: &str = "tokenExpiry";
pub const USER_KEY: &str = "user";

/// The persisted credential bundle: both tokens, the access-token expiry as
/// an RFC 3339 string, and the cached profile snapshot when known.
#[derive(Clone, Debug, PartialEq)]
pub struct Credentials {
    pub access_token: String,
    pub refresh_token: String,
    pub token_expiry: String,
    pub user: Option<UserDto>,
}

impl Credentials {
    /// Expiry as milliseconds since the Unix epoch, if parseable.
    #[must_use]
    pub fn expiry_ms(&self) -> Option<i64> {
        parse_expiry_ms(&self.token_expiry)
    }

    /// True while the access token is unexpired at `now_ms`. An expiry
    /// exactly equal to `now_ms` counts as expired, and an unparseable
    /// expiry is never valid.
    #[must_use]
    pub fn is_valid_at(&self, now_ms: i64) -> bool {
        self.expiry_ms().is_some_and(|expiry| now_ms < expiry)
    }
}

/// Parse an RFC 3339 timestamp into epoch milliseconds.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn parse_expiry_ms(raw: &str) -> Option<i64> {
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .map(|dt| (dt.unix_timestamp_nanos() / 1_000_000) as i64)
}

/// Typed store over the credential record keys.
#[derive(Clone, Debug)]
pub struct CredentialStore<S: StorageBackend> {
    storage: S,
}

impl<S: StorageBackend> CredentialStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Load the whole record. Returns `None` when any token field is
    /// missing, or when a stored profile fails to parse — a damaged record
    /// must read as signed-out rather than half-authenticated.
    pub fn load(&self) -> Option<Credentials> {
        let access_token = self.storage.get(ACCESS_TOKEN_KEY)?;
        let refresh_token = self.storage.get(REFRESH_TOKEN_KEY)?;
        let token_expiry = self.storage.get(TOKEN_EXPIRY_KEY)?;

        let user = match self.storage.get(USER_KEY) {
            None => None,
            Some(raw) => match serde_json::from_str::<UserDto>(&raw) {
                Ok(user) => Some(user),
                Err(err) => {
                    log::warn!("discarding corrupt cached profile: {err}");
                    return None;
                }
            },
        };

        Some(Credentials {
            access_token,
            refresh_token,
            token_expiry,
            user,
        })
    }

    /// Overwrite the record wholesale. All four keys are written in one
    /// synchronous pass with no suspension points in between.
    pub fn save(&self, credentials: &Credentials) {
        self.storage.set(ACCESS_TOKEN_KEY, &credentials.access_token);
        self.storage.set(REFRESH_TOKEN_KEY, &credentials.refresh_token);
        self.storage.set(TOKEN_EXPIRY_KEY, &credentials.token_expiry);
        match &credentials.user {
            Some(user) => match serde_json::to_string(user) {
                Ok(raw) => self.storage.set(USER_KEY, &raw),
                Err(err) => {
                    log::warn!("failed to serialize cached profile: {err}");
                    self.storage.remove(USER_KEY);
                }
            },
            None => self.storage.remove(USER_KEY),
        }
    }

    /// Erase the record wholesale.
    pub fn clear(&self) {
        self.storage.remove(ACCESS_TOKEN_KEY);
        self.storage.remove(REFRESH_TOKEN_KEY);
        self.storage.remove(TOKEN_EXPIRY_KEY);
        self.storage.remove(USER_KEY);
    }

    /// Replace only the cached profile snapshot, keeping the token fields.
    /// No-op when there is no record to attach the profile to.
    pub fn update_profile(&self, user: &UserDto) {
        let Some(mut credentials) = self.load() else {
            return;
        };
        credentials.user = Some(user.clone());
        self.save(&credentials);
    }

    /// The stored access token, if a complete record exists.
    pub fn access_token(&self) -> Option<String> {
        self.load().map(|c| c.access_token)
    }

    /// The cached profile snapshot, if any.
    pub fn stored_user(&self) -> Option<UserDto> {
        self.load().and_then(|c| c.user)
    }

    /// The single synchronous predicate all guards agree on: both tokens
    /// present and `now_ms` strictly before the stored expiry.
    pub fn is_authenticated_at(&self, now_ms: i64) -> bool {
        self.load().is_some_and(|c| c.is_valid_at(now_ms))
    }

    /// [`Self::is_authenticated_at`] against the live clock.
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated_at(clock::now_ms())
    }
}
