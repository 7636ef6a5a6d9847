//! Session service — drives every backend auth flow and owns the
//! 401→refresh→retry request pipeline.
//!
//! ARCHITECTURE
//! ============
//! Leaf form components call these operations imperatively. Successful
//! credentialed flows overwrite the credential record wholesale; failures
//! never partially populate it. Token refresh is single-flight: concurrent
//! 401s share one in-flight refresh through `refresh_gate`, and a caller
//! that waited re-checks whether the token it saw rejected has already been
//! replaced before refreshing again.
//!
//! TRADE-OFFS
//! ==========
//! Refresh failure is fatal for the session: the record is cleared and the
//! browser is hard-redirected to sign-in. This favors a clean signed-out
//! state over retry loops inside the request pipeline.

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;

use futures::lock::Mutex;
use serde::Serialize;

use crate::net::api::{ApiConfig, ApiError, HttpClient, HttpMethod, HttpResponse};
use crate::net::types::{
    AuthResponse, CallbackRequest, CurrentUserResponse, ExternalAuthRequest, ForgotPasswordRequest, RefreshResponse,
    RefreshTokenRequest, ResetPasswordRequest, SigninRequest, SignupRequest, UserDto, VerifyEmailRequest,
    VerifyOtpRequest,
};
use crate::util::navigate;
use crate::util::storage::StorageBackend;

use super::credentials::{CredentialStore, Credentials};
use super::session::{SESSION_ENDPOINT, ServerSession, parse_session_body, session_request_body};

/// Where the request pipeline sends the browser after a fatal session
/// failure. A hard redirect, because the pipeline has no router context.
const SIGNIN_REDIRECT: &str = "/signin";

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("not authenticated")]
    NotAuthenticated,
    #[error("session expired")]
    SessionExpired,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Coordinates the backend auth API and the persisted credential record.
pub struct SessionService<C: HttpClient, S: StorageBackend> {
    http: C,
    credentials: CredentialStore<S>,
    base_url: String,
    refresh_gate: Mutex<()>,
}

impl<C: HttpClient, S: StorageBackend> SessionService<C, S> {
    pub fn new(http: C, credentials: CredentialStore<S>, config: &ApiConfig) -> Self {
        Self {
            http,
            credentials,
            base_url: config.base_url.clone(),
            refresh_gate: Mutex::new(()),
        }
    }

    /// The credential store this service writes through.
    pub fn credentials(&self) -> &CredentialStore<S> {
        &self.credentials
    }

    /// Synchronous authentication check; see
    /// [`CredentialStore::is_authenticated`].
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_authenticated()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // =========================================================================
    // AUTH FLOWS
    // =========================================================================

    /// Register a new account. The account stays unusable until the emailed
    /// verification code is confirmed, so no credentials are written here.
    pub async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, AuthError> {
        self.post_flow("/auth/signup", encode(request), Persist::No).await
    }

    /// Confirm the signup verification code; a success response carries the
    /// first token bundle.
    pub async fn verify_email(&self, request: &VerifyEmailRequest) -> Result<AuthResponse, AuthError> {
        self.post_flow("/auth/verify-email", encode(request), Persist::Credentials).await
    }

    /// Password sign-in.
    pub async fn signin(&self, request: &SigninRequest) -> Result<AuthResponse, AuthError> {
        self.post_flow("/auth/signin", encode(request), Persist::Credentials).await
    }

    /// Provider-issued identity sign-in (creates or links the account).
    pub async fn external_login(&self, request: &ExternalAuthRequest) -> Result<AuthResponse, AuthError> {
        self.post_flow("/auth/external-login", encode(request), Persist::Credentials).await
    }

    /// Exchange a GitHub authorization code through the backend.
    pub async fn github_callback(&self, code: &str) -> Result<AuthResponse, AuthError> {
        let request = CallbackRequest { code: code.to_owned() };
        self.post_flow("/auth/github-callback", encode(&request), Persist::Credentials).await
    }

    /// Exchange a LinkedIn authorization code through the backend.
    pub async fn linkedin_callback(&self, code: &str) -> Result<AuthResponse, AuthError> {
        let request = CallbackRequest { code: code.to_owned() };
        self.post_flow("/auth/linkedin-callback", encode(&request), Persist::Credentials).await
    }

    /// Request a password-reset OTP email. Purely server-side; no local
    /// state changes.
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<AuthResponse, AuthError> {
        self.post_flow("/auth/forgot-password", encode(request), Persist::No).await
    }

    /// Check a password-reset OTP. Success unlocks the reset server-side
    /// but does not itself change anything locally.
    pub async fn verify_otp(&self, request: &VerifyOtpRequest) -> Result<AuthResponse, AuthError> {
        self.post_flow("/auth/verify-otp", encode(request), Persist::No).await
    }

    /// Set a new password after OTP verification. The user signs in again
    /// afterwards; no credentials are written.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<AuthResponse, AuthError> {
        self.post_flow("/auth/reset-password", encode(request), Persist::No).await
    }

    /// Fetch the authoritative profile for the signed-in user and refresh
    /// the cached snapshot.
    pub async fn current_user(&self) -> Result<UserDto, AuthError> {
        let response = self.authed_request(HttpMethod::Get, &self.endpoint("/auth/me"), None).await?;
        let parsed: CurrentUserResponse =
            serde_json::from_str(&response.body).map_err(|err| ApiError::Decode(err.to_string()))?;
        match parsed.user {
            Some(user) if parsed.success => {
                self.credentials.update_profile(&user);
                Ok(user)
            }
            _ => Err(AuthError::Api(ApiError::Status {
                status: response.status,
                body: response.body,
            })),
        }
    }

    /// Sign out everywhere we can reach: best-effort backend logout and
    /// server-session teardown, then an unconditional local clear. Local
    /// state must never stay signed-in because the network was down.
    pub async fn logout(&self) {
        let bearer = self.credentials.access_token();
        let outcome = self
            .http
            .request(HttpMethod::Post, &self.endpoint("/auth/logout"), None, bearer.as_deref())
            .await;
        if let Err(err) = outcome {
            log::warn!("logout request failed: {err}");
        }
        self.destroy_server_session().await;
        self.credentials.clear();
    }

    // =========================================================================
    // TOKEN REFRESH
    // =========================================================================

    /// Refresh the token bundle unconditionally (single-flight).
    pub async fn refresh(&self) -> Result<(), AuthError> {
        let _gate = self.refresh_gate.lock().await;
        self.refresh_locked().await
    }

    /// Refresh only if `observed_token` is still the stored access token.
    /// A caller whose request was rejected while another refresh was in
    /// flight lands here after the gate opens and skips the second refresh.
    pub async fn refresh_if_stale(&self, observed_token: &str) -> Result<(), AuthError> {
        let _gate = self.refresh_gate.lock().await;
        match self.credentials.access_token() {
            None => Err(AuthError::SessionExpired),
            Some(current) if current != observed_token => Ok(()),
            Some(_) => self.refresh_locked().await,
        }
    }

    async fn refresh_locked(&self) -> Result<(), AuthError> {
        let Some(current) = self.credentials.load() else {
            return Err(AuthError::NotAuthenticated);
        };
        let request = RefreshTokenRequest {
            token: current.access_token.clone(),
            refresh_token: current.refresh_token.clone(),
        };
        let body = encode(&request);
        let outcome = self
            .http
            .request(HttpMethod::Post, &self.endpoint("/auth/refresh-token"), Some(&body), None)
            .await;

        match outcome {
            Ok(response) if response.is_success() => match serde_json::from_str::<RefreshResponse>(&response.body) {
                Ok(refreshed) => {
                    // Whole-record overwrite; the expiry is carried forward
                    // when the backend omits a new one.
                    self.credentials.save(&Credentials {
                        access_token: refreshed.token,
                        refresh_token: refreshed.refresh_token,
                        token_expiry: refreshed.token_expiry.unwrap_or(current.token_expiry),
                        user: current.user,
                    });
                    Ok(())
                }
                Err(err) => {
                    self.fail_session("undecodable refresh response");
                    Err(AuthError::Api(ApiError::Decode(err.to_string())))
                }
            },
            Ok(response) => {
                self.fail_session(&format!("refresh rejected ({})", response.status));
                Err(AuthError::SessionExpired)
            }
            Err(err) => {
                self.fail_session("refresh transport failure");
                Err(AuthError::Api(err))
            }
        }
    }

    fn fail_session(&self, reason: &str) {
        log::warn!("session terminated: {reason}");
        self.credentials.clear();
        navigate::hard_redirect(SIGNIN_REDIRECT);
    }

    /// Send an authenticated request with exactly one automatic
    /// refresh-and-retry on 401, keyed to the token that was rejected.
    /// A 401 on the retried request is fatal for the session.
    pub async fn authed_request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<HttpResponse, AuthError> {
        let Some(token) = self.credentials.access_token() else {
            return Err(AuthError::NotAuthenticated);
        };
        let response = self.http.request(method, path, body, Some(&token)).await?;
        if response.status != 401 {
            return Ok(response);
        }

        self.refresh_if_stale(&token).await?;
        let Some(fresh) = self.credentials.access_token() else {
            return Err(AuthError::SessionExpired);
        };
        let retry = self.http.request(method, path, body, Some(&fresh)).await?;
        if retry.status == 401 {
            self.fail_session("retried request rejected again");
            return Err(AuthError::SessionExpired);
        }
        Ok(retry)
    }

    // =========================================================================
    // SERVER SESSION
    // =========================================================================

    /// Create the cookie-backed server session from the current credential
    /// record. Fails without touching local state so callers (notably the
    /// onboarding commit) can retry.
    pub async fn establish_server_session(&self) -> Result<(), AuthError> {
        let credentials = self.credentials.load().ok_or(AuthError::NotAuthenticated)?;
        let body = session_request_body(&credentials);
        let response = self.http.request(HttpMethod::Post, SESSION_ENDPOINT, Some(&body), None).await?;
        if response.is_success() {
            Ok(())
        } else {
            Err(AuthError::Api(ApiError::Status {
                status: response.status,
                body: response.body,
            }))
        }
    }

    /// Read the server session, if the cookie still names a live one.
    /// Any failure reads as anonymous — this runs during bootstrap where
    /// errors must degrade, not propagate.
    pub async fn fetch_server_session(&self) -> Option<ServerSession> {
        match self.http.request(HttpMethod::Get, SESSION_ENDPOINT, None, None).await {
            Ok(response) if response.is_success() => parse_session_body(&response.body),
            Ok(_) => None,
            Err(err) => {
                log::warn!("server session fetch failed: {err}");
                None
            }
        }
    }

    /// Best-effort server-session teardown.
    pub async fn destroy_server_session(&self) {
        if let Err(err) = self.http.request(HttpMethod::Delete, SESSION_ENDPOINT, None, None).await {
            log::warn!("server session teardown failed: {err}");
        }
    }

    // =========================================================================
    // SHARED FLOW PLUMBING
    // =========================================================================

    async fn post_flow(&self, path: &str, body: serde_json::Value, persist: Persist) -> Result<AuthResponse, AuthError> {
        let response = self.http.request(HttpMethod::Post, &self.endpoint(path), Some(&body), None).await?;
        let parsed: Result<AuthResponse, _> = serde_json::from_str(&response.body);
        let auth = match parsed {
            Ok(auth) => auth,
            // Auth endpoints answer the same envelope for rejections; a body
            // that doesn't parse means we're not talking to the API we think.
            Err(err) if response.is_success() => {
                return Err(AuthError::Api(ApiError::Decode(err.to_string())));
            }
            Err(_) => {
                return Err(AuthError::Api(ApiError::Status {
                    status: response.status,
                    body: response.body,
                }));
            }
        };
        if persist == Persist::Credentials {
            self.apply_auth_response(&auth);
        }
        Ok(auth)
    }

    /// Persist the token bundle from a successful credentialed flow.
    /// A payload with a token but missing refresh token or expiry is never
    /// written — partial records are worse than none.
    fn apply_auth_response(&self, response: &AuthResponse) {
        if !response.success {
            return;
        }
        match (&response.token, &response.refresh_token, &response.token_expiry) {
            (Some(token), Some(refresh_token), Some(token_expiry)) => {
                self.credentials.save(&Credentials {
                    access_token: token.clone(),
                    refresh_token: refresh_token.clone(),
                    token_expiry: token_expiry.clone(),
                    user: response.user.clone(),
                });
            }
            (Some(_), _, _) => {
                log::warn!("incomplete credential payload; not persisting");
            }
            _ => {}
        }
    }
}

/// Whether a flow's success response carries a credential bundle to persist.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Persist {
    No,
    Credentials,
}

fn encode<T: Serialize>(value: &T) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|err| {
        log::warn!("request serialization failed: {err}");
        serde_json::Value::Null
    })
}
