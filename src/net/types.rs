//! Wire DTOs for the backend auth API.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase JSON exactly so serde
//! round-trips stay lossless; the same `UserDto` snapshot is what gets
//! cached in the credential store. Profiles are replaced wholesale, never
//! patched field by field.

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;

use serde::{Deserialize, Serialize};

/// Registration payload for `POST /auth/signup`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub full_name: String,
}

/// Credentials payload for `POST /auth/signin`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/verify-email` (post-signup email verification).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyEmailRequest {
    pub email: String,
    pub verification_code: String,
}

/// Payload for `POST /auth/forgot-password`; triggers a one-time OTP email
/// with a server-side expiry (observed as 10 minutes).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Payload for `POST /auth/verify-otp` (password-reset OTP check).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

/// Payload for `POST /auth/reset-password`; requires a previously verified
/// OTP server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

/// Payload for `POST /auth/refresh-token`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshTokenRequest {
    pub token: String,
    pub refresh_token: String,
}

/// Payload for `POST /auth/external-login` (provider-issued identity).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalAuthRequest {
    pub provider: String,
    pub email: String,
    pub full_name: String,
    pub external_id: String,
}

/// Payload for the provider callback exchanges
/// (`POST /auth/github-callback`, `POST /auth/linkedin-callback`).
///
/// The capitalized field name matches the backend DTO.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    #[serde(rename = "Code")]
    pub code: String,
}

/// User profile snapshot as returned by the backend and cached locally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub email: String,
    pub full_name: String,
    #[serde(default)]
    pub created_at: String,
    pub last_login_at: Option<String>,
    pub profile_picture_url: Option<String>,
    pub o_auth_provider: Option<String>,
}

/// Response envelope shared by every auth endpoint. Token fields are only
/// present on flows that establish a session (signin, verify-email, OAuth
/// callback); `message` carries the user-facing outcome either way.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub token: Option<String>,
    pub refresh_token: Option<String>,
    pub token_expiry: Option<String>,
    pub user: Option<UserDto>,
}

/// Response for `POST /auth/refresh-token`. The backend may omit the new
/// expiry, in which case the stored one is carried forward.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub token: String,
    pub refresh_token: String,
    pub token_expiry: Option<String>,
}

/// Response for `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub success: bool,
    pub user: Option<UserDto>,
}
