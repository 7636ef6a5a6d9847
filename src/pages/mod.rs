//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Pages own route-scoped orchestration only: client-side validation, the
//! imperative session-service calls, and the follow-up navigation. Markup
//! is deliberately minimal — the product's visual pages are a separate
//! concern. Validation helpers are plain functions so the decision logic
//! tests natively.

pub mod basic_details;
pub mod dashboard;
pub mod finish_setup;
pub mod forgot_password;
pub mod home;
pub mod oauth_callback;
pub mod org_preference;
pub mod otp;
pub mod reset_password;
pub mod setup_org;
pub mod signin;
pub mod signup;

#[cfg(test)]
#[path = "notices_test.rs"]
mod tests;

#[cfg(any(test, feature = "hydrate"))]
use crate::auth::service::AuthError;

/// Generic, retryable notice for transport failures. Backend rejection
/// messages are surfaced verbatim instead; this path is only for errors
/// with nothing user-readable in them.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn transport_notice(err: &AuthError) -> String {
    log::warn!("auth request failed: {err}");
    "Something went wrong. Please try again.".to_owned()
}

/// Prefer the backend's message, falling back when it sent none.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn message_or(message: &str, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_owned()
    } else {
        message.to_owned()
    }
}
