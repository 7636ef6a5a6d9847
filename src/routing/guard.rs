//! The navigation guard: pure allow/redirect decisions.
//!
//! DESIGN
//! ======
//! `guard` is idempotent and side-effect-free; it runs on every navigation
//! (including prefetches) so it must never touch the network. The denied
//! protected path round-trips through the `from` parameter so sign-in can
//! send the visitor back where they were headed.

#[cfg(test)]
#[path = "guard_test.rs"]
mod tests;

use super::paths::{RouteClass, RouteConfig};

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(String),
}

/// Decide whether a navigation to `path` (with raw query string `query`,
/// no leading `?`) may proceed for a visitor whose authentication state is
/// `authenticated`.
#[must_use]
pub fn guard(config: &RouteConfig, path: &str, query: &str, authenticated: bool) -> GuardDecision {
    match config.classify(path) {
        RouteClass::Neutral => GuardDecision::Allow,
        RouteClass::Public => {
            if authenticated && path != config.root_path {
                GuardDecision::Redirect(config.landing_path.to_owned())
            } else {
                GuardDecision::Allow
            }
        }
        RouteClass::Protected => {
            if authenticated {
                GuardDecision::Allow
            } else {
                GuardDecision::Redirect(signin_redirect(config, path, query))
            }
        }
    }
}

/// Build the sign-in redirect carrying the denied path + query, URL-encoded.
#[must_use]
pub fn signin_redirect(config: &RouteConfig, path: &str, query: &str) -> String {
    let query = query.trim_start_matches('?');
    let mut from = path.to_owned();
    if !query.is_empty() {
        from.push('?');
        from.push_str(query);
    }
    format!("{}?from={}", config.signin_path, urlencoding::encode(&from))
}

/// Recover the return target from a sign-in `from` parameter. Only
/// same-origin absolute paths are honored; anything else falls back to the
/// landing page.
#[must_use]
pub fn return_target(config: &RouteConfig, from: Option<&str>) -> String {
    match from {
        Some(raw) => match urlencoding::decode(raw) {
            Ok(decoded) if decoded.starts_with('/') && !decoded.starts_with("//") => decoded.into_owned(),
            _ => config.landing_path.to_owned(),
        },
        None => config.landing_path.to_owned(),
    }
}
