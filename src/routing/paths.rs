//! Static route surface and path classification.
//!
//! DESIGN
//! ======
//! One configuration object replaces the forked guard copies the product
//! accumulated. Matching semantics are a deliberate contract: public pages
//! match exactly, protected pages match on segment-boundary prefix, and
//! API/framework/asset paths are neutral regardless of auth state.

#[cfg(test)]
#[path = "paths_test.rs"]
mod tests;

/// Classification of a requested path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Reachable signed-out; signed-in visitors are bounced to the landing
    /// page (except the root).
    Public,
    /// Requires authentication.
    Protected,
    /// Auth state is irrelevant (APIs, framework internals, assets, and
    /// anything outside the declared surface).
    Neutral,
}

/// The route surface the guard operates on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteConfig {
    /// Exact-match public pages.
    pub public_paths: &'static [&'static str],
    /// Prefix-match protected sections.
    pub protected_paths: &'static [&'static str],
    /// The unauthenticated root, exempt from the signed-in bounce.
    pub root_path: &'static str,
    /// Where signed-in visitors land.
    pub landing_path: &'static str,
    /// Where denied visitors are sent, with a `from` return parameter.
    pub signin_path: &'static str,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            public_paths: &[
                "/",
                "/signin",
                "/signup",
                "/forgot-password",
                "/reset-password",
                "/otp",
                "/github/callback",
                "/linkedin/callback",
            ],
            protected_paths: &[
                "/dashboard",
                "/setup-org",
                "/basic-details",
                "/org-preference",
                "/finish-setup",
            ],
            root_path: "/",
            landing_path: "/dashboard",
            signin_path: "/signin",
        }
    }
}

impl RouteConfig {
    /// Classify `path`. Paths outside the declared surface are neutral —
    /// the guard has no opinion on them.
    #[must_use]
    pub fn classify(&self, path: &str) -> RouteClass {
        if is_neutral(path) {
            return RouteClass::Neutral;
        }
        if self.public_paths.contains(&path) {
            return RouteClass::Public;
        }
        if self.protected_paths.iter().any(|base| prefix_match(path, base)) {
            return RouteClass::Protected;
        }
        RouteClass::Neutral
    }
}

/// API routes, framework internals, and static assets bypass the guard.
fn is_neutral(path: &str) -> bool {
    path.starts_with("/api") || path.starts_with("/_next") || path.starts_with("/favicon") || has_asset_extension(path)
}

fn has_asset_extension(path: &str) -> bool {
    const ASSET_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "gif", "webp", "ico", "css", "js"];

    let Some((_, extension)) = path.rsplit_once('.') else {
        return false;
    };
    // A slash after the dot means the dot was inside a directory name.
    !extension.contains('/') && ASSET_EXTENSIONS.contains(&extension)
}

/// Segment-boundary prefix: `/dashboard` matches `/dashboard` and
/// `/dashboard/reports`, but not `/dashboard-admin`.
fn prefix_match(path: &str, base: &str) -> bool {
    match path.strip_prefix(base) {
        Some("") => true,
        Some(rest) => rest.starts_with('/'),
        None => false,
    }
}
