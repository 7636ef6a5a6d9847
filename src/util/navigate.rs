//! Hard browser redirect helper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Router-level navigation normally goes through `leptos_router`. The one
//! exception is the token-refresh failure path, which runs inside the
//! request pipeline with no router context and must force a full page load
//! back to sign-in.

/// Replace the current page with `path` via `window.location`.
/// No-op outside a browser environment.
pub fn hard_redirect(path: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(path);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
    }
}
