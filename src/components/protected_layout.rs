//! Client-side route guard wrapping protected page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! The navigation guard already filtered this route, but its view of the
//! session can be stale in a long-lived tab (the token can expire between
//! the edge check and the mount). This layout re-resolves session status
//! after hydration and is the second line of defense: while the check runs
//! it shows a spinner, on a dead session it navigates to sign-in and
//! renders nothing, and only a live session renders children.
//!
//! The re-check applies the same rule as the navigation guard — server
//! session first, valid credential record as fallback — so the two guards
//! can never disagree and bounce a visitor back and forth.

#[cfg(test)]
#[path = "protected_layout_test.rs"]
mod tests;

use leptos::children::ChildrenFn;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::app::AppServices;
use crate::routing::guard::signin_redirect;

/// The layout's state machine. `Loading` and `Ready` come straight from
/// the async session re-check; `Unauthenticated` is terminal here and
/// only exists long enough for the sign-in navigation to land.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Loading,
    Unauthenticated,
    Ready,
}

/// Map the async re-check result (`None` = still in flight) onto the
/// layout state machine.
#[must_use]
pub fn resolve_status(resolution: Option<bool>) -> SessionStatus {
    match resolution {
        None => SessionStatus::Loading,
        Some(false) => SessionStatus::Unauthenticated,
        Some(true) => SessionStatus::Ready,
    }
}

/// Wrapper for protected page content.
#[component]
pub fn ProtectedLayout(children: ChildrenFn) -> impl IntoView {
    let services = expect_context::<AppServices>();
    let routes = services.routes.clone();
    let session = LocalResource::new(move || {
        let services = services.clone();
        async move {
            services.auth.fetch_server_session().await.is_some() || services.auth.is_authenticated()
        }
    });

    // Dead session → sign-in, carrying the denied location.
    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move || {
        if resolve_status(session.get()) == SessionStatus::Unauthenticated {
            let target = signin_redirect(&routes, &location.pathname.get_untracked(), &location.search.get_untracked());
            navigate(&target, NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || resolve_status(session.get()) == SessionStatus::Ready
            fallback=move || {
                view! {
                    <Show when=move || resolve_status(session.get()) == SessionStatus::Loading>
                        <div class="protected-layout__loading">
                            <div class="protected-layout__spinner"></div>
                            <p>"Loading..."</p>
                        </div>
                    </Show>
                }
            }
        >
            {children()}
        </Show>
    }
}
