//! Dashboard page — the authenticated landing screen.

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;
use crate::state::auth::AuthState;

/// Dashboard page. The real product renders cards and charts here; this
/// shell only wires the authenticated frame: greeting from the auth
/// context and sign-out.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let greeting = move || {
        auth.get()
            .user
            .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.full_name))
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                services.auth.logout().await;
                auth.update(AuthState::reset);
                navigate("/signin", leptos_router::NavigateOptions::default());
            });
        }
    };

    view! {
        <ProtectedLayout>
            <div class="dashboard-page">
                <header class="dashboard-page__header">
                    <h1>{greeting}</h1>
                    <button class="btn" on:click=on_logout>
                        "Sign out"
                    </button>
                </header>
                <div class="dashboard-page__body">
                    <p>"Your hiring pipeline will appear here."</p>
                    <a href="/setup-org">"Set up your organisation"</a>
                </div>
            </div>
        </ProtectedLayout>
    }
}
