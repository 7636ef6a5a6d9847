//! Public landing page.

use leptos::prelude::*;

/// Landing page — the only public page signed-in visitors are not bounced
/// away from.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1>"Talentboard"</h1>
            <p>"Hiring, onboarding, and your whole team in one place."</p>
            <div class="home-page__actions">
                <a href="/signin" class="btn btn--primary">
                    "Sign in"
                </a>
                <a href="/signup" class="btn">
                    "Create an account"
                </a>
            </div>
        </div>
    }
}
