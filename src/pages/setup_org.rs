//! Organization-setup entry page.
//!
//! First page of the onboarding wizard and the redirect target for any
//! later step that finds no draft.

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;

/// Wizard entry — no draft exists (or is required) yet.
#[component]
pub fn SetupOrgPage() -> impl IntoView {
    view! {
        <ProtectedLayout>
            <div class="setup-page">
                <h1>"Setup Organisation"</h1>
                <p>"Welcome to Talentboard! Let's get you set up."</p>
                <div class="setup-page__actions">
                    <a href="/basic-details" class="btn btn--primary">
                        "Create an Organisation"
                    </a>
                    <button class="btn" disabled=true>
                        "Join Existing Organisation"
                    </button>
                </div>
                <a href="/dashboard" class="setup-page__skip">
                    "Dashboard →"
                </a>
            </div>
        </ProtectedLayout>
    }
}
