//! Terminal onboarding step: confirm access and commit the setup.
//!
//! The confirmation doubles as the sensitive re-auth that arms sudo mode.
//! Draft deletion and server-session creation are one conceptual commit —
//! on failure the draft stays for retry.

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;
use crate::state::onboarding::OnboardingDraft;

/// Finish-setup page. Requires both a signed-in user and the draft; either
/// one missing routes back to the matching safe entry point.
#[component]
pub fn FinishSetupPage() -> impl IntoView {
    let draft = RwSignal::new(None::<OnboardingDraft>);
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    // Load prerequisites: stored user → sign-in; draft → flow entry.
    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if services.auth.credentials().stored_user().is_none() {
                navigate("/signin", leptos_router::NavigateOptions::default());
                return;
            }
            match services.drafts.load() {
                Some(loaded) => draft.set(Some(loaded)),
                None => navigate(
                    crate::state::onboarding::FLOW_ENTRY_PATH,
                    leptos_router::NavigateOptions::default(),
                ),
            }
        });
    }

    let on_confirm = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        notice.set("Finishing setup...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let committed = crate::state::onboarding::complete_setup(
                    &services.auth,
                    &services.drafts,
                    &services.sudo,
                )
                .await;
                match committed {
                    Ok(()) => navigate("/dashboard", leptos_router::NavigateOptions::default()),
                    Err(err) => {
                        // Draft retained; the visitor can confirm again.
                        notice.set(super::transport_notice(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
        }
    };

    let organization_name = move || {
        draft
            .get()
            .map_or_else(String::new, |d| d.organization_name)
    };
    let member_count = move || draft.get().map_or(0, |d| d.members.len());

    view! {
        <ProtectedLayout>
            <div class="setup-page">
                <h1>"Confirm access"</h1>
                <Show when=move || draft.get().is_some()>
                    <div class="setup-page__summary">
                        <p>{move || format!("Organisation: {}", organization_name())}</p>
                        <p>{move || format!("Members invited: {}", member_count())}</p>
                    </div>
                </Show>
                <button class="btn btn--primary" on:click=on_confirm disabled=move || busy.get()>
                    "Confirm & finish"
                </button>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
            </div>
        </ProtectedLayout>
    }
}
