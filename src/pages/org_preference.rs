//! Member-invite step of the onboarding wizard.

#[cfg(test)]
#[path = "org_preference_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;
use crate::state::onboarding::DraftMember;

/// Build a draft member from an invite email. The local part doubles as
/// username and display name until the invitee signs up properly.
pub(crate) fn member_from_email(email: &str, index: usize) -> Option<DraftMember> {
    let email = email.trim().to_ascii_lowercase();
    let (local, domain) = email.split_once('@')?;
    if local.is_empty() || domain.is_empty() {
        return None;
    }
    Some(DraftMember {
        id: (index + 1).to_string(),
        username: local.to_owned(),
        full_name: local.to_owned(),
        email,
        avatar: None,
    })
}

/// Member step. Requires the draft; without one the visitor goes back to
/// the flow entry. Submitting (with or without members) performs the
/// whole-record draft update and advances to finish-setup.
#[component]
pub fn OrgPreferencePage() -> impl IntoView {
    let invite_email = RwSignal::new(String::new());
    let members = RwSignal::new(Vec::<DraftMember>::new());
    let notice = RwSignal::new(String::new());
    let organization_name = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    // No draft → this step cannot resume; back to the flow entry.
    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            match services.drafts.load() {
                Some(draft) => {
                    organization_name.set(draft.organization_name);
                    members.set(draft.members);
                }
                None => navigate(
                    crate::state::onboarding::FLOW_ENTRY_PATH,
                    leptos_router::NavigateOptions::default(),
                ),
            }
        });
    }

    let on_add = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let next_index = members.get().len();
        match member_from_email(&invite_email.get(), next_index) {
            Some(member) => {
                members.update(|list| list.push(member));
                invite_email.set(String::new());
                notice.set(String::new());
            }
            None => notice.set("Enter a valid email to invite.".to_owned()),
        }
    };

    let commit_step = move || {
        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            let picked = members.get();
            match services.drafts.record_members(picked, crate::util::clock::now_ms()) {
                Some(_) => navigate("/finish-setup", leptos_router::NavigateOptions::default()),
                None => navigate(
                    crate::state::onboarding::FLOW_ENTRY_PATH,
                    leptos_router::NavigateOptions::default(),
                ),
            }
        }
    };

    let on_continue = {
        let commit_step = commit_step.clone();
        move |_| commit_step()
    };
    let on_skip = move |_| {
        members.set(Vec::new());
        commit_step();
    };

    view! {
        <ProtectedLayout>
            <div class="setup-page">
                <h1>"Invite your team"</h1>
                <Show when=move || !organization_name.get().is_empty()>
                    <p class="setup-page__subtitle">
                        {move || format!("Members will join {}.", organization_name.get())}
                    </p>
                </Show>
                <form class="setup-form" on:submit=on_add>
                    <input
                        class="setup-form__input"
                        type="email"
                        placeholder="teammate@example.com"
                        prop:value=move || invite_email.get()
                        on:input=move |ev| invite_email.set(event_target_value(&ev))
                    />
                    <button class="btn" type="submit">
                        "Add"
                    </button>
                </form>
                <ul class="setup-page__members">
                    {move || {
                        members
                            .get()
                            .into_iter()
                            .map(|member| view! { <li>{member.email}</li> })
                            .collect::<Vec<_>>()
                    }}
                </ul>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
                <div class="setup-page__actions">
                    <button class="btn btn--primary" on:click=on_continue>
                        "Continue"
                    </button>
                    <button class="btn" on:click=on_skip>
                        "Skip for now"
                    </button>
                </div>
            </div>
        </ProtectedLayout>
    }
}
