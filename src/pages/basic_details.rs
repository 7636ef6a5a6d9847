//! Organization-details step: creates the wizard draft.

#[cfg(test)]
#[path = "basic_details_test.rs"]
mod tests;

use leptos::prelude::*;

use crate::components::protected_layout::ProtectedLayout;

/// Validate the organization form before creating the draft.
pub(crate) fn validate_org_input(name: &str, contact_email: &str) -> Result<(String, String), &'static str> {
    let name = name.trim();
    let contact_email = contact_email.trim();
    if name.is_empty() {
        return Err("Enter an organisation name.");
    }
    if contact_email.is_empty() || !contact_email.contains('@') {
        return Err("Enter a valid contact email.");
    }
    Ok((name.to_owned(), contact_email.to_owned()))
}

/// First real wizard step. Submitting writes a fresh draft at
/// `organization-created` and moves on to the member step; this page never
/// requires an existing draft.
#[component]
pub fn BasicDetailsPage() -> impl IntoView {
    let organization_name = RwSignal::new(String::new());
    let contact_email = RwSignal::new(String::new());
    let organization_type = RwSignal::new("startup".to_owned());
    let ai_agent_addon = RwSignal::new(false);
    let notice = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let validated = validate_org_input(&organization_name.get(), &contact_email.get());
        let (name_value, email_value) = match validated {
            Ok(values) => values,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            let draft = crate::state::onboarding::OnboardingDraft::new(
                name_value,
                email_value,
                organization_type.get(),
                ai_agent_addon.get(),
                crate::util::clock::now_ms(),
            );
            services.drafts.save(&draft);
            navigate("/org-preference", leptos_router::NavigateOptions::default());
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name_value, email_value);
        }
    };

    view! {
        <ProtectedLayout>
            <div class="setup-page">
                <h1>"Tell us about your organisation"</h1>
                <form class="setup-form" on:submit=on_submit>
                    <label class="setup-form__label">
                        "Organisation name"
                        <input
                            class="setup-form__input"
                            type="text"
                            placeholder="Acme Inc."
                            prop:value=move || organization_name.get()
                            on:input=move |ev| organization_name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="setup-form__label">
                        "Contact email"
                        <input
                            class="setup-form__input"
                            type="email"
                            placeholder="ops@acme.example"
                            prop:value=move || contact_email.get()
                            on:input=move |ev| contact_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="setup-form__label">
                        "Organisation type"
                        <select
                            class="setup-form__input"
                            on:change=move |ev| organization_type.set(event_target_value(&ev))
                        >
                            <option value="startup">"Startup"</option>
                            <option value="agency">"Agency"</option>
                            <option value="enterprise">"Enterprise"</option>
                        </select>
                    </label>
                    <label class="setup-form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || ai_agent_addon.get()
                            on:change=move |_| ai_agent_addon.update(|v| *v = !*v)
                        />
                        "Enable the AI agent add-on"
                    </label>
                    <button class="btn btn--primary" type="submit">
                        "Next"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
            </div>
        </ProtectedLayout>
    }
}
