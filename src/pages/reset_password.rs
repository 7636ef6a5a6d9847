//! Reset-password page: sets the new password after OTP verification.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod tests;

use leptos::prelude::*;

/// Validate the new-password form.
pub(crate) fn validate_reset_input(password: &str, confirm: &str) -> Result<String, &'static str> {
    if password.is_empty() {
        return Err("Enter a new password.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(password.to_owned())
}

/// Reset-password page. Requires a pending reset flow — without one the
/// visitor is sent back to the start of the flow. Success clears the flow
/// key and ends at sign-in; no credentials are written.
#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    // No pending reset → back to the flow entry.
    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            if services.flow.reset_email().is_none() {
                navigate("/forgot-password", leptos_router::NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let password_value = match validate_reset_input(&password.get(), &confirm.get()) {
            Ok(value) => value,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set("Updating password...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let Some(email) = services.flow.reset_email() else {
                    navigate("/forgot-password", leptos_router::NavigateOptions::default());
                    return;
                };
                let request = crate::net::types::ResetPasswordRequest {
                    email,
                    new_password: password_value,
                };
                match services.auth.reset_password(&request).await {
                    Ok(response) if response.success => {
                        services.flow.clear_reset();
                        navigate("/signin", leptos_router::NavigateOptions::default());
                    }
                    Ok(response) => {
                        notice.set(super::message_or(&response.message, "Password reset failed."));
                        busy.set(false);
                    }
                    Err(err) => {
                        notice.set(super::transport_notice(&err));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = password_value;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Choose a new password"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="New password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Reset password"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
