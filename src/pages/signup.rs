//! Sign-up page: registration form feeding the email-verification flow.

#[cfg(test)]
#[path = "signup_test.rs"]
mod tests;

use leptos::prelude::*;

/// Validate the sign-up form before any network call.
pub(crate) fn validate_signup_input(
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(String, String, String), &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err("Enter your name, email, and password.");
    }
    if password.len() < 8 {
        return Err("Password must be at least 8 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok((full_name.to_owned(), email.to_owned(), password.to_owned()))
}

/// Sign-up page. A successful registration sends a verification email; no
/// credentials exist until the code is confirmed on the OTP page.
#[component]
pub fn SignupPage() -> impl IntoView {
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let validated = validate_signup_input(&full_name.get(), &email.get(), &password.get(), &confirm.get());
        let (name_value, email_value, password_value) = match validated {
            Ok(values) => values,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set("Creating your account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::SignupRequest {
                    email: email_value.clone(),
                    password: password_value,
                    full_name: name_value,
                };
                match services.auth.signup(&request).await {
                    Ok(response) if response.success => {
                        services.flow.begin_verification(&email_value);
                        navigate("/otp", leptos_router::NavigateOptions::default());
                    }
                    Ok(response) => {
                        notice.set(super::message_or(&response.message, "Sign-up failed."));
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
            let _ = (name_value, email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign up"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href="/signin">"Already have an account? Sign in"</a>
                </div>
            </div>
        </div>
    }
}
