//! Forgot-password page: requests the one-time reset OTP.

use leptos::prelude::*;

/// Forgot-password page. Success marks the reset flow as pending and moves
/// on to OTP entry; the code itself lives server-side only.
#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
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
        let email_value = email.get().trim().to_owned();
        if email_value.is_empty() {
            notice.set("Enter your email first.".to_owned());
            return;
        }
        busy.set(true);
        notice.set("Sending reset code...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::ForgotPasswordRequest {
                    email: email_value.clone(),
                };
                match services.auth.forgot_password(&request).await {
                    Ok(response) if response.success => {
                        services.flow.begin_reset(&email_value);
                        navigate("/otp", leptos_router::NavigateOptions::default());
                    }
                    Ok(response) => {
                        notice.set(super::message_or(&response.message, "Could not send a reset code."));
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
            let _ = email_value;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Forgot password"</h1>
                <p class="auth-card__subtitle">"We'll email you a 6-digit code. It expires in 10 minutes."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Send code"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
                <div class="auth-links">
                    <a href="/signin">"Back to sign in"</a>
                </div>
            </div>
        </div>
    }
}
