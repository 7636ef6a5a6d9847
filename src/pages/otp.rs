//! OTP page serving two flows: post-signup email verification and
//! password-reset OTP entry.
//!
//! Which flow is active is decided by the sessionStorage flow keys; with
//! neither present there is nothing to verify and the visitor is sent back
//! to sign-in.

#[cfg(test)]
#[path = "otp_test.rs"]
mod tests;

use leptos::prelude::*;

pub(crate) const OTP_LEN: usize = 6;

/// Which flow this OTP entry belongs to, with the email it is for.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum OtpMode {
    VerifyEmail(String),
    ResetPassword(String),
}

/// Resolve the active flow from the stored flow keys. A pending email
/// verification takes precedence over a pending reset.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn resolve_otp_mode(verification_email: Option<String>, reset_email: Option<String>) -> Option<OtpMode> {
    if let Some(email) = verification_email {
        return Some(OtpMode::VerifyEmail(email));
    }
    reset_email.map(OtpMode::ResetPassword)
}

/// Validate the entered code: exactly six digits.
pub(crate) fn validate_otp_input(code: &str) -> Result<String, &'static str> {
    let code = code.trim();
    if code.len() != OTP_LEN || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err("Enter the 6-digit code.");
    }
    Ok(code.to_owned())
}

/// OTP entry page.
#[component]
pub fn OtpPage() -> impl IntoView {
    let code = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    // No flow in progress → nothing to verify here.
    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let mode = resolve_otp_mode(services.flow.verification_email(), services.flow.reset_email());
            if mode.is_none() {
                navigate("/signin", leptos_router::NavigateOptions::default());
            }
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let code_value = match validate_otp_input(&code.get()) {
            Ok(value) => value,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set("Verifying...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mode = resolve_otp_mode(services.flow.verification_email(), services.flow.reset_email());
                match mode {
                    Some(OtpMode::VerifyEmail(email)) => {
                        let request = crate::net::types::VerifyEmailRequest {
                            email,
                            verification_code: code_value,
                        };
                        match services.auth.verify_email(&request).await {
                            Ok(response) if response.success => {
                                services.flow.clear_verification();
                                if let Some(user) = response.user {
                                    auth.update(|state| state.login(user));
                                }
                                if let Err(err) = services.auth.establish_server_session().await {
                                    log::warn!("server session creation failed: {err}");
                                }
                                navigate("/setup-org", leptos_router::NavigateOptions::default());
                            }
                            Ok(response) => {
                                notice.set(super::message_or(&response.message, "Verification failed."));
                                busy.set(false);
                            }
                            Err(err) => {
                                notice.set(super::transport_notice(&err));
                                busy.set(false);
                            }
                        }
                    }
                    Some(OtpMode::ResetPassword(email)) => {
                        let request = crate::net::types::VerifyOtpRequest { email, otp: code_value };
                        match services.auth.verify_otp(&request).await {
                            Ok(response) if response.success => {
                                navigate("/reset-password", leptos_router::NavigateOptions::default());
                            }
                            Ok(response) => {
                                notice.set(super::message_or(&response.message, "Invalid or expired code."));
                                busy.set(false);
                            }
                            Err(err) => {
                                notice.set(super::transport_notice(&err));
                                busy.set(false);
                            }
                        }
                    }
                    None => {
                        navigate("/signin", leptos_router::NavigateOptions::default());
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = code_value;
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Enter verification code"</h1>
                <p class="auth-card__subtitle">"We sent a 6-digit code to your email. It expires in 10 minutes."</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input auth-input--code"
                        type="text"
                        maxlength="6"
                        placeholder="123456"
                        prop:value=move || code.get()
                        on:input=move |ev| code.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Verify"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
            </div>
        </div>
    }
}
