//! Sign-in page: password credentials plus the `from` return redirect.

#[cfg(test)]
#[path = "signin_test.rs"]
mod tests;

use leptos::prelude::*;

/// Validate the sign-in form before any network call.
pub(crate) fn validate_signin_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// Sign-in page. A successful sign-in writes the credential record (in the
/// session service), creates the cookie session, and returns the visitor
/// to the `from` target the guard recorded — or the dashboard.
#[component]
pub fn SigninPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    let services = expect_context::<crate::app::AppServices>();
    #[cfg(feature = "hydrate")]
    let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();
    #[cfg(feature = "hydrate")]
    let query = leptos_router::hooks::use_query_map();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_signin_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(msg) => {
                notice.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        notice.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let services = services.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::types::SigninRequest {
                    email: email_value,
                    password: password_value,
                };
                match services.auth.signin(&request).await {
                    Ok(response) if response.success => {
                        if let Some(user) = response.user {
                            auth.update(|state| state.login(user));
                        }
                        if let Err(err) = services.auth.establish_server_session().await {
                            log::warn!("server session creation failed: {err}");
                        }
                        let from = query.get_untracked().get("from");
                        let target = crate::routing::guard::return_target(&services.routes, from.as_deref());
                        navigate(&target, leptos_router::NavigateOptions::default());
                    }
                    Ok(response) => {
                        notice.set(super::message_or(&response.message, "Sign-in failed."));
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
            let _ = (email_value, password_value);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <form class="auth-form" on:submit=on_submit>
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
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Sign in"
                    </button>
                </form>
                <Show when=move || !notice.get().is_empty()>
                    <p class="auth-message">{move || notice.get()}</p>
                </Show>
                <div class="auth-providers">
                    {crate::pages::oauth_callback::OauthProvider::GitHub
                        .authorize_url()
                        .map(|url| view! { <a href=url class="btn">"Continue with GitHub"</a> })}
                    {crate::pages::oauth_callback::OauthProvider::LinkedIn
                        .authorize_url()
                        .map(|url| view! { <a href=url class="btn">"Continue with LinkedIn"</a> })}
                </div>
                <div class="auth-links">
                    <a href="/forgot-password">"Forgot password?"</a>
                    <a href="/signup">"Create an account"</a>
                </div>
            </div>
        </div>
    }
}
