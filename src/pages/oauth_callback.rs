//! OAuth provider callback pages (GitHub, LinkedIn).
//!
//! The provider redirected here with either `code` or `error` in the query
//! string. A present `error` or absent `code` is a hard failure back to
//! sign-in; otherwise the code is exchanged through the backend, which
//! answers with the usual credential bundle.

#[cfg(test)]
#[path = "oauth_callback_test.rs"]
mod tests;

use leptos::prelude::*;

/// Which provider a callback page exchanges codes for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OauthProvider {
    GitHub,
    LinkedIn,
}

/// Provider app registration, baked in at build time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OauthConfig {
    pub client_id: &'static str,
    pub redirect_uri: &'static str,
}

impl OauthProvider {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
        }
    }

    /// Registration from compile-time environment. `None` disables the
    /// provider's sign-in button.
    #[must_use]
    pub fn config(self) -> Option<OauthConfig> {
        match self {
            Self::GitHub => Some(OauthConfig {
                client_id: option_env!("TALENTBOARD_GITHUB_CLIENT_ID")?,
                redirect_uri: option_env!("TALENTBOARD_GITHUB_REDIRECT_URI")?,
            }),
            Self::LinkedIn => Some(OauthConfig {
                client_id: option_env!("TALENTBOARD_LINKEDIN_CLIENT_ID")?,
                redirect_uri: option_env!("TALENTBOARD_LINKEDIN_REDIRECT_URI")?,
            }),
        }
    }

    /// Provider authorization page for this app registration.
    #[must_use]
    pub fn authorize_url_with(self, config: &OauthConfig) -> String {
        let redirect_uri = urlencoding::encode(config.redirect_uri);
        match self {
            Self::GitHub => format!(
                "https://github.com/login/oauth/authorize?client_id={}&redirect_uri={redirect_uri}&scope=user:email",
                config.client_id
            ),
            Self::LinkedIn => format!(
                "https://www.linkedin.com/oauth/v2/authorization?response_type=code&client_id={}&redirect_uri={redirect_uri}&scope=openid%20profile%20email",
                config.client_id
            ),
        }
    }

    /// Authorization URL when the provider is configured for this build.
    #[must_use]
    pub fn authorize_url(self) -> Option<String> {
        self.config().map(|config| self.authorize_url_with(&config))
    }
}

/// What to do with the redirect parameters.
#[cfg(any(test, feature = "hydrate"))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CallbackOutcome {
    /// Exchange this authorization code with the backend.
    Exchange(String),
    /// Hard failure; route back to sign-in with this notice.
    Failure(&'static str),
}

/// Classify the provider redirect. An explicit error wins over everything;
/// a missing or empty code is equally fatal.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn callback_outcome(code: Option<String>, error: Option<String>) -> CallbackOutcome {
    if error.is_some() {
        return CallbackOutcome::Failure("Authorization was denied.");
    }
    match code {
        Some(code) if !code.trim().is_empty() => CallbackOutcome::Exchange(code),
        _ => CallbackOutcome::Failure("No authorization code received."),
    }
}

/// `GET /github/callback`.
#[component]
pub fn GitHubCallbackPage() -> impl IntoView {
    view! { <CallbackPage provider=OauthProvider::GitHub/> }
}

/// `GET /linkedin/callback`.
#[component]
pub fn LinkedInCallbackPage() -> impl IntoView {
    view! { <CallbackPage provider=OauthProvider::LinkedIn/> }
}

#[component]
fn CallbackPage(provider: OauthProvider) -> impl IntoView {
    let notice = RwSignal::new(format!("Completing {} login...", provider.label()));

    #[cfg(feature = "hydrate")]
    {
        let services = expect_context::<crate::app::AppServices>();
        let auth = expect_context::<RwSignal<crate::state::auth::AuthState>>();
        let navigate = leptos_router::hooks::use_navigate();
        let query = leptos_router::hooks::use_query_map();

        Effect::new(move || {
            let params = query.get_untracked();
            let outcome = callback_outcome(params.get("code"), params.get("error"));
            let services = services.clone();
            let navigate = navigate.clone();
            match outcome {
                CallbackOutcome::Failure(message) => {
                    notice.set(message.to_owned());
                    navigate("/signin", leptos_router::NavigateOptions::default());
                }
                CallbackOutcome::Exchange(code) => {
                    leptos::task::spawn_local(async move {
                        let exchanged = match provider {
                            OauthProvider::GitHub => services.auth.github_callback(&code).await,
                            OauthProvider::LinkedIn => services.auth.linkedin_callback(&code).await,
                        };
                        match exchanged {
                            Ok(response) if response.success => {
                                if let Some(user) = response.user {
                                    auth.update(|state| state.login(user));
                                }
                                if let Err(err) = services.auth.establish_server_session().await {
                                    log::warn!("server session creation failed: {err}");
                                }
                                navigate("/setup-org", leptos_router::NavigateOptions::default());
                            }
                            Ok(response) => {
                                notice.set(super::message_or(&response.message, "Login failed."));
                                navigate("/signin", leptos_router::NavigateOptions::default());
                            }
                            Err(err) => {
                                notice.set(super::transport_notice(&err));
                                navigate("/signin", leptos_router::NavigateOptions::default());
                            }
                        }
                    });
                }
            }
        });
    }

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <div class="auth-card__spinner"></div>
                <p class="auth-message">{move || notice.get()}</p>
            </div>
        </div>
    }
}
