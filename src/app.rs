//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::{NavigateOptions, StaticSegment};

use crate::auth::credentials::CredentialStore;
use crate::auth::flow::FlowStore;
use crate::auth::service::SessionService;
use crate::auth::sudo::SudoMode;
use crate::net::api::{ApiConfig, GlooClient};
use crate::pages::basic_details::BasicDetailsPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::finish_setup::FinishSetupPage;
use crate::pages::forgot_password::ForgotPasswordPage;
use crate::pages::home::HomePage;
use crate::pages::oauth_callback::{GitHubCallbackPage, LinkedInCallbackPage};
use crate::pages::org_preference::OrgPreferencePage;
use crate::pages::otp::OtpPage;
use crate::pages::reset_password::ResetPasswordPage;
use crate::pages::setup_org::SetupOrgPage;
use crate::pages::signin::SigninPage;
use crate::pages::signup::SignupPage;
use crate::routing::guard::{GuardDecision, guard};
use crate::routing::paths::RouteConfig;
use crate::state::auth::AuthState;
use crate::util::storage::BrowserStorage;

/// Shared service handles provided to every page through context.
///
/// One constructed instance per tab; pages never reach for storage or the
/// network directly.
#[derive(Clone)]
pub struct AppServices {
    pub auth: Arc<SessionService<GlooClient, BrowserStorage>>,
    pub drafts: Arc<crate::state::onboarding::DraftStore<BrowserStorage>>,
    pub flow: Arc<FlowStore<BrowserStorage>>,
    pub sudo: Arc<SudoMode<BrowserStorage>>,
    pub routes: RouteConfig,
}

impl AppServices {
    #[must_use]
    pub fn new() -> Self {
        let config = ApiConfig::default();
        Self {
            auth: Arc::new(SessionService::new(
                GlooClient::new(config.timeout_ms),
                CredentialStore::new(BrowserStorage::local()),
                &config,
            )),
            drafts: Arc::new(crate::state::onboarding::DraftStore::new(BrowserStorage::local())),
            // Flow keys are tab-scoped; an abandoned OTP flow dies with the tab.
            flow: Arc::new(FlowStore::new(BrowserStorage::session())),
            sudo: Arc::new(SudoMode::new(BrowserStorage::local())),
            routes: RouteConfig::default(),
        }
    }
}

impl Default for AppServices {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the service handles and the reconciled auth state, bootstraps
/// session resolution, and sets up client-side routing behind the
/// navigation guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let services = AppServices::new();
    provide_context(services.clone());

    let auth = RwSignal::new(AuthState::resolving());
    provide_context(auth);

    // Bootstrap: resolve the server session and the credential store into
    // the shared auth state.
    #[cfg(feature = "hydrate")]
    {
        let services = services.clone();
        Effect::new(move || {
            let services = services.clone();
            leptos::task::spawn_local(async move {
                let state = crate::state::auth::resolve_session(&services.auth).await;
                auth.update(|current| current.apply(&state));
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        auth.update(|current| current.apply(&crate::state::auth::SessionState::Anonymous));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/talentboard.css"/>
        <Title text="Talentboard"/>

        <Router>
            <NavigationGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("forgot-password") view=ForgotPasswordPage/>
                <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                <Route path=StaticSegment("otp") view=OtpPage/>
                <Route path=(StaticSegment("github"), StaticSegment("callback")) view=GitHubCallbackPage/>
                <Route path=(StaticSegment("linkedin"), StaticSegment("callback")) view=LinkedInCallbackPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("setup-org") view=SetupOrgPage/>
                <Route path=StaticSegment("basic-details") view=BasicDetailsPage/>
                <Route path=StaticSegment("org-preference") view=OrgPreferencePage/>
                <Route path=StaticSegment("finish-setup") view=FinishSetupPage/>
            </Routes>
        </Router>
    }
}

/// Edge-of-navigation guard: evaluates the pure guard on every location
/// change and issues the redirect it decides on. While the session is
/// still resolving it stays out of the way — `ProtectedLayout` covers the
/// window until then.
#[component]
fn NavigationGuard() -> impl IntoView {
    let services = expect_context::<AppServices>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if state.loading {
            return;
        }
        let path = location.pathname.get();
        let search = location.search.get();
        match guard(&services.routes, &path, &search, state.is_authenticated()) {
            GuardDecision::Redirect(target) => {
                log::debug!("navigation guard: {path} -> {target}");
                navigate(&target, NavigateOptions::default());
            }
            GuardDecision::Allow => {}
        }
    });
}
