//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::ProtectedLayout;
use crate::config::IdentityConfig;
use crate::net::provider::RestIdentityProvider;
use crate::pages::{dashboard::DashboardPage, placeholder::PlaceholderPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::auth_listener::install_auth_listener;
use crate::util::storage::LocalStorage;

/// Identity provider shared through context.
pub type AppIdentity = RestIdentityProvider<LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" data-theme="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

fn build_identity() -> AppIdentity {
    let config = match IdentityConfig::from_build_env() {
        Ok(config) => Some(config),
        Err(e) => {
            log::warn!("identity provider not configured, sign-in disabled: {e}");
            None
        }
    };
    RestIdentityProvider::new(config, LocalStorage)
}

/// Root application component.
///
/// Provides the auth and UI stores plus the identity provider, subscribes the
/// auth store to session changes, and sets up routing behind the guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    provide_context(auth);
    provide_context(ui);

    let identity = build_identity();
    install_auth_listener(&identity, auth);
    provide_context(identity.clone());

    #[cfg(feature = "hydrate")]
    {
        use crate::state::auth::AuthAction;
        use crate::state::ui::UiAction;
        use crate::util::auth::{dispatch, dispatch_ui};
        use crate::util::theme;

        let stored = theme::read_preference(&LocalStorage);
        theme::apply(stored);
        dispatch_ui(ui, UiAction::ThemeSet(stored));

        // Cleared by the `SessionObserved` that `restore` publishes.
        dispatch(auth, AuthAction::LoadingSet(true));
        leptos::task::spawn_local(async move {
            identity.restore().await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = identity;

    view! {
        <Stylesheet id="leptos" href="/pkg/evdash.css"/>
        <Title text="EV Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=StaticSegment("") view=ProtectedLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("notifications") view=PlaceholderPage/>
                    <Route path=StaticSegment("activity") view=PlaceholderPage/>
                    <Route path=StaticSegment("upload") view=PlaceholderPage/>
                    <Route path=StaticSegment("settings") view=PlaceholderPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
