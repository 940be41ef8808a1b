//! Authenticated page chrome: sidebar, header, and the routed content.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use super::header::Header;
use super::protected_route::ProtectedRoute;
use super::sidebar::Sidebar;
use crate::state::ui::UiState;

/// Themed shell around the nested dashboard routes.
#[component]
pub fn Layout() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let style = move || ui.with(|u| u.theme.palette().css_vars());

    view! {
        <div class="layout" style=style>
            {view! { <Sidebar /> }.into_any()}
            <div class="layout__main">
                {view! { <Header /> }.into_any()}
                <main class="layout__content">
                    <Outlet />
                </main>
            </div>
        </div>
    }
}

/// Parent route view: the guard around the themed layout.
#[component]
pub fn ProtectedLayout() -> impl IntoView {
    view! {
        <ProtectedRoute>
            <Layout />
        </ProtectedRoute>
    }
}
