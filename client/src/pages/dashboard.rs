//! Home route: the panel for the active header tab.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered inside the protected layout, so a session always exists here.
//! The header writes `UiState.active_tab`; this page only reads it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::charging_stations::ChargingStations;
use crate::state::ui::{HeaderTab, UiState};

/// Panel rendered for a header tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardPanel {
    ChargingStations,
    /// Tab without a panel yet.
    Placeholder,
}

impl DashboardPanel {
    pub fn for_tab(tab: HeaderTab) -> Self {
        match tab {
            HeaderTab::ChargingStations => Self::ChargingStations,
            HeaderTab::FleetSizing | HeaderTab::Parking => Self::Placeholder,
        }
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let active_tab = Memo::new(move |_| ui.with(|u| u.active_tab));

    move || match DashboardPanel::for_tab(active_tab.get()) {
        DashboardPanel::ChargingStations => view! { <ChargingStations /> }.into_any(),
        DashboardPanel::Placeholder => {
            let label = active_tab.get().label();
            view! {
                <section class="panel panel--placeholder">
                    <h2>{label}</h2>
                    <p class="panel__hint">"This dashboard is not available yet."</p>
                </section>
            }
            .into_any()
        }
    }
}
