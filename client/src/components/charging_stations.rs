//! Charging-station analytics panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Default panel for the "Charging Stations" header tab. Composes the
//! scenario summary, the graph area, the KPI grid, and the variables drawer.

#[cfg(test)]
#[path = "charging_stations_test.rs"]
mod charging_stations_test;

use leptos::prelude::*;

use super::best_scenario_results::BestScenarioResults;
use super::edit_variables_drawer::EditVariablesDrawer;
use super::performance_indicators::PerformanceIndicators;
use super::unsatisfied_demand::UnsatisfiedDemand;

/// Graphs offered in the graph selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GraphType {
    #[default]
    UnsatisfiedDemand,
}

impl GraphType {
    pub const ALL: [Self; 1] = [Self::UnsatisfiedDemand];

    pub fn label(self) -> &'static str {
        match self {
            Self::UnsatisfiedDemand => "Unsatisfied Demand %",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Self::UnsatisfiedDemand => "unsatisfied-demand",
        }
    }

    pub fn from_value(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.value() == raw)
    }
}

#[component]
pub fn ChargingStations() -> impl IntoView {
    let drawer_open = RwSignal::new(false);
    let graph = RwSignal::new(GraphType::default());
    let close_drawer = Callback::new(move |()| drawer_open.set(false));

    view! {
        <section class="panel charging">
            <header class="charging__header">
                <h1>"⚡ Charging Station"</h1>
                <div class="charging__actions">
                    <button class="btn" title="History">"↺"</button>
                    <button class="btn" on:click=move |_| drawer_open.set(true)>
                        "Edit Variables"
                    </button>
                    <button class="btn" title="Upload">"⇪"</button>
                </div>
            </header>

            <BestScenarioResults />

            <div class="charging__row">
                <section class="charging__graphs">
                    <h3>"Graphs"</h3>
                    <div class="charging__graph">
                        <select
                            class="charging__graph-type"
                            on:change=move |ev| {
                                if let Some(next) = GraphType::from_value(&event_target_value(&ev)) {
                                    graph.set(next);
                                }
                            }
                        >
                            {GraphType::ALL
                                .into_iter()
                                .map(|g| {
                                    view! {
                                        <option value=g.value() selected=move || graph.get() == g>
                                            {g.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                        {move || match graph.get() {
                            GraphType::UnsatisfiedDemand => view! { <UnsatisfiedDemand /> },
                        }}
                    </div>
                </section>
                <PerformanceIndicators />
            </div>
        </section>

        <Show when=move || drawer_open.get()>
            <EditVariablesDrawer on_close=close_drawer />
        </Show>
    }
}
