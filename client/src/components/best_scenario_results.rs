//! Collapsible list of the best simulated scenario outcomes.

use leptos::prelude::*;

pub const BEST_SCENARIO_RESULTS: [&str; 2] = [
    "The best found configuration based on profit is characterized by 11 zones (max) with charging stations and 48 total number of poles.",
    "The best found configuration based on satisfied demand is characterized by 11 zones (max) with charging stations and 48 total number of poles.",
];

#[component]
pub fn BestScenarioResults() -> impl IntoView {
    let expanded = RwSignal::new(true);

    view! {
        <section class="scenario">
            <header class="scenario__header">
                <h3>"✦ Best Scenario Results"</h3>
                <button
                    class="scenario__chevron"
                    class:scenario__chevron--open=move || expanded.get()
                    aria-expanded=move || expanded.get().to_string()
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    "⌄"
                </button>
            </header>
            <Show when=move || expanded.get()>
                <ul class="scenario__list">
                    {BEST_SCENARIO_RESULTS
                        .into_iter()
                        .map(|result| view! { <li class="scenario__item">{result}</li> })
                        .collect_view()}
                </ul>
            </Show>
        </section>
    }
}
