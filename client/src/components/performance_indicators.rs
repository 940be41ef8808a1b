//! Key performance indicator tiles.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PerformanceIndicator {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub value: &'static str,
}

pub const PERFORMANCE_INDICATORS: [PerformanceIndicator; 4] = [
    PerformanceIndicator {
        title: "Infrastructure Units",
        subtitle: "This describes variable two and what the shown data means.",
        value: "€421.07",
    },
    PerformanceIndicator {
        title: "Charging Growth",
        subtitle: "This describes variable two and what the shown data means.",
        value: "33.07",
    },
    PerformanceIndicator {
        title: "Localization change",
        subtitle: "This describes variable two and what the shown data means.",
        value: "21.9%",
    },
    PerformanceIndicator {
        title: "Fleet growth",
        subtitle: "This describes variable two and what the shown data means.",
        value: "7.03%",
    },
];

#[component]
pub fn PerformanceIndicators() -> impl IntoView {
    view! {
        <section class="kpi">
            <header class="kpi__header">
                <h3>"Key Performance Indicators"</h3>
                <button class="btn">"Variables +"</button>
            </header>
            <div class="kpi__grid">
                {PERFORMANCE_INDICATORS
                    .into_iter()
                    .map(|indicator| {
                        view! {
                            <article class="kpi__tile">
                                <header class="kpi__tile-header">
                                    <h5>{indicator.title}</h5>
                                    <span class="kpi__help" title=indicator.subtitle>"?"</span>
                                </header>
                                <p class="kpi__subtitle">{indicator.subtitle}</p>
                                <h1 class="kpi__value">{indicator.value}</h1>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
