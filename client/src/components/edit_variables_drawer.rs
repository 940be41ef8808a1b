//! Side drawer for choosing simulation variables.
//!
//! DESIGN
//! ======
//! Selection, search, and the CO2 hover panel are drawer-local signals; the
//! catalogue resets each time the drawer opens. The hover delay is a
//! sequence-guarded sleep so leaving before it fires cancels the reveal.

use leptos::prelude::*;

use crate::state::variables::{CO2_DISTRIBUTION, default_categories, filter_categories, selected_count, toggle_variable};

/// Hover time before the CO2 distribution panel appears.
pub const CO2_HOVER_DELAY_MS: u64 = 1500;

const CO2_DISTRIBUTION_TEXT: &str = "But what truly sets Switch apart is its versatility. It can be used as a \
    scooter, a bike, or even a skateboard, making it suitable for people of all ages. Whether you're a \
    student, a professional, or a senior citizen, Switch adapts to your needs and lifestyle.";

#[component]
pub fn EditVariablesDrawer(on_close: Callback<()>) -> impl IntoView {
    let categories = RwSignal::new(default_categories());
    let query = RwSignal::new(String::new());
    let show_co2 = RwSignal::new(false);
    let hover_seq = RwSignal::new(0_u64);
    let primary_open = RwSignal::new(false);
    let secondary_open = RwSignal::new(false);

    let on_hover_start = move || {
        let seq = hover_seq.get_untracked() + 1;
        hover_seq.set(seq);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(CO2_HOVER_DELAY_MS)).await;
            if hover_seq.try_get_untracked() == Some(seq) {
                show_co2.set(true);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = seq;
    };
    let on_hover_end = move || {
        hover_seq.update(|seq| *seq += 1);
        show_co2.set(false);
    };

    let visible = move || filter_categories(&categories.get(), &query.get());

    view! {
        <div class="drawer-backdrop" on:click=move |_| on_close.run(())>
            <aside class="drawer" on:click=|ev| ev.stop_propagation()>
                <header class="drawer__header">
                    <h2>"Edit Variables"</h2>
                    <button class="drawer__close" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </header>

                <div class="drawer__toolbar">
                    <input
                        class="drawer__search"
                        type="text"
                        placeholder="Search"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <button class="btn">"Autofill"</button>
                    <button class="btn btn--accent">"Rerun"</button>
                </div>

                <section class="drawer__categories">
                    <p class="drawer__count">
                        {move || format!("{} selected", categories.with(|c| selected_count(c)))}
                    </p>
                    {move || {
                        visible()
                            .into_iter()
                            .map(|category| {
                                let category_value = category.value;
                                view! {
                                    <div class="drawer__category">
                                        <h4>{category.label}</h4>
                                        <div class="drawer__variables">
                                            {category
                                                .variables
                                                .into_iter()
                                                .map(|variable| {
                                                    let value = variable.value;
                                                    let is_co2 = value == CO2_DISTRIBUTION;
                                                    view! {
                                                        <button
                                                            class="drawer__variable"
                                                            class:drawer__variable--selected=variable.selected
                                                            on:click=move |_| {
                                                                categories.update(|c| {
                                                                    toggle_variable(c, category_value, value);
                                                                });
                                                            }
                                                            on:mouseenter=move |_| {
                                                                if is_co2 {
                                                                    on_hover_start();
                                                                }
                                                            }
                                                            on:mouseleave=move |_| {
                                                                if is_co2 {
                                                                    on_hover_end();
                                                                }
                                                            }
                                                        >
                                                            {variable.label}
                                                            {if variable.selected { " ✓" } else { " +" }}
                                                        </button>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </section>

                <Show when=move || show_co2.get()>
                    <section class="drawer__co2">
                        <h4>"CO2 Distribution"</h4>
                        <p>{CO2_DISTRIBUTION_TEXT}</p>
                    </section>
                </Show>

                <section class="drawer__accordion">
                    <button class="drawer__accordion-header" on:click=move |_| primary_open.update(|o| *o = !*o)>
                        "Primary Variables"
                        <span>{move || if primary_open.get() { "⌃" } else { "⌄" }}</span>
                    </button>
                    <Show when=move || primary_open.get()>
                        <p class="drawer__accordion-body">"No primary variables configured."</p>
                    </Show>
                    <button class="drawer__accordion-header" on:click=move |_| secondary_open.update(|o| *o = !*o)>
                        "Secondary Variables"
                        <span>{move || if secondary_open.get() { "⌃" } else { "⌄" }}</span>
                    </button>
                    <Show when=move || secondary_open.get()>
                        <p class="drawer__accordion-body">"No secondary variables configured."</p>
                    </Show>
                </section>
            </aside>
        </div>
    }
}
