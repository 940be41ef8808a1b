//! SVG line chart of monthly unsatisfied demand with a hover tooltip.
//!
//! Geometry and labels come from `util::chart`; this component only lays the
//! numbers out as SVG elements.

use leptos::prelude::*;

use crate::util::chart::{
    ChartFrame, DEMAND_TARGET, MONTH_LABELS, NOW_INDEX, UNSATISFIED_DEMAND, format_target_delta, format_thousands,
    peak_index, y_tick_label, y_ticks,
};

const TOOLTIP_WIDTH: f64 = 168.0;
const TOOLTIP_HEIGHT: f64 = 56.0;

fn num(value: f64) -> String {
    format!("{value:.1}")
}

#[component]
pub fn UnsatisfiedDemand() -> impl IntoView {
    let frame = ChartFrame::default();
    let count = UNSATISFIED_DEMAND.len();
    let hovered = RwSignal::new(None::<usize>);

    let gridlines = y_ticks()
        .into_iter()
        .map(|tick| {
            let y = num(frame.y_for_value(tick));
            view! {
                <g class="chart__grid">
                    <line x1=num(frame.plot_left()) x2=num(frame.plot_right()) y1=y.clone() y2=y.clone() />
                    <text x=num(frame.plot_left() - 10.0) y=y text-anchor="end" dominant-baseline="middle">
                        {y_tick_label(tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    #[allow(clippy::cast_precision_loss)]
    let month_labels = MONTH_LABELS
        .into_iter()
        .enumerate()
        .skip(1)
        .map(|(i, label)| {
            view! {
                <text
                    class="chart__month"
                    x=num(frame.x_for_index(i as f64, count))
                    y=num(frame.plot_bottom() + 20.0)
                    text-anchor="middle"
                >
                    {label}
                </text>
            }
        })
        .collect_view();

    let now_x = num(frame.x_for_index(NOW_INDEX, count));
    #[allow(clippy::cast_precision_loss)]
    let peak = peak_index(&UNSATISFIED_DEMAND).map(|i| {
        let x = num(frame.x_for_index(i as f64, count));
        view! {
            <line
                class="chart__peak"
                x1=x.clone()
                x2=x
                y1=num(frame.y_for_value(UNSATISFIED_DEMAND[i]))
                y2=num(frame.plot_bottom())
                stroke-dasharray="8 4"
            />
        }
    });

    #[allow(clippy::cast_precision_loss)]
    let points = UNSATISFIED_DEMAND
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            view! {
                <circle
                    class="chart__point"
                    class:chart__point--hovered=move || hovered.get() == Some(i)
                    cx=num(frame.x_for_index(i as f64, count))
                    cy=num(frame.y_for_value(value))
                    r=move || if hovered.get() == Some(i) { "10" } else { "5" }
                    on:mouseenter=move |_| hovered.set(Some(i))
                    on:mouseleave=move |_| hovered.set(None)
                />
            }
        })
        .collect_view();

    #[allow(clippy::cast_precision_loss)]
    let tooltip = move || {
        hovered.get().map(|i| {
            let value = UNSATISFIED_DEMAND[i];
            let x = (frame.x_for_index(i as f64, count) - TOOLTIP_WIDTH / 2.0)
                .clamp(0.0, frame.width - TOOLTIP_WIDTH);
            let y = (frame.y_for_value(value) - TOOLTIP_HEIGHT - 12.0).max(0.0);
            view! {
                <g class="chart__tooltip" transform=format!("translate({} {})", num(x), num(y))>
                    <rect width=num(TOOLTIP_WIDTH) height=num(TOOLTIP_HEIGHT) rx="5" />
                    <text class="chart__tooltip-value" x="12" y="22">{format_thousands(value)}</text>
                    <text class="chart__tooltip-delta" x="12" y="44">
                        {format_target_delta(value, DEMAND_TARGET)}
                    </text>
                </g>
            }
        })
    };

    view! {
        <svg
            class="chart"
            viewBox=format!("0 0 {} {}", frame.width, frame.height)
            preserveAspectRatio="none"
            role="img"
            aria-label="Unsatisfied Demand %"
        >
            {gridlines}
            {month_labels}
            <line
                class="chart__now"
                x1=now_x.clone()
                x2=now_x.clone()
                y1=num(frame.plot_top())
                y2=num(frame.plot_bottom())
                stroke-dasharray="5 5"
            />
            <text class="chart__now-label" x=now_x y=num(frame.plot_bottom() + 40.0) text-anchor="middle">
                "Now"
            </text>
            {peak}
            <polyline class="chart__line" fill="none" points=frame.polyline_points(&UNSATISFIED_DEMAND) />
            {points}
            {tooltip}
        </svg>
    }
}
