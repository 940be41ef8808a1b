//! Stand-in page for sidebar routes without content yet.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::ui::sidebar_label;

#[component]
pub fn PlaceholderPage() -> impl IntoView {
    let pathname = use_location().pathname;
    let title = move || pathname.with(|path| sidebar_label(path).unwrap_or("Not Found"));

    view! {
        <section class="panel panel--placeholder">
            <h2>{title}</h2>
            <p class="panel__hint">"Nothing here yet."</p>
        </section>
    }
}
