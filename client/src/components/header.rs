//! Dashboard header: tab links, search, theme toggle, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tab and theme changes go through `dispatch_ui` so the dashboard page and
//! layout palette follow the store. The mobile menu is local state.

use leptos::prelude::*;

use crate::state::ui::{HeaderTab, UiAction, UiState};
use crate::util::auth::dispatch_ui;
use crate::util::storage::LocalStorage;
use crate::util::theme;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let menu_open = RwSignal::new(false);

    let select_tab = move |tab: HeaderTab| {
        dispatch_ui(ui, UiAction::TabSelected(tab));
        menu_open.set(false);
    };

    let on_toggle_theme = move |_| {
        let next = theme::toggle(&LocalStorage, ui.get_untracked().theme);
        dispatch_ui(ui, UiAction::ThemeSet(next));
    };

    let tab_links = move |mobile: bool| {
        HeaderTab::ALL
            .into_iter()
            .map(|tab| {
                view! {
                    <button
                        class="header__link"
                        class:header__link--active=move || ui.with(|u| u.active_tab == tab)
                        class:header__link--mobile=mobile
                        on:click=move |_| select_tab(tab)
                    >
                        {tab.label()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <header class="header">
            <nav class="header__left">{tab_links(false)}</nav>

            <div class="header__right">
                <button class="btn header__theme-toggle" on:click=on_toggle_theme title="Toggle theme">
                    "Toggle Theme"
                </button>
                <label class="header__search">
                    <span class="header__search-icon" aria-hidden="true">"⌕"</span>
                    <input class="header__search-input" type="text" placeholder="Search" />
                </label>
            </div>

            <button
                class="header__menu-icon"
                aria-label="Menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>

            <Show when=move || menu_open.get()>
                <nav class="header__mobile-menu">{tab_links(true)}</nav>
            </Show>
        </header>
    }
}
