//! Site header with navigation, theme toggle and account links.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::logo::Logo;
use crate::routes::{AppRoute, NAV, is_active};
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let pathname = use_location().pathname;

    let on_theme = move |_| {
        let next = crate::util::dark_mode::toggle(ui.get_untracked().theme);
        ui.update(|u| u.theme = next);
    };

    let close_nav = move |_| ui.update(|u| u.nav_open = false);

    let links = NAV
        .iter()
        .map(|&route| {
            let href = route.href().unwrap_or("/");
            let class = move || {
                if is_active(route, &pathname.get()) {
                    "site-nav__link site-nav__link--active"
                } else {
                    "site-nav__link"
                }
            };
            view! {
                <a href=href class=class on:click=close_nav>
                    {route.label()}
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand" title="Lumina home">
                <Logo/>
            </a>

            <button
                class="btn site-header__menu"
                aria-label="Toggle navigation"
                on:click=move |_| ui.update(|u| u.nav_open = !u.nav_open)
            >
                "☰"
            </button>

            <nav class=move || if ui.get().nav_open { "site-nav site-nav--open" } else { "site-nav" }>
                {links}
            </nav>

            <div class="site-header__actions">
                <button class="btn site-header__theme" on:click=on_theme title="Toggle dark mode">
                    {move || ui.get().theme.toggle_icon()}
                </button>
                <a href=AppRoute::Login.path() class="btn btn--ghost">
                    {AppRoute::Login.label()}
                </a>
                <a href=AppRoute::Register.path() class="btn btn--primary">
                    {AppRoute::Register.label()}
                </a>
            </div>
        </header>
    }
}
