//! Settings: theme selection and notification toggles.
//!
//! Only the theme is persisted; the notification switches reset on reload.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::ui::{Theme, UiState};

const NOTIFICATIONS: &[(&str, &str, bool)] = &[
    ("digest", "Weekly digest email", true),
    ("mentions", "Mentions and replies", true),
    ("events", "Community events", false),
    ("product", "Product news", false),
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let saved = RwSignal::new(false);

    let on_theme = move |ev: leptos::ev::Event| {
        let Some(theme) = Theme::parse(&event_target_value(&ev)) else {
            return;
        };
        let applied = crate::util::dark_mode::set(theme);
        ui.update(|u| u.theme = applied);
    };

    let toggles = NOTIFICATIONS
        .iter()
        .map(|&(key, label, default)| {
            let enabled = RwSignal::new(default);
            view! {
                <label class="switch">
                    <input
                        type="checkbox"
                        name=key
                        prop:checked=move || enabled.get()
                        on:change=move |_| {
                            enabled.update(|e| *e = !*e);
                            saved.set(false);
                        }
                    />
                    <span>{label}</span>
                </label>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text=AppRoute::Settings.title()/>
        <PageHero title="Settings"/>
        <section class="settings card">
            <h2>"Appearance"</h2>
            <select class="form-input" on:change=on_theme prop:value=move || ui.get().theme.as_str()>
                <option value="light">"Light"</option>
                <option value="dark">"Dark"</option>
            </select>

            <h2>"Notifications"</h2>
            {toggles}

            <button
                class="btn btn--primary"
                on:click=move |_| {
                    leptos::logging::log!("settings saved locally");
                    saved.set(true);
                }
            >
                "Save"
            </button>
            <Show when=move || saved.get()>
                <p class="form-message">"Saved for this session."</p>
            </Show>
        </section>
    }
}
