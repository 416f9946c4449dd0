//! Brand mark used by the header and footer.

use leptos::prelude::*;

#[component]
pub fn Logo(#[prop(optional)] compact: bool) -> impl IntoView {
    view! {
        <span class="logo">
            <svg class="logo__mark" viewBox="0 0 32 32" width="28" height="28" aria-hidden="true">
                <circle cx="16" cy="16" r="14" fill="var(--accent)"></circle>
                <path d="M11 9v14h10" stroke="var(--accent-contrast)" stroke-width="3" fill="none" stroke-linecap="round"></path>
            </svg>
            <Show when=move || !compact>
                <span class="logo__word">"Lumina"</span>
            </Show>
        </span>
    }
}
