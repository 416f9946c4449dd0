//! Generic "not found" / "server error" display.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::error::PageError;

#[component]
pub fn StatusPage(error: PageError) -> impl IntoView {
    error.mark_response();

    view! {
        <Title text=format!("{} · Lumina", error)/>
        <section class="status-page">
            <p class="status-page__code">{error.status_code()}</p>
            <h1 class="status-page__title">{error.to_string()}</h1>
            <p class="status-page__detail">{error.detail()}</p>
            <a href="/" class="btn btn--primary">
                "Back to home"
            </a>
        </section>
    }
}
