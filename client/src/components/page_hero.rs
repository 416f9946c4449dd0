//! Title block shared by content pages.

use leptos::prelude::*;

#[component]
pub fn PageHero(
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <section class="page-hero">
            <h1 class="page-hero__title">{title}</h1>
            {subtitle.map(|s| view! { <p class="page-hero__subtitle">{s}</p> })}
            {children.map(|c| view! { <div class="page-hero__actions">{c()}</div> })}
        </section>
    }
}
