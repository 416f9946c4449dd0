//! Terms of service and privacy policy.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;

const TERMS: &[(&str, &str)] = &[
    ("Using Lumina", "Lumina is a preview. Features may change or disappear without notice."),
    ("Your content", "You keep ownership of what you create. Please do not share anything unlawful."),
    ("Simulated features", "Chats, creations and digital humans on this site are demonstrations with scripted responses."),
    ("Membership", "No payments are processed in this preview and no plan is ever charged."),
];

const PRIVACY: &[(&str, &str)] = &[
    ("What we store", "Only your light or dark theme choice, kept in your own browser."),
    ("What we don't", "Messages, form entries and quiz answers never leave your device and vanish on reload."),
    ("Cookies", "This site does not set tracking cookies."),
];

fn sections(items: &'static [(&'static str, &'static str)]) -> impl IntoView {
    view! {
        <section class="content legal">
            {items
                .iter()
                .map(|&(heading, body)| {
                    view! {
                        <h2>{heading}</h2>
                        <p>{body}</p>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Terms.title()/>
        <PageHero title="Terms of service" subtitle="Last updated 1 March 2024"/>
        {sections(TERMS)}
    }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Privacy.title()/>
        <PageHero title="Privacy policy" subtitle="Last updated 1 March 2024"/>
        {sections(PRIVACY)}
    }
}
