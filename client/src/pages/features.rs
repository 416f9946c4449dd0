//! Feature overview.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;

const FEATURES: &[(&str, &str, &[&str])] = &[
    ("Assistant chat", "Ask anything and get clear, friendly answers.", &["Study help", "Writing drafts", "Daily planning"]),
    ("Companions", "Characters with memory-free, judgement-free conversation.", &["Distinct personalities", "Warm voices"]),
    ("Creation studio", "Turn a prompt into images, stories, music or video.", &["Four models", "One-click remix"]),
    ("Digital human", "A lifelike guide who talks you through anything.", &["Animated avatar", "Spoken replies"]),
    ("Interactive stories", "Choose-your-path adventures written for you.", &["Multiple endings", "Replayable"]),
    ("Community", "Groups, a media gallery and weekly challenges.", &["Interest groups", "Showcase gallery"]),
];

#[component]
pub fn FeaturesPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Features.title()/>
        <PageHero title="Everything in one place" subtitle="Six ways to think, make and connect with Lumina.">
            <a href=AppRoute::Membership.path() class="btn btn--primary">
                "Compare plans"
            </a>
        </PageHero>
        <section class="card-grid">
            {FEATURES
                .iter()
                .map(|&(title, text, bullets)| {
                    view! {
                        <div class="card">
                            <h3>{title}</h3>
                            <p>{text}</p>
                            <ul class="card__bullets">
                                {bullets.iter().map(|b| view! { <li>{*b}</li> }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
