//! Landing page: hero, highlights, testimonials and a call to action.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;

struct Highlight {
    icon: &'static str,
    title: &'static str,
    text: &'static str,
    route: AppRoute,
}

const HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        icon: "💬",
        title: "Chat with Lumina",
        text: "Answers, plans and drafts in a friendly conversation.",
        route: AppRoute::Chat,
    },
    Highlight {
        icon: "🎨",
        title: "Create anything",
        text: "Images, stories, music and clips from a single prompt.",
        route: AppRoute::Create,
    },
    Highlight {
        icon: "🧑‍🚀",
        title: "Meet a digital human",
        text: "Talk face to face with Nova, our lifelike guide.",
        route: AppRoute::DigitalHuman,
    },
    Highlight {
        icon: "🌍",
        title: "Join the community",
        text: "Share creations and find people who love what you love.",
        route: AppRoute::Community,
    },
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Lumina plans my week better than I do.", "Alex, student"),
    ("The companion chats helped me through a tough month.", "Sam, designer"),
    ("I made my first album cover in five minutes.", "Rio, musician"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text=AppRoute::Home.title()/>
        <section class="hero">
            <h1 class="hero__title">"Your AI companion for every idea"</h1>
            <p class="hero__subtitle">
                "Chat, create and connect on one playful platform. No setup, no credit card."
            </p>
            <div class="hero__actions">
                <a href=AppRoute::Chat.path() class="btn btn--primary btn--large">
                    "Start chatting"
                </a>
                <a href=AppRoute::Features.path() class="btn btn--ghost btn--large">
                    "See features"
                </a>
            </div>
        </section>

        <section class="card-grid">
            {HIGHLIGHTS
                .iter()
                .map(|h| {
                    view! {
                        <a href=h.route.path() class="card card--link">
                            <span class="card__icon">{h.icon}</span>
                            <h3>{h.title}</h3>
                            <p>{h.text}</p>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </section>

        <section class="testimonials">
            <h2>"Loved by curious people"</h2>
            <div class="testimonials__list">
                {TESTIMONIALS
                    .iter()
                    .map(|&(quote, who)| {
                        view! {
                            <blockquote class="testimonial">
                                <p>{quote}</p>
                                <cite>{who}</cite>
                            </blockquote>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section class="cta">
            <h2>"Ready to meet Lumina?"</h2>
            <a href=AppRoute::Register.path() class="btn btn--primary btn--large">
                "Create a free account"
            </a>
        </section>
    }
}
