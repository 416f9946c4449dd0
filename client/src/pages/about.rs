//! About page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;

const TEAM: &[(&str, &str, &str)] = &[
    ("Lena Park", "Co-founder & CEO", "/images/team/lena.svg"),
    ("Omar Haddad", "Co-founder & CTO", "/images/team/omar.svg"),
    ("Jonah Kim", "Head of Design", "/images/team/jonah.svg"),
    ("Priya Shah", "Community Lead", "/images/team/priya.svg"),
];

const VALUES: &[(&str, &str)] = &[
    ("Kindness first", "Every feature should leave people feeling better than before."),
    ("Play is serious", "Curiosity and fun are how people learn new tools."),
    ("You own your work", "What you create with Lumina belongs to you."),
];

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text=AppRoute::About.title()/>
        <PageHero
            title="About Lumina"
            subtitle="We are a small team building AI that feels like a friend, not a form."
        />
        <section class="content">
            <h2>"Our values"</h2>
            <ul class="value-list">
                {VALUES
                    .iter()
                    .map(|&(name, text)| view! { <li><strong>{name}</strong>" · "{text}</li> })
                    .collect::<Vec<_>>()}
            </ul>
        </section>
        <section class="card-grid">
            {TEAM
                .iter()
                .map(|&(name, role, avatar)| {
                    view! {
                        <div class="card card--person">
                            <img src=avatar alt=name class="avatar avatar--large"/>
                            <h3>{name}</h3>
                            <p>{role}</p>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
    }
}
