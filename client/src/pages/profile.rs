//! Mock member profile.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;

const STATS: &[(&str, u32)] = &[("Chats", 342), ("Creations", 57), ("Groups", 3), ("Followers", 128)];

const RECENT: &[(&str, &str)] = &[
    ("Posted in Prompt Crafters", "2 days ago"),
    ("Created \"Neon Harbour\" with Canvas XL", "4 days ago"),
    ("Reached an ending in The Silent Lighthouse", "1 week ago"),
];

#[component]
pub fn ProfilePage() -> impl IntoView {
    let following = RwSignal::new(false);

    view! {
        <Title text=AppRoute::Profile.title()/>
        <section class="profile">
            <div class="profile__header card">
                <img src="/images/team/guest.svg" alt="Guest avatar" class="avatar avatar--large"/>
                <div>
                    <h1>"Guest Explorer"</h1>
                    <p class="profile__handle">"@guest · member since 2024"</p>
                    <p>"Curious about everything. Currently learning to make music with Melody."</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| following.update(|f| *f = !*f)>
                    {move || if following.get() { "Following" } else { "Follow" }}
                </button>
            </div>
            <div class="stat-row">
                {STATS
                    .iter()
                    .map(|&(label, value)| {
                        view! {
                            <div class="stat card">
                                <strong>{value}</strong>
                                <span>{label}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="card">
                <h2>"Recent activity"</h2>
                <ul class="activity">
                    {RECENT
                        .iter()
                        .map(|&(what, when)| view! { <li>{what}<small>{when}</small></li> })
                        .collect::<Vec<_>>()}
                </ul>
                <a href=AppRoute::Settings.path() class="btn">
                    "Edit settings"
                </a>
            </div>
        </section>
    }
}
