//! Companion character chat.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::chat_panel::ChatPanel;
use crate::routes::AppRoute;
use crate::state::chat::{ChatState, Persona};

const TRAITS: &[&str] = &["Warm", "Playful", "Great listener", "Loves stargazing"];

#[component]
pub fn CompanionPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(Persona::Companion));
    let favourite = RwSignal::new(false);

    view! {
        <Title text=AppRoute::Companion.title()/>
        <div class="chat-page">
            <aside class="chat-page__sidebar companion-card">
                <img src="/images/companions/aria.svg" alt="Aria" class="avatar avatar--large"/>
                <h2>{Persona::Companion.display_name()}</h2>
                <ul class="tag-list">
                    {TRAITS.iter().map(|t| view! { <li class="tag">{*t}</li> }).collect::<Vec<_>>()}
                </ul>
                <button class="btn" on:click=move |_| favourite.update(|f| *f = !*f)>
                    {move || if favourite.get() { "★ Favourite" } else { "☆ Add to favourites" }}
                </button>
            </aside>
            <ChatPanel chat=chat placeholder="Say something to Aria..."/>
        </div>
    }
}
