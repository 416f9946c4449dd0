//! Assistant chat page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::chat_panel::{ChatPanel, send};
use crate::routes::AppRoute;
use crate::state::chat::{ChatState, Persona};

const SUGGESTIONS: &[&str] = &[
    "Plan a relaxing weekend",
    "Explain black holes simply",
    "Write a birthday poem for my sister",
    "Give me three dinner ideas",
];

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(Persona::Assistant));

    view! {
        <Title text=AppRoute::Chat.title()/>
        <div class="chat-page">
            <aside class="chat-page__sidebar">
                <h2>"Try asking"</h2>
                {SUGGESTIONS
                    .iter()
                    .map(|&suggestion| {
                        view! {
                            <button
                                class="btn btn--chip"
                                disabled=move || chat.get().pending
                                on:click=move |_| {
                                    send(chat, suggestion);
                                }
                            >
                                {suggestion}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </aside>
            <ChatPanel chat=chat placeholder="Ask Lumina anything..."/>
        </div>
    }
}
