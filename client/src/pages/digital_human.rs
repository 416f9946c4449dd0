//! Digital human: an animated avatar fronting a simulated conversation.
//!
//! The avatar "speaks" while a reply is pending. There is no audio or
//! video pipeline behind it.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::chat_panel::ChatPanel;
use crate::routes::AppRoute;
use crate::state::chat::{ChatState, Persona};

#[component]
pub fn DigitalHumanPage() -> impl IntoView {
    let chat = RwSignal::new(ChatState::new(Persona::DigitalHuman));
    let muted = RwSignal::new(false);
    let speaking = move || chat.get().pending && !muted.get();

    view! {
        <Title text=AppRoute::DigitalHuman.title()/>
        <div class="digital-human">
            <div class=move || {
                if speaking() { "digital-human__stage digital-human__stage--speaking" } else { "digital-human__stage" }
            }>
                <img src="/images/companions/nova.svg" alt="Nova" class="digital-human__avatar"/>
                <p class="digital-human__status">
                    {move || {
                        if muted.get() {
                            "Muted"
                        } else if speaking() {
                            "Speaking…"
                        } else {
                            "Listening"
                        }
                    }}
                </p>
                <button class="btn" on:click=move |_| muted.update(|m| *m = !*m)>
                    {move || if muted.get() { "Unmute" } else { "Mute" }}
                </button>
            </div>
            <ChatPanel chat=chat placeholder="Ask Nova a question..."/>
        </div>
    }
}
