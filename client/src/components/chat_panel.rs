//! Conversation view with a composer, shared by every chat-style page.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::chat::{ChatState, REPLY_DELAY_MS, Role};
use crate::util::delay;

/// Submit `text` and schedule the canned reply. Returns `false` when the
/// message was rejected (blank, or a reply is still pending).
pub fn send(chat: RwSignal<ChatState>, text: &str) -> bool {
    let Some(turn) = chat.try_update(|c| c.submit(text).then(|| c.turn())).flatten() else {
        return false;
    };
    delay::after(Duration::from_millis(REPLY_DELAY_MS), move || {
        chat.try_update(|c| c.deliver_reply(turn));
    });
    true
}

/// Message list plus input row. Replies are simulated with a fixed delay.
#[component]
pub fn ChatPanel(chat: RwSignal<ChatState>, #[prop(optional)] placeholder: Option<&'static str>) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        }
    });

    let do_send = move || {
        if send(chat, &input.get_untracked()) {
            input.set(String::new());
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let persona_name = move || chat.with(|c| c.persona.display_name());
    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending;
    let placeholder = placeholder.unwrap_or("Type a message...");

    view! {
        <div class="chat-panel">
            <div class="chat-panel__messages" node_ref=messages_ref>
                {move || {
                    let persona = persona_name();
                    chat.get()
                        .messages
                        .into_iter()
                        .map(|msg| {
                            let (class, author) = match msg.role {
                                Role::User => ("chat-panel__message chat-panel__message--user", "You"),
                                Role::Assistant => ("chat-panel__message chat-panel__message--assistant", persona),
                            };
                            view! {
                                <div class=class>
                                    <span class="chat-panel__author">{author}</span>
                                    <span class="chat-panel__text">{msg.content}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || chat.get().pending>
                    <div class="chat-panel__typing">{move || format!("{} is typing…", persona_name())}</div>
                </Show>
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary chat-panel__send" on:click=move |_| do_send() disabled=move || !can_send()>
                    "Send"
                </button>
                <button class="btn chat-panel__clear" on:click=move |_| chat.update(ChatState::clear) title="Start over">
                    "Clear"
                </button>
            </div>
        </div>
    }
}
