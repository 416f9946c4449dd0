//! Contact form. Messages are logged, not sent.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::forms::validate_contact;

#[component]
pub fn ContactPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_contact(&name.get_untracked(), &email.get_untracked(), &message.get_untracked()) {
            Ok(form) => {
                leptos::logging::log!("contact message from {} <{}>: {}", form.name, form.email, form.message);
                info.set("Thanks! We'll get back to you soon.".to_owned());
                message.set(String::new());
            }
            Err(e) => {
                leptos::logging::warn!("contact form rejected: {e}");
                info.set(e.to_string());
            }
        }
    };

    view! {
        <Title text=AppRoute::Contact.title()/>
        <PageHero title="Get in touch" subtitle="Questions, feedback or partnership ideas: we read everything."/>
        <form class="contact-form card" on:submit=on_submit>
            <input
                class="form-input"
                type="text"
                placeholder="Your name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                class="form-input"
                type="email"
                placeholder="you@example.com"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <textarea
                class="form-input form-input--multiline"
                placeholder="How can we help?"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button class="btn btn--primary" type="submit">
                "Send message"
            </button>
            <Show when=move || !info.get().is_empty()>
                <p class="form-message">{move || info.get()}</p>
            </Show>
        </form>
    }
}
