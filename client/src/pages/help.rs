//! Help centre FAQ accordion.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::faq::{FAQ, FaqState};

#[component]
pub fn HelpPage() -> impl IntoView {
    let faq = RwSignal::new(FaqState::default());

    view! {
        <Title text=AppRoute::Help.title()/>
        <PageHero title="Help centre" subtitle="Answers to the questions we hear most."/>
        <section class="faq">
            {FAQ
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <div class="faq__item">
                            <button
                                class="faq__question"
                                aria-expanded=move || faq.get().is_open(index).to_string()
                                on:click=move |_| faq.update(|f| f.toggle(index))
                            >
                                {entry.question}
                            </button>
                            <Show when=move || faq.get().is_open(index)>
                                <p class="faq__answer">{entry.answer}</p>
                            </Show>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
        <p class="faq__more">
            "Still stuck? " <a href=AppRoute::Contact.path()>"Contact us"</a>
        </p>
    }
}
