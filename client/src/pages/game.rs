//! Interactive story page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;
use crate::state::story::{StoryState, scene};

#[component]
pub fn GamePage() -> impl IntoView {
    let story = RwSignal::new(StoryState::default());

    view! {
        <Title text=AppRoute::Game.title()/>
        <section class="story">
            {move || {
                let state = story.get();
                let Some(current) = state.current_scene() else {
                    leptos::logging::warn!("story scene missing: {}", state.current);
                    return view! {
                        <p class="story__text">"This page of the story is missing."</p>
                        <button class="btn" on:click=move |_| story.update(StoryState::restart)>
                            "Start again"
                        </button>
                    }
                        .into_any();
                };
                let trail = state
                    .path
                    .iter()
                    .filter_map(|&id| scene(id))
                    .map(|s| s.title)
                    .collect::<Vec<_>>()
                    .join(" → ");
                let steps = state.steps_taken();
                view! {
                    <p class="story__trail">{trail}</p>
                    <h1 class="story__title">{current.title}</h1>
                    <p class="story__text">{current.text}</p>
                    <div class="story__choices">
                        {current
                            .choices
                            .iter()
                            .enumerate()
                            .map(|(index, choice)| {
                                view! {
                                    <button
                                        class="btn btn--primary"
                                        on:click=move |_| {
                                            story.update(|s| {
                                                s.choose(index);
                                            });
                                        }
                                    >
                                        {choice.label}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <Show when=move || current.is_ending()>
                        <p class="story__ending">
                            {format!("You reached an ending in {steps} steps.")}
                        </p>
                    </Show>
                    <button class="btn btn--ghost" on:click=move |_| story.update(StoryState::restart)>
                        "Restart story"
                    </button>
                }
                    .into_any()
            }}
        </section>
    }
}
