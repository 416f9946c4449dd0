//! AI creation studio with a simulated progress bar.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::creation::{CreationState, CreationStatus, MODELS, PROGRESS_TICK_MS};
use crate::util::delay;

#[component]
pub fn CreatePage() -> impl IntoView {
    let state = RwSignal::new(CreationState::default());
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    let on_generate = move |_| {
        let Some(run) = state.try_update(|s| s.start().then(|| s.run())).flatten() else {
            return;
        };
        delay::every(Duration::from_millis(PROGRESS_TICK_MS), alive.clone(), move || {
            state.try_update(|s| s.tick(run)).unwrap_or(false)
        });
    };

    let model_cards = MODELS
        .iter()
        .map(|model| {
            let id = model.id;
            let class = move || {
                if state.get().selected.is_some_and(|m| m.id == id) {
                    "card card--selectable card--selected"
                } else {
                    "card card--selectable"
                }
            };
            view! {
                <button
                    class=class
                    disabled=move || state.get().is_generating()
                    on:click=move |_| {
                        state.update(|s| {
                            s.select_model(id);
                        });
                    }
                >
                    <span class="tag">{model.medium}</span>
                    <h3>{model.name}</h3>
                    <p>{model.description}</p>
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text=AppRoute::Create.title()/>
        <PageHero title="Creation studio" subtitle="Pick a model, describe your idea and press generate."/>

        <section class="studio">
            <div class="studio__models">{model_cards}</div>

            <textarea
                class="studio__prompt"
                placeholder="A cosy reading nook on a rainy afternoon..."
                prop:value=move || state.get().prompt
                disabled=move || state.get().is_generating()
                on:input=move |ev| state.update(|s| s.prompt = event_target_value(&ev))
            ></textarea>

            <div class="studio__actions">
                <button class="btn btn--primary" disabled=move || !state.get().can_generate() on:click=on_generate>
                    "Generate"
                </button>
                <button class="btn" on:click=move |_| state.update(CreationState::reset)>
                    "Reset"
                </button>
            </div>

            <Show when=move || state.get().status != CreationStatus::Idle>
                <div class="progress" role="progressbar" aria-valuemin="0" aria-valuemax="100" aria-valuenow=move || state.get().progress.to_string()>
                    <div class="progress__bar" style:width=move || format!("{}%", state.get().progress)></div>
                </div>
                <p class="progress__label">{move || format!("{}%", state.get().progress)}</p>
            </Show>

            {move || match state.get().status {
                CreationStatus::Done(result) => {
                    view! {
                        <div class="studio__result card">
                            <img src="/images/media/placeholder.svg" alt="Generated preview"/>
                            <p>{result}</p>
                        </div>
                    }
                        .into_any()
                }
                _ => ().into_any(),
            }}
        </section>
    }
}
