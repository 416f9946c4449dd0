//! Personality quiz page.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::psych::{PsychState, QUESTIONS};

#[component]
pub fn PsychTestPage() -> impl IntoView {
    let quiz = RwSignal::new(PsychState::default());

    let questions = QUESTIONS
        .iter()
        .enumerate()
        .map(|(qi, question)| {
            view! {
                <fieldset class="quiz__question">
                    <legend>{format!("{}. {}", qi + 1, question.prompt)}</legend>
                    {question
                        .options
                        .iter()
                        .enumerate()
                        .map(|(oi, option)| {
                            view! {
                                <label class="quiz__option">
                                    <input
                                        type="radio"
                                        name=format!("q{qi}")
                                        prop:checked=move || quiz.get().answers[qi] == Some(oi)
                                        on:change=move |_| {
                                            quiz.update(|q| {
                                                q.answer(qi, oi);
                                            });
                                        }
                                    />
                                    {option.label}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()}
                </fieldset>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <Title text=AppRoute::PsychTest.title()/>
        <PageHero title="What's your vibe?" subtitle="Six quick questions. Just for fun, not a diagnosis."/>
        <section class="quiz">
            {questions}
            <p class="quiz__progress">
                {move || format!("{} of {} answered", quiz.get().answered(), QUESTIONS.len())}
            </p>
            {move || {
                quiz.get()
                    .result()
                    .map(|profile| {
                        view! {
                            <div class="card quiz__result">
                                <h2>{profile.name}</h2>
                                <p>{profile.summary}</p>
                            </div>
                        }
                    })
            }}
            <button class="btn" on:click=move |_| quiz.update(PsychState::reset)>
                "Start over"
            </button>
        </section>
    }
}
