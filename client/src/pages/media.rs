//! Media gallery with a category filter.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::media::{MediaFilter, MediaKind, filter_media};

#[component]
pub fn MediaPage() -> impl IntoView {
    let filter = RwSignal::new(MediaFilter::default());
    let selected = RwSignal::new(None::<&'static str>);

    view! {
        <Title text=AppRoute::Media.title()/>
        <PageHero title="Media gallery" subtitle="Made by the community with the creation studio."/>
        <div class="filter-bar" role="tablist">
            {MediaFilter::ALL
                .into_iter()
                .map(|f| {
                    view! {
                        <button
                            role="tab"
                            class=move || if filter.get() == f { "btn btn--chip btn--active" } else { "btn btn--chip" }
                            on:click=move |_| filter.set(f)
                        >
                            {f.label()}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
        <section class="gallery">
            {move || {
                filter_media(filter.get())
                    .into_iter()
                    .map(|item| {
                        let id = item.id;
                        let badge = match (item.kind, item.duration) {
                            (MediaKind::Image, _) | (_, None) => item.kind.label().to_owned(),
                            (kind, Some(duration)) => format!("{} · {duration}", kind.label()),
                        };
                        view! {
                            <figure
                                class=move || {
                                    if selected.get() == Some(id) { "gallery__item gallery__item--open" } else { "gallery__item" }
                                }
                                on:click=move |_| selected.update(|s| *s = if *s == Some(id) { None } else { Some(id) })
                            >
                                <img src=item.thumbnail alt=item.title/>
                                <figcaption>
                                    <strong>{item.title}</strong>
                                    <span>{format!("by {}", item.creator)}</span>
                                    <span class="tag">{badge}</span>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </section>
    }
}
