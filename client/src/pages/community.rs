//! Community thread with a local comment box.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::community::{CommunityState, TRENDING_TOPICS};

#[component]
pub fn CommunityPage() -> impl IntoView {
    let community = RwSignal::new(CommunityState::default());
    let draft = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if community.try_update(|c| c.post(&draft.get_untracked())).unwrap_or(false) {
            draft.set(String::new());
        }
    };

    view! {
        <Title text=AppRoute::Community.title()/>
        <PageHero title="Community" subtitle="Share what you made, ask for tips, cheer each other on."/>
        <div class="community">
            <section class="community__thread">
                <form class="comment-box" on:submit=on_submit>
                    <textarea
                        class="comment-box__input"
                        placeholder="Share something with the community..."
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                    ></textarea>
                    <button class="btn btn--primary" type="submit" disabled=move || draft.get().trim().is_empty()>
                        "Post"
                    </button>
                </form>

                <For
                    each=move || community.get().comments
                    key=|c| (c.id.clone(), c.likes, c.liked)
                    children=move |comment| {
                        let id = comment.id.clone();
                        view! {
                            <article class="comment">
                                <header class="comment__meta">
                                    <strong>{comment.author}</strong>
                                    <span>{comment.posted}</span>
                                </header>
                                <p>{comment.body}</p>
                                <button
                                    class=if comment.liked { "btn btn--chip btn--active" } else { "btn btn--chip" }
                                    on:click=move |_| community.update(|c| c.toggle_like(&id))
                                >
                                    {format!("♥ {}", comment.likes)}
                                </button>
                            </article>
                        }
                    }
                />
            </section>

            <aside class="community__sidebar card">
                <h3>"Trending"</h3>
                <ul>
                    {TRENDING_TOPICS
                        .iter()
                        .map(|&(tag, posts)| view! { <li><span>{tag}</span>" "<small>{format!("{posts} posts")}</small></li> })
                        .collect::<Vec<_>>()}
                </ul>
                <a href=AppRoute::Groups.path() class="btn">
                    "Browse groups"
                </a>
            </aside>
        </div>
    }
}
