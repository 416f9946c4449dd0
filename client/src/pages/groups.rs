//! Group directory with search and join toggles.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::groups::GroupsState;

#[component]
pub fn GroupsPage() -> impl IntoView {
    let groups = RwSignal::new(GroupsState::default());

    view! {
        <Title text=AppRoute::Groups.title()/>
        <PageHero title="Groups" subtitle="Find your people, from prompt crafters to night owls."/>
        <input
            class="search-input"
            type="search"
            placeholder="Search by name or topic"
            prop:value=move || groups.get().query
            on:input=move |ev| groups.update(|g| g.query = event_target_value(&ev))
        />
        <section class="card-grid">
            {move || {
                let state = groups.get();
                let visible = state.visible();
                if visible.is_empty() {
                    return view! { <p class="empty-state">"No groups match your search."</p> }.into_any();
                }
                visible
                    .into_iter()
                    .map(|group| {
                        let joined = state.is_joined(group.id);
                        let members = state.member_count(group);
                        let id = group.id;
                        view! {
                            <div class="card">
                                <span class="tag">{group.topic}</span>
                                <h3>{group.name}</h3>
                                <p>{group.description}</p>
                                <p class="card__meta">{format!("{members} members")}</p>
                                <button
                                    class=if joined { "btn" } else { "btn btn--primary" }
                                    on:click=move |_| groups.update(|g| g.toggle_join(id))
                                >
                                    {if joined { "Leave" } else { "Join" }}
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_any()
            }}
        </section>
    }
}
