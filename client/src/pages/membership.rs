//! Membership plans with a monthly / yearly billing toggle.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::page_hero::PageHero;
use crate::routes::AppRoute;
use crate::state::membership::{Billing, PLANS, price_label};

#[component]
pub fn MembershipPage() -> impl IntoView {
    let billing = RwSignal::new(Billing::default());
    let chosen = RwSignal::new(None::<&'static str>);

    view! {
        <Title text=AppRoute::Membership.title()/>
        <PageHero title="Choose your plan" subtitle="Start free. Upgrade when you need more.">
            <label class="switch">
                <span>"Monthly"</span>
                <input
                    type="checkbox"
                    prop:checked=move || billing.get() == Billing::Yearly
                    on:change=move |_| billing.update(|b| *b = b.toggled())
                />
                <span>"Yearly (2 months free)"</span>
            </label>
        </PageHero>

        <section class="plan-grid">
            {PLANS
                .iter()
                .map(|plan| {
                    let id = plan.id;
                    view! {
                        <div class=if plan.highlighted { "card plan plan--highlighted" } else { "card plan" }>
                            <h3>{plan.name}</h3>
                            <p class="plan__price">{move || price_label(plan, billing.get())}</p>
                            <p>{plan.tagline}</p>
                            <ul class="card__bullets">
                                {plan.features.iter().map(|f| view! { <li>{*f}</li> }).collect::<Vec<_>>()}
                            </ul>
                            <button
                                class="btn btn--primary"
                                on:click=move |_| {
                                    leptos::logging::log!("plan selected: {id} ({:?})", billing.get_untracked());
                                    chosen.set(Some(id));
                                }
                            >
                                {move || if chosen.get() == Some(id) { "Selected" } else { "Choose plan" }}
                            </button>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </section>
        <Show when=move || chosen.get().is_some()>
            <p class="notice">"Checkout is not available in this preview. No payment was taken."</p>
        </Show>
    }
}
