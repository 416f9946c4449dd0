//! Placeholder login form. Valid submissions are only logged.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;
use crate::state::forms::validate_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(form) => {
                leptos::logging::log!("login submitted for {}", form.email);
                info.set(format!("Welcome back, {}! (Sign-in is simulated.)", form.email));
                password.set(String::new());
            }
            Err(e) => {
                leptos::logging::warn!("login form rejected: {e}");
                info.set(e.to_string());
            }
        }
    };

    view! {
        <Title text=AppRoute::Login.title()/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Welcome back"</h1>
                <input
                    class="form-input"
                    type="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button class="btn btn--primary" type="submit">
                    "Log in"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__alt">
                    "New here? " <a href=AppRoute::Register.path()>"Create an account"</a>
                </p>
            </form>
        </div>
    }
}
