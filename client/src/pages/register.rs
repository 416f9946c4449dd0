//! Placeholder registration form.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::routes::AppRoute;
use crate::state::forms::{MIN_PASSWORD_LEN, validate_register};

#[component]
pub fn RegisterPage() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let done = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let result = validate_register(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        match result {
            Ok(form) => {
                leptos::logging::log!("registration submitted: {} <{}>", form.name, form.email);
                info.set(format!("Thanks, {}! Your account is ready (not really, this is a preview).", form.name));
                done.set(true);
            }
            Err(e) => {
                leptos::logging::warn!("registration form rejected: {e}");
                info.set(e.to_string());
            }
        }
    };

    let field = move |signal: RwSignal<String>, kind: &'static str, placeholder: &'static str| {
        view! {
            <input
                class="form-input"
                type=kind
                placeholder=placeholder
                prop:value=move || signal.get()
                on:input=move |ev| signal.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <Title text=AppRoute::Register.title()/>
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1>"Create your account"</h1>
                {field(name, "text", "Your name")}
                {field(email, "email", "you@example.com")}
                {field(password, "password", "Password")}
                {field(confirm, "password", "Confirm password")}
                <p class="form-hint">{format!("At least {MIN_PASSWORD_LEN} characters.")}</p>
                <button class="btn btn--primary" type="submit" disabled=move || done.get()>
                    "Sign up"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="form-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__alt">
                    "Already a member? " <a href=AppRoute::Login.path()>"Log in"</a>
                </p>
            </form>
        </div>
    }
}
