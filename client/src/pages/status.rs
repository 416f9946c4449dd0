//! Route-level status pages.

use leptos::prelude::*;

use crate::components::status_page::StatusPage;
use crate::error::PageError;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! { <StatusPage error=PageError::NotFound/> }
}

#[component]
pub fn ServerErrorPage() -> impl IntoView {
    view! { <StatusPage error=PageError::Server/> }
}
