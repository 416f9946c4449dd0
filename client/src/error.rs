//! User-facing page errors rendered by the status page and error boundary.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PageError {
    #[error("Page not found")]
    NotFound,
    #[error("Something went wrong on our side")]
    Server,
}

impl PageError {
    pub fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::Server => 500,
        }
    }

    pub fn detail(self) -> &'static str {
        match self {
            Self::NotFound => "The page you are looking for has moved or never existed.",
            Self::Server => "Please refresh the page or try again in a few minutes.",
        }
    }

    /// Set the HTTP status of the server-rendered response.
    pub fn mark_response(self) {
        #[cfg(feature = "ssr")]
        {
            if let Some(response) = leptos::prelude::use_context::<leptos_axum::ResponseOptions>() {
                if let Ok(status) = http::StatusCode::from_u16(self.status_code()) {
                    response.set_status(status);
                }
            }
        }
    }
}
