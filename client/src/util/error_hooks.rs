//! Process-wide error reporting for the browser build.
//!
//! Installs `window` listeners for `error` and `unhandledrejection` that log
//! to the console, plus the panic hook. Nothing is retried or reported
//! remotely.

#[cfg(test)]
#[path = "error_hooks_test.rs"]
mod error_hooks_test;

/// Console line for an uncaught script error.
pub fn describe_error(message: &str, source: &str, line: u32) -> String {
    if source.is_empty() {
        format!("uncaught error: {message}")
    } else {
        format!("uncaught error: {message} ({source}:{line})")
    }
}

/// Console line for an unhandled promise rejection.
pub fn describe_rejection(reason: &str) -> String {
    format!("unhandled rejection: {reason}")
}

/// Install the global handlers. Call once from the hydrate entry point.
pub fn install() {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        console_error_panic_hook::set_once();

        let Some(window) = web_sys::window() else {
            return;
        };

        let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|ev: web_sys::ErrorEvent| {
            leptos::logging::error!("{}", describe_error(&ev.message(), &ev.filename(), ev.lineno()));
        });
        if window
            .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("could not install window error listener");
        }
        on_error.forget();

        let on_rejection =
            Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(|ev: web_sys::PromiseRejectionEvent| {
                let reason = ev.reason().as_string().unwrap_or_else(|| format!("{:?}", ev.reason()));
                leptos::logging::error!("{}", describe_rejection(&reason));
            });
        if window
            .add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref())
            .is_err()
        {
            leptos::logging::warn!("could not install unhandledrejection listener");
        }
        on_rejection.forget();
    }
}
