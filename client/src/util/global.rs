//! Page-wide error and performance logging.
//!
//! Uncaught errors and unhandled promise rejections are logged and never
//! rethrown; nothing on the landing page is fatal.

#[cfg(test)]
#[path = "global_test.rs"]
mod global_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

/// Milliseconds from navigation start to the end of the load event, if the
/// browser reported both.
#[must_use]
pub fn load_time_ms(navigation_start: f64, load_event_end: f64) -> Option<f64> {
    (navigation_start > 0.0 && load_event_end >= navigation_start).then(|| load_event_end - navigation_start)
}

/// Install `error` and `unhandledrejection` loggers on `window`.
pub fn install_error_loggers() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };

        let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|event: web_sys::ErrorEvent| {
            leptos::logging::error!(
                "Solus Foods error: {} ({}:{})",
                event.message(),
                event.filename(),
                event.lineno()
            );
        });
        let _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
        on_error.forget();

        let on_rejection =
            Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(|event: web_sys::PromiseRejectionEvent| {
                leptos::logging::error!("Solus Foods promise error: {:?}", event.reason());
            });
        let _ = window.add_event_listener_with_callback("unhandledrejection", on_rejection.as_ref().unchecked_ref());
        on_rejection.forget();
    }
}

/// `true` while the tab is in the background. Always `false` off-browser.
#[must_use]
pub fn page_hidden() -> bool {
    #[cfg(feature = "hydrate")]
    {
        super::dom::document_hidden()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Log the page load time once the window `load` event has fired.
pub fn log_load_time() {
    #[cfg(feature = "hydrate")]
    {
        let Some(timing) = web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.timing())
        else {
            return;
        };
        let (start, end) = (timing.navigation_start(), timing.load_event_end());
        if let Some(ms) = load_time_ms(start, end) {
            leptos::logging::log!("Solus Foods loaded in: {ms}ms");
        }
    }
}
