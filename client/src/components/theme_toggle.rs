//! Light/dark theme toggle button.
//!
//! SYSTEM CONTEXT
//! ==============
//! The head bootstrap script applies the theme before first paint; the
//! controller is built after hydration and adopts that theme. Theme changes travel over the event bus; `App` turns them
//! into `UiState` updates, announcements, and the `<html>` attribute.

use leptos::prelude::*;

use crate::events::EventBus;
use crate::state::ui::UiState;
use crate::util::a11y::is_activation_key;
use crate::util::storage::BrowserStorage;
use crate::util::theme::{ThemeController, applied_theme, system_prefers_dark};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let bus = expect_context::<EventBus>();
    let controller = StoredValue::new(None::<ThemeController<BrowserStorage>>);

    Effect::new(move || {
        if controller.with_value(Option::is_some) {
            return;
        }
        let instance = ThemeController::adopt(BrowserStorage, bus.clone(), applied_theme(), system_prefers_dark());
        let theme = instance.current();
        controller.set_value(Some(instance));
        ui.update(|u| u.theme = theme);
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::dom::Listener;
        use crate::util::theme::DARK_SCHEME_QUERY;
        use wasm_bindgen::JsCast;

        let media_listener = StoredValue::new_local(None::<Listener>);
        Effect::new(move || {
            if media_listener.with_value(Option::is_some) {
                return;
            }
            let Some(query) = web_sys::window().and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten()) else {
                return;
            };
            let listener = Listener::new(query.as_ref(), "change", move |event| {
                let Some(change) = event.dyn_ref::<web_sys::MediaQueryListEvent>() else {
                    return;
                };
                let prefers_dark = change.matches();
                let applied = controller
                    .try_update_value(|c| c.as_mut().and_then(|c| c.on_system_change(prefers_dark)))
                    .flatten();
                if applied.is_none() {
                    leptos::logging::log!("theme: ignoring OS scheme change, preference is stored");
                }
            });
            media_listener.set_value(listener);
        });
        on_cleanup(move || media_listener.set_value(None));
    }

    let toggle = move || {
        controller.update_value(|c| {
            if let Some(c) = c.as_mut() {
                c.toggle();
            }
        });
    };

    let is_dark = move || ui.with(|u| u.theme.is_dark());

    view! {
        <button
            id="themeToggle"
            class="theme-toggle"
            type="button"
            aria-label="Toggle dark mode"
            aria-pressed=move || if is_dark() { "true" } else { "false" }
            on:click=move |_| toggle()
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    toggle();
                }
            }
        >
            <span class="light-icon" aria-hidden="true" style:display=move || if is_dark() { "none" } else { "block" }>
                "☀"
            </span>
            <span class="dark-icon" aria-hidden="true" style:display=move || if is_dark() { "block" } else { "none" }>
                "☾"
            </span>
        </button>
    }
}
