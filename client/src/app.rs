//! Root application component with routing, context providers, and
//! page-wide wiring.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` owns the [`EventBus`] and [`UiState`]. Bus events are folded into
//! `UiState`; effects then mirror that state onto `<html>` and `<body>`
//! (theme attribute, `dark-theme-active`, `keyboard-navigation`, `loaded`,
//! `images-loaded`, animation play state).

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::a11y::{LiveRegion, SkipLink};
use crate::events::{EventBus, SubscriptionId};
use crate::pages::landing::LandingPage;
use crate::state::ui::UiState;
use crate::util::a11y::{ANNOUNCEMENT_CLEAR_MS, keyboard_navigation_after_key};
use crate::util::animation::PAGE_LOADED_DELAY_MS;
use crate::util::global::{log_load_time, page_hidden};
use crate::util::theme;
use crate::util::timer::defer;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script inner_html=theme::bootstrap_script()></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let bus = EventBus::new();
    let ui = RwSignal::new(UiState::default());
    provide_context(bus.clone());
    provide_context(ui);

    let subscription = subscribe_ui(&bus, ui);
    on_cleanup(move || {
        bus.unsubscribe(subscription);
    });

    mirror_ui_onto_document(ui);
    install_window_listeners(ui);

    Effect::new(move || {
        defer(PAGE_LOADED_DELAY_MS, move || ui.update(|u| u.loaded = true));
        #[cfg(feature = "hydrate")]
        {
            let images = browser::track_images(ui);
            let held = StoredValue::new_local(images);
            on_cleanup(move || held.set_value(Vec::new()));
        }
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/solus-landing.css"/>
        <Title text="Solus Foods | Coming Soon"/>
        <Meta name="description" content="Solus Foods is launching soon. Join the waitlist for early access."/>

        <SkipLink/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
        <LiveRegion/>
    }
}

/// Fold bus events into `UiState` and schedule the live region clear.
fn subscribe_ui(bus: &EventBus, ui: RwSignal<UiState>) -> SubscriptionId {
    bus.subscribe(move |event| {
        leptos::logging::log!("event: {event:?}");
        let Some(seq) = ui.try_update(|u| u.apply_event(event)) else {
            return;
        };
        defer(ANNOUNCEMENT_CLEAR_MS, move || ui.update(|u| u.clear_announcement(seq)));
    })
}

fn mirror_ui_onto_document(ui: RwSignal<UiState>) {
    let theme_now = Memo::new(move |_| ui.with(|u| u.theme));
    Effect::new(move |previous: Option<()>| {
        let current = theme_now.get();
        // The bootstrap script owns the attribute until ThemeToggle adopts it.
        if previous.is_none() && theme::applied_theme().is_some() {
            return;
        }
        theme::apply(current);
        set_body_class("dark-theme-active", current.is_dark());
    });

    let keyboard = Memo::new(move |_| ui.with(|u| u.keyboard_navigation));
    Effect::new(move || set_body_class("keyboard-navigation", keyboard.get()));

    let images_loaded = Memo::new(move |_| ui.with(|u| u.images_loaded));
    Effect::new(move || set_body_class("images-loaded", images_loaded.get()));

    let play_state = Memo::new(move |_| ui.with(UiState::animation_play_state));
    Effect::new(move || set_body_style("animation-play-state", play_state.get()));

    let loaded = Memo::new(move |_| ui.with(|u| u.loaded));
    Effect::new(move || {
        if !loaded.get() {
            return;
        }
        set_body_class("loaded", true);
        #[cfg(feature = "hydrate")]
        browser::start_entry_animations();
    });
}

fn install_window_listeners(ui: RwSignal<UiState>) {
    let keydown = window_event_listener(ev::keydown, move |event| {
        let key = event.key();
        ui.update(|u| u.keyboard_navigation = keyboard_navigation_after_key(u.keyboard_navigation, &key));
    });
    let mousedown = window_event_listener(ev::mousedown, move |_| {
        if ui.with_untracked(|u| u.keyboard_navigation) {
            ui.update(|u| u.keyboard_navigation = false);
        }
    });
    let visibility = window_event_listener(ev::visibilitychange, move |_| {
        let hidden = page_hidden();
        ui.update(|u| u.page_hidden = hidden);
    });
    let load = window_event_listener(ev::load, move |_| defer(0, log_load_time));

    Effect::new(move || {
        if document_loaded() {
            log_load_time();
        }
    });

    on_cleanup(move || {
        keydown.remove();
        mousedown.remove();
        visibility.remove();
        load.remove();
    });
}

fn set_body_class(class: &str, enabled: bool) {
    #[cfg(feature = "hydrate")]
    crate::util::dom::set_body_class(class, enabled);
    #[cfg(not(feature = "hydrate"))]
    let _ = (class, enabled);
}

fn set_body_style(property: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    if let Some(body) = crate::util::dom::body() {
        let _ = body.style().set_property(property, value);
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (property, value);
}

fn document_loaded() -> bool {
    #[cfg(feature = "hydrate")]
    {
        crate::util::dom::document_ready()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::HtmlImageElement;

    use crate::state::ui::UiState;
    use crate::util::animation::{ENTRANCE_STAGGER_MS, HERO_ENTRANCE, SHOWCASE_ENTRANCE};
    use crate::util::dom::{self, Listener};
    use crate::util::timer::defer;

    pub fn start_entry_animations() {
        if let Some(hero) = dom::query(".hero-content") {
            let style = hero.style();
            let _ = style.set_property("opacity", "1");
            let _ = style.set_property("animation", HERO_ENTRANCE);
        }
        defer(ENTRANCE_STAGGER_MS, || {
            if let Some(showcase) = dom::query(".product-showcase") {
                let style = showcase.style();
                let _ = style.set_property("opacity", "1");
                let _ = style.set_property("animation", SHOWCASE_ENTRANCE);
            }
        });
    }

    /// Tag every `<img>` `loaded` or `error` and flip `images_loaded` once
    /// all of them settle.
    pub fn track_images(ui: RwSignal<UiState>) -> Vec<Listener> {
        let pending = Rc::new(Cell::new(0_usize));
        let mut listeners = Vec::new();

        for img in dom::query_all("img")
            .into_iter()
            .filter_map(|el| el.dyn_into::<HtmlImageElement>().ok())
        {
            if img.complete() {
                dom::set_class(&img, "loaded", true);
                continue;
            }
            pending.set(pending.get() + 1);
            for (event, class) in [("load", "loaded"), ("error", "error")] {
                let pending = Rc::clone(&pending);
                let target = img.clone();
                listeners.extend(Listener::new(img.as_ref(), event, move |_| {
                    dom::set_class(&target, class, true);
                    if class == "error" {
                        leptos::logging::warn!("Failed to load image: {}", target.src());
                    }
                    pending.set(pending.get().saturating_sub(1));
                    if pending.get() == 0 {
                        ui.update(|u| u.images_loaded = true);
                    }
                }));
            }
        }

        if pending.get() == 0 {
            ui.update(|u| u.images_loaded = true);
        }
        listeners
    }
}
