//! Scroll-driven page effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders nothing. After hydration it installs two intersection observers
//! (entry reveal for `[data-animate]`, in-view tracking for the countdown,
//! social, and store sections), a frame-coalesced parallax scroll listener,
//! and a debounced resize handler. Everything is torn down on cleanup.

use leptos::prelude::*;

#[component]
pub fn ScrollEffects() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    {
        let installed = StoredValue::new_local(None::<browser::Effects>);
        Effect::new(move || {
            if installed.with_value(Option::is_some) {
                return;
            }
            installed.set_value(Some(browser::Effects::install()));
        });
        on_cleanup(move || installed.set_value(None));
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;

    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    use crate::util::animation::{
        EntryAnimation, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD, RESIZE_DEBOUNCE_MS, RevealSection, SECTION_ROOT_MARGIN,
        SECTION_THRESHOLD, decoration_offset, parse_delay_ms, showcase_height, showcase_offset,
    };
    use crate::util::dom::{self, Listener};
    use crate::util::timer::{Debouncer, FrameGate, defer};

    type ObserverCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

    /// Live observers and listeners; dropping disconnects them.
    pub struct Effects {
        _observers: Vec<Observer>,
        _listeners: Vec<Listener>,
    }

    impl Effects {
        pub fn install() -> Self {
            let observers: Vec<Observer> = [
                observe("[data-animate]", REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN, reveal),
                observe(&RevealSection::selector(), SECTION_THRESHOLD, SECTION_ROOT_MARGIN, track_section),
            ]
            .into_iter()
            .flatten()
            .collect();

            let mut listeners = Vec::new();
            if let Some(window) = web_sys::window() {
                listeners.extend(parallax_listener(&window));
                listeners.extend(resize_listener(&window));
            }
            leptos::logging::log!(
                "animations: {} observers, {} listeners installed",
                observers.len(),
                listeners.len()
            );
            Self {
                _observers: observers,
                _listeners: listeners,
            }
        }
    }

    struct Observer {
        inner: IntersectionObserver,
        _callback: ObserverCallback,
    }

    impl Drop for Observer {
        fn drop(&mut self) {
            self.inner.disconnect();
        }
    }

    fn observe<F>(selector: &str, threshold: f64, root_margin: &str, mut on_entry: F) -> Option<Observer>
    where
        F: FnMut(&IntersectionObserverEntry, &IntersectionObserver) + 'static,
    {
        let callback: ObserverCallback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                    on_entry(&entry, &observer);
                }
            }
        }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let inner = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for el in dom::query_all(selector) {
            inner.observe(&el);
        }
        Some(Observer {
            inner,
            _callback: callback,
        })
    }

    fn reveal(entry: &IntersectionObserverEntry, observer: &IntersectionObserver) {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        observer.unobserve(&target);
        let animation = EntryAnimation::from_attr(target.get_attribute("data-animate").as_deref());
        let delay = parse_delay_ms(target.get_attribute("data-delay").as_deref());
        defer(delay, move || {
            dom::set_class(&target, "animate-in", true);
            dom::set_style(&target, "animation", &animation.css());
        });
    }

    fn track_section(entry: &IntersectionObserverEntry, _observer: &IntersectionObserver) {
        let target = entry.target();
        if !entry.is_intersecting() {
            dom::set_class(&target, "in-view", false);
            return;
        }
        dom::set_class(&target, "in-view", true);
        let class_name = target.class_name();
        if let Some(section) = RevealSection::from_classes(class_name.split_whitespace()) {
            stagger_children(&target, section);
        }
    }

    fn stagger_children(section_el: &Element, section: RevealSection) {
        for (index, child) in dom::query_all_in(section_el, section.child_selector()).into_iter().enumerate() {
            defer(section.child_delay_ms(index), move || {
                dom::set_style(&child, "animation", section.child_animation());
            });
        }
    }

    fn update_parallax() {
        let scroll = dom::scroll_y();
        for (index, decoration) in dom::query_all(".decoration-circle").iter().enumerate() {
            dom::set_style(decoration, "transform", &format!("translateY({}px)", decoration_offset(scroll, index)));
        }
        if let Some(showcase) = dom::query(".product-showcase") {
            let _ = showcase
                .style()
                .set_property("transform", &format!("translateY({}px)", showcase_offset(scroll)));
        }
    }

    fn parallax_listener(window: &web_sys::Window) -> Option<Listener> {
        let gate = Rc::new(Cell::new(FrameGate::default()));
        let frame = {
            let gate = Rc::clone(&gate);
            Rc::new(Closure::wrap(Box::new(move |_ts: f64| {
                let mut g = gate.get();
                g.complete();
                gate.set(g);
                update_parallax();
            }) as Box<dyn FnMut(f64)>))
        };

        Listener::passive(window.as_ref(), "scroll", move |_| {
            let mut g = gate.get();
            let first = g.request();
            gate.set(g);
            if !first {
                return;
            }
            let requested = web_sys::window()
                .is_some_and(|w| w.request_animation_frame((*frame).as_ref().unchecked_ref()).is_ok());
            if !requested {
                let mut g = gate.get();
                g.complete();
                gate.set(g);
            }
        })
    }

    fn remeasure_showcase() {
        let Some(showcase) = dom::query(".product-showcase") else {
            return;
        };
        let style = showcase.style();
        let _ = style.set_property("height", "auto");
        let height = showcase_height(f64::from(showcase.offset_height()));
        let _ = style.set_property("height", &format!("{height}px"));
    }

    fn resize_listener(window: &web_sys::Window) -> Option<Listener> {
        let debounce = Rc::new(Cell::new(Debouncer::default()));
        Listener::new(window.as_ref(), "resize", move |_| {
            let mut d = debounce.get();
            let generation = d.trigger();
            debounce.set(d);
            let debounce = Rc::clone(&debounce);
            defer(RESIZE_DEBOUNCE_MS, move || {
                if debounce.get().is_current(generation) {
                    remeasure_showcase();
                }
            });
        })
    }
}
