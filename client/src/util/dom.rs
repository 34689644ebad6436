//! Thin `web_sys` helpers for imperative DOM touches.
//!
//! Only compiled for `hydrate`. Every helper tolerates a missing window,
//! document, or element and silently does nothing.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

/// DOM event listener that is removed when dropped.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `target`. `None` if the browser refused it.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        Self::attach(target, event, handler, |target, callback| {
            target.add_event_listener_with_callback(event, callback)
        })
    }

    /// Like [`Listener::new`], registered with `{ passive: true }` so the
    /// browser never waits on `handler` before scrolling.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        Self::attach(target, event, handler, |target, callback| {
            target.add_event_listener_with_callback_and_add_event_listener_options(event, callback, &options)
        })
    }

    fn attach<F, A>(target: &EventTarget, event: &'static str, handler: F, add: A) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
        A: FnOnce(&EventTarget, &js_sys::Function) -> Result<(), JsValue>,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        add(target, callback.as_ref().unchecked_ref()).ok()?;
        Some(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn body() -> Option<HtmlElement> {
    document().and_then(|d| d.body())
}

/// All elements matching `selector`, in document order.
pub fn query_all(selector: &str) -> Vec<Element> {
    let Some(list) = document().and_then(|d| d.query_selector_all(selector).ok()) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Descendants of `root` matching `selector`, in document order.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query(selector: &str) -> Option<HtmlElement> {
    document()?
        .query_selector(selector)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property(property, value);
    }
}

pub fn set_body_class(class: &str, enabled: bool) {
    if let Some(body) = body() {
        let list = body.class_list();
        let _ = if enabled { list.add_1(class) } else { list.remove_1(class) };
    }
}

pub fn set_class(el: &Element, class: &str, enabled: bool) {
    let list = el.class_list();
    let _ = if enabled { list.add_1(class) } else { list.remove_1(class) };
}

pub fn document_hidden() -> bool {
    document().is_some_and(|d| d.hidden())
}

pub fn document_ready() -> bool {
    document().is_some_and(|d| d.ready_state() == "complete")
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}
