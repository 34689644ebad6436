//! Theme resolution, toggling, and persistence.
//!
//! Reads the stored preference from `localStorage`, falls back to the OS
//! `prefers-color-scheme`, and applies a `data-theme` attribute to the
//! `<html>` element. Requires a browser environment for the DOM helpers;
//! SSR paths no-op to keep server rendering deterministic.
//!
//! [`bootstrap_script`] runs in `<head>` and applies the theme before first
//! paint; [`ThemeController::adopt`] picks it up after hydration.
//!
//! The resolved initial theme is applied but not persisted, so an OS scheme
//! change still takes effect until the visitor picks a theme explicitly.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::config::THEME_STORAGE_KEY;
use crate::events::{EventBus, LandingEvent};
use crate::state::theme::Theme;

use super::storage::KeyValueStore;

pub const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Stored preference if present and valid.
pub fn stored_theme(store: &impl KeyValueStore) -> Option<Theme> {
    store.get(THEME_STORAGE_KEY)?.parse().ok()
}

/// Stored preference, else the OS preference.
pub fn resolve_initial(store: &impl KeyValueStore, system_prefers_dark: bool) -> Theme {
    stored_theme(store).unwrap_or_else(|| Theme::from_prefers_dark(system_prefers_dark))
}

/// Owns the current theme and its persistence.
#[derive(Debug, Clone)]
pub struct ThemeController<S> {
    store: S,
    bus: EventBus,
    current: Theme,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn new(store: S, bus: EventBus, system_prefers_dark: bool) -> Self {
        let current = resolve_initial(&store, system_prefers_dark);
        Self { store, bus, current }
    }

    /// Take over the theme the head bootstrap script already applied,
    /// resolving from storage and the OS only when nothing was applied.
    /// Nothing is persisted or published.
    pub fn adopt(store: S, bus: EventBus, applied: Option<Theme>, system_prefers_dark: bool) -> Self {
        let current = applied.unwrap_or_else(|| resolve_initial(&store, system_prefers_dark));
        Self { store, bus, current }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub fn has_stored_preference(&self) -> bool {
        stored_theme(&self.store).is_some()
    }

    /// Switch to `theme`, persist it, and publish `ThemeChanged`.
    pub fn set(&mut self, theme: Theme) {
        self.current = theme;
        if let Err(e) = self.store.set(THEME_STORAGE_KEY, theme.as_str()) {
            leptos::logging::warn!("theme: preference not persisted: {e}");
        }
        self.bus.publish(&LandingEvent::ThemeChanged { theme });
    }

    pub fn toggle(&mut self) -> Theme {
        let next = self.current.toggled();
        self.set(next);
        next
    }

    /// Follow an OS scheme change unless the visitor chose a theme.
    /// Returns the applied theme, or `None` when the change was ignored.
    pub fn on_system_change(&mut self, prefers_dark: bool) -> Option<Theme> {
        if self.has_stored_preference() {
            return None;
        }
        let theme = Theme::from_prefers_dark(prefers_dark);
        self.current = theme;
        self.bus.publish(&LandingEvent::ThemeChanged { theme });
        Some(theme)
    }
}

/// Blocking `<head>` script that sets `data-theme` before first paint.
/// Same resolution order as [`resolve_initial`]; storage or media query
/// failures fall back to light.
#[must_use]
pub fn bootstrap_script() -> String {
    format!(
        concat!(
            "(function(){{var t=null;",
            "try{{t=window.localStorage.getItem(\"{key}\");}}catch(e){{}}",
            "if(t!==\"light\"){{if(t!==\"dark\"){{",
            "try{{t=window.matchMedia(\"{query}\").matches?\"dark\":\"light\";}}catch(e){{t=\"light\";}}",
            "}}}}",
            "document.documentElement.setAttribute(\"data-theme\",t);}})();"
        ),
        key = THEME_STORAGE_KEY,
        query = DARK_SCHEME_QUERY,
    )
}

/// Theme currently on the `<html>` element, if any.
#[must_use]
pub fn applied_theme() -> Option<Theme> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .and_then(|el| el.get_attribute("data-theme"))
            .and_then(|value| value.parse().ok())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// `true` if the OS reports a dark color scheme.
#[must_use]
pub fn system_prefers_dark() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.match_media(DARK_SCHEME_QUERY).ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
