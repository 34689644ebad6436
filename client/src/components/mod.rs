//! Landing page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read shared `UiState` and the `EventBus` from Leptos context.
//! Browser-only wiring (timers, observers, listeners) is installed from
//! effects so the server render stays deterministic.

pub mod a11y;
pub mod countdown;
pub mod product_showcase;
pub mod scroll_reveal;
pub mod signup_form;
pub mod social_card;
pub mod theme_toggle;
