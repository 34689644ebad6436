//! Accessibility copy and keyboard-navigation tracking.

#[cfg(test)]
#[path = "a11y_test.rs"]
mod a11y_test;

use crate::state::theme::Theme;

pub const SKIP_LINK_TARGET: &str = "#main-content";
pub const SKIP_LINK_TEXT: &str = "Skip to main content";
/// How long an announcement stays in the live region.
pub const ANNOUNCEMENT_CLEAR_MS: u32 = 1000;

pub const COUNTDOWN_COMPLETE_ANNOUNCEMENT: &str = "Launch countdown completed!";
pub const SIGNUP_ANNOUNCEMENT: &str = "Successfully joined the waitlist";

#[must_use]
pub fn theme_announcement(theme: Theme) -> String {
    format!("Switched to {theme} mode")
}

/// Whether focus rings should show, based on the last input modality.
///
/// Tab switches to keyboard mode; any mouse press switches back.
#[must_use]
pub fn keyboard_navigation_after_key(current: bool, key: &str) -> bool {
    current || key == "Tab"
}

/// Keys that activate a button-like control.
#[must_use]
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}
