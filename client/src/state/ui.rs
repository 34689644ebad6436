//! Page chrome state: theme, announcements, load and input modality flags.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use super::theme::Theme;
use crate::events::LandingEvent;
use crate::util::a11y::{COUNTDOWN_COMPLETE_ANNOUNCEMENT, SIGNUP_ANNOUNCEMENT, theme_announcement};

/// UI state shared through context by the landing page components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    /// Text currently in the polite ARIA live region.
    pub announcement: String,
    /// Bumped per announcement so only the latest one is auto-cleared.
    pub announcement_seq: u64,
    pub keyboard_navigation: bool,
    pub loaded: bool,
    pub images_loaded: bool,
    /// Mirrors `document.hidden`; pauses decorative animations.
    pub page_hidden: bool,
    pub countdown_complete: bool,
}

impl UiState {
    /// Put `message` in the live region and return its sequence number.
    pub fn announce(&mut self, message: impl Into<String>) -> u64 {
        self.announcement = message.into();
        self.announcement_seq += 1;
        self.announcement_seq
    }

    /// Fold a bus event into page state. Returns the announcement sequence.
    pub fn apply_event(&mut self, event: &LandingEvent) -> u64 {
        match event {
            LandingEvent::ThemeChanged { theme } => {
                self.theme = *theme;
                self.announce(theme_announcement(*theme))
            }
            LandingEvent::CountdownComplete { .. } => {
                self.countdown_complete = true;
                self.announce(COUNTDOWN_COMPLETE_ANNOUNCEMENT)
            }
            LandingEvent::SignupSucceeded { .. } => self.announce(SIGNUP_ANNOUNCEMENT),
        }
    }

    /// Clear the live region if `seq` is still the latest announcement.
    pub fn clear_announcement(&mut self, seq: u64) {
        if self.announcement_seq == seq {
            self.announcement.clear();
        }
    }

    /// `animation-play-state` for decorative animations.
    #[must_use]
    pub fn animation_play_state(&self) -> &'static str {
        if self.page_hidden { "paused" } else { "running" }
    }
}
