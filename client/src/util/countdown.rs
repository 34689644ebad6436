//! Countdown arithmetic and completion tracking.
//!
//! The browser component owns the timer; this module owns the math and the
//! "complete exactly once" guarantee so both are testable without a clock.

#[cfg(test)]
#[path = "countdown_test.rs"]
mod countdown_test;

use crate::events::{EventBus, LandingEvent};

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Remaining time split into display units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeUnits {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeUnits {
    pub const ZERO: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0 };

    /// Split `remaining_ms` into whole units. Negative input clamps to zero.
    #[must_use]
    pub fn from_remaining_ms(remaining_ms: i64) -> Self {
        if remaining_ms <= 0 {
            return Self::ZERO;
        }
        Self {
            days: remaining_ms / MS_PER_DAY,
            hours: (remaining_ms % MS_PER_DAY) / MS_PER_HOUR,
            minutes: (remaining_ms % MS_PER_HOUR) / MS_PER_MINUTE,
            seconds: (remaining_ms % MS_PER_MINUTE) / MS_PER_SECOND,
        }
    }

    /// Zero-padded digits in slot order: days, hours, minutes, seconds.
    #[must_use]
    pub fn digits(&self) -> [String; 4] {
        [
            pad_two(self.days),
            pad_two(self.hours),
            pad_two(self.minutes),
            pad_two(self.seconds),
        ]
    }

    /// `DD:HH:MM:SS` rendering, mostly for logs and assertions.
    #[must_use]
    pub fn display(&self) -> String {
        self.digits().join(":")
    }
}

/// Pad to at least two digits; wider values are printed in full.
#[must_use]
pub fn pad_two(value: i64) -> String {
    format!("{value:02}")
}

/// Result of evaluating the countdown at one instant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    Running(TimeUnits),
    /// First tick at or past the target.
    Completed,
    /// Any later tick once completion was already reported.
    Finished,
}

impl CountdownTick {
    #[must_use]
    pub fn units(self) -> TimeUnits {
        match self {
            Self::Running(units) => units,
            Self::Completed | Self::Finished => TimeUnits::ZERO,
        }
    }

    #[must_use]
    pub fn is_running(self) -> bool {
        matches!(self, Self::Running(_))
    }
}

/// Countdown toward a fixed instant with a one-shot completion flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    target_ms: i64,
    complete: bool,
}

impl Countdown {
    #[must_use]
    pub fn new(target_ms: i64) -> Self {
        Self { target_ms, complete: false }
    }

    #[must_use]
    pub fn target_ms(&self) -> i64 {
        self.target_ms
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn tick(&mut self, now_ms: i64) -> CountdownTick {
        let remaining = self.target_ms.saturating_sub(now_ms);
        if remaining > 0 {
            return CountdownTick::Running(TimeUnits::from_remaining_ms(remaining));
        }
        if self.complete {
            CountdownTick::Finished
        } else {
            self.complete = true;
            CountdownTick::Completed
        }
    }

    /// Point at a new target and re-arm completion.
    pub fn retarget(&mut self, target_ms: i64) {
        self.target_ms = target_ms;
        self.complete = false;
    }
}

/// What the ticking timer should do after a page visibility change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisibilityAction {
    /// Page hidden: stop ticking.
    Pause,
    /// Page visible again: render this tick and re-arm while it is running.
    Resume(CountdownTick),
    /// Countdown already finished; the timer stays stopped.
    Stay,
}

/// [`Countdown`] that announces completion on the event bus.
#[derive(Debug, Clone)]
pub struct CountdownController {
    countdown: Countdown,
    bus: EventBus,
}

impl CountdownController {
    #[must_use]
    pub fn new(target_ms: i64, bus: EventBus) -> Self {
        Self { countdown: Countdown::new(target_ms), bus }
    }

    #[must_use]
    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    /// Evaluate at `now_ms`, publishing `CountdownComplete` on the first
    /// completed tick only.
    pub fn tick(&mut self, now_ms: i64) -> CountdownTick {
        let tick = self.countdown.tick(now_ms);
        if tick == CountdownTick::Completed {
            leptos::logging::log!("countdown completed");
            self.bus.publish(&LandingEvent::CountdownComplete { at_ms: now_ms });
        }
        tick
    }

    /// Decide how the timer reacts when the page becomes hidden or visible.
    /// A visible page ticks immediately so the display catches up.
    pub fn on_visibility(&mut self, hidden: bool, now_ms: i64) -> VisibilityAction {
        if hidden {
            VisibilityAction::Pause
        } else if self.countdown.is_complete() {
            VisibilityAction::Stay
        } else {
            VisibilityAction::Resume(self.tick(now_ms))
        }
    }

    pub fn retarget(&mut self, target_ms: i64) {
        self.countdown.retarget(target_ms);
    }
}
