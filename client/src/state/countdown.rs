//! Countdown display state.

use crate::util::countdown::TimeUnits;

/// What the countdown slots currently show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountdownState {
    pub units: TimeUnits,
    pub complete: bool,
    /// `true` while the one-second timer is armed.
    pub ticking: bool,
}
