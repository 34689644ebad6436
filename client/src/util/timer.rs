//! Cancellable timers and scheduling guards.
//!
//! [`RepeatingTimer`] and [`OneShot`] wrap `gloo-timers` handles so a timer
//! is cancelled by calling `cancel` or by dropping its owner. [`FrameGate`]
//! and [`Debouncer`] hold the bookkeeping for coalescing scroll work into
//! animation frames and for debouncing resize; they are pure so the rules
//! can be tested natively.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

/// Repeating timer slot. Starting an armed timer replaces the old one.
#[derive(Default)]
pub struct RepeatingTimer {
    #[cfg(feature = "hydrate")]
    handle: Option<gloo_timers::callback::Interval>,
    #[cfg(not(feature = "hydrate"))]
    armed: bool,
}

impl std::fmt::Debug for RepeatingTimer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepeatingTimer")
            .field("active", &self.is_active())
            .finish()
    }
}

impl RepeatingTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer to call `tick` every `period_ms`.
    pub fn start<F>(&mut self, period_ms: u32, tick: F)
    where
        F: FnMut() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            self.handle = Some(gloo_timers::callback::Interval::new(period_ms, tick));
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period_ms, tick);
            self.armed = true;
        }
    }

    /// Stop the timer. Returns `true` if it was armed.
    pub fn cancel(&mut self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.handle.take().is_some_and(|h| {
                let _ = h.cancel();
                true
            })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            std::mem::take(&mut self.armed)
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.handle.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.armed
        }
    }
}

/// Run `f` once after `delay_ms`, detached from any owner.
pub fn defer<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::callback::Timeout::new(delay_ms, f).forget();
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = delay_ms;
        drop(f);
    }
}

/// One-shot timer slot; re-arming cancels the pending callback.
#[derive(Default)]
pub struct OneShot {
    #[cfg(feature = "hydrate")]
    handle: Option<gloo_timers::callback::Timeout>,
}

impl OneShot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule<F>(&mut self, delay_ms: u32, f: F)
    where
        F: FnOnce() + 'static,
    {
        #[cfg(feature = "hydrate")]
        {
            if let Some(previous) = self.handle.replace(gloo_timers::callback::Timeout::new(delay_ms, f)) {
                let _ = previous.cancel();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (delay_ms, f);
        }
    }

    pub fn cancel(&mut self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(handle) = self.handle.take() {
                let _ = handle.cancel();
            }
        }
    }
}

/// Allows at most one pending animation-frame callback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameGate {
    pending: bool,
}

impl FrameGate {
    /// Returns `true` if the caller should request a frame now; `false`
    /// when one is already queued.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Mark the queued frame as run.
    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Generation counter for trailing-edge debounce: only the callback holding
/// the latest generation may run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Debouncer {
    generation: u64,
}

impl Debouncer {
    /// Register a new trigger and return its generation.
    pub fn trigger(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.generation
    }

    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }
}
