//! Bounded retry with linear backoff.
//!
//! DESIGN
//! ======
//! Sleeping goes through [`Sleeper`] so the browser can use `gloo-timers`
//! while tests record requested delays without waiting. The loop has a hard
//! attempt ceiling and no cancellation; a page unload simply drops it.

#[cfg(test)]
#[path = "retry_test.rs"]
mod retry_test;

use std::future::Future;
use std::time::Duration;

/// Something that can wait asynchronously.
#[allow(async_fn_in_trait)]
pub trait Sleeper {
    async fn sleep(&self, duration: Duration);
}

/// Browser timer sleeper. Outside the browser it returns immediately.
#[derive(Clone, Copy, Debug, Default)]
pub struct TimerSleeper;

impl Sleeper for TimerSleeper {
    async fn sleep(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration).await;
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
        }
    }
}

/// Attempt ceiling and base delay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts including the first; clamped to at least one.
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    #[must_use]
    pub fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self { max_attempts: max_attempts.max(1), base_delay }
    }

    /// Delay to wait after failed attempt `attempt` (1-based).
    #[must_use]
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay.saturating_mul(attempt)
    }
}

/// Outcome of [`retry`]: the final result plus how many attempts ran.
#[derive(Debug, PartialEq, Eq)]
pub struct RetryReport<T, E> {
    pub result: Result<T, E>,
    pub attempts: u32,
}

/// Run `op` until it succeeds or `policy.max_attempts` is reached, sleeping
/// `base_delay * attempt` between tries. `op` receives the 1-based attempt.
pub async fn retry<T, E, F, Fut>(policy: RetryPolicy, sleeper: &impl Sleeper, mut op: F) -> RetryReport<T, E>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
{
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op(attempt).await {
            Ok(value) => return RetryReport { result: Ok(value), attempts: attempt },
            Err(e) if attempt < max_attempts => {
                leptos::logging::warn!("attempt {attempt}/{max_attempts} failed: {e}");
                sleeper.sleep(policy.delay_after(attempt)).await;
                attempt += 1;
            }
            Err(e) => return RetryReport { result: Err(e), attempts: attempt },
        }
    }
}
