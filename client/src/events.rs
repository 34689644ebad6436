//! Typed in-page event bus.
//!
//! DESIGN
//! ======
//! Components announce state changes (theme switched, countdown finished,
//! signup accepted) through [`EventBus::publish`] instead of dispatching DOM
//! custom events. Subscribers are plain closures, so tests can observe the
//! same signals the page reacts to.
//!
//! The bus is `Send + Sync` so it can be provided through Leptos context.
//! Handlers are cloned out of the lock before dispatch, which lets a handler
//! publish or subscribe re-entrantly without deadlocking.

#[cfg(test)]
#[path = "events_test.rs"]
mod events_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::state::theme::Theme;

/// Signals broadcast between landing page components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LandingEvent {
    ThemeChanged { theme: Theme },
    /// Countdown reached its target; `at_ms` is the tick that observed it.
    CountdownComplete { at_ms: i64 },
    SignupSucceeded { email: String },
}

type Handler = Arc<dyn Fn(&LandingEvent) + Send + Sync>;

/// Identifier returned by [`EventBus::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct BusInner {
    next_id: u64,
    handlers: Vec<(SubscriptionId, Handler)>,
}

/// Cloneable handle to a shared subscriber list.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Arc<Mutex<BusInner>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `handler` for every subsequent event.
    pub fn subscribe<F>(&self, handler: F) -> SubscriptionId
    where
        F: Fn(&LandingEvent) + Send + Sync + 'static,
    {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let id = SubscriptionId(inner.next_id);
        inner.next_id += 1;
        inner.handlers.push((id, Arc::new(handler)));
        id
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let before = inner.handlers.len();
        inner.handlers.retain(|(existing, _)| *existing != id);
        inner.handlers.len() != before
    }

    /// Deliver `event` to every current subscriber in registration order.
    pub fn publish(&self, event: &LandingEvent) {
        let handlers: Vec<Handler> = {
            let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.handlers.iter().map(|(_, h)| Arc::clone(h)).collect()
        };
        for handler in handlers {
            handler(event);
        }
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .handlers
            .len()
    }
}
