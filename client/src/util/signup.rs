//! Waitlist signup flow: validate, de-duplicate, submit with retry, record.
//!
//! DESIGN
//! ======
//! The remote sheet cannot confirm anything, so the local ledger is written
//! after every attempt, successful or not, tagged unsynced. That way no
//! submission is lost from the visitor's point of view and a repeat visit
//! short-circuits on the local copy.
//!
//! ERROR HANDLING
//! ==============
//! Validation errors return before any network call. Transport errors are
//! retried up to the policy ceiling and then degrade to
//! [`SignupOutcome::SavedLocally`]. Storage failures are logged only.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::config::{LandingConfig, SIGNUP_SOURCE};
use crate::events::{EventBus, LandingEvent};
use crate::net::sheets::{Submission, WaitlistTransport};

use super::clock::iso_timestamp;
use super::email::{EmailError, validate_email};
use super::retry::{RetryPolicy, Sleeper, retry};
use super::storage::KeyValueStore;
use super::waitlist::{WaitlistEntry, WaitlistStore};

pub const MSG_JOINED: &str = "\u{1f389} You're on the waitlist! We'll notify you when we launch.";
pub const MSG_ALREADY_JOINED: &str = "This email is already on our waitlist!";
pub const MSG_SAVED_LOCALLY: &str = "Oops! Something went wrong. Your email has been saved locally.";

/// Result of one signup submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignupOutcome {
    Invalid(EmailError),
    AlreadyJoined,
    Joined { attempts: u32 },
    /// Every attempt failed; the entry only lives in local storage.
    SavedLocally { attempts: u32 },
}

/// Severity used to style the form message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl SignupOutcome {
    /// Copy and styling for the message under the form.
    #[must_use]
    pub fn message(&self) -> (String, MessageKind) {
        match self {
            Self::Invalid(e) => (e.to_string(), MessageKind::Error),
            Self::AlreadyJoined => (MSG_ALREADY_JOINED.to_owned(), MessageKind::Success),
            Self::Joined { .. } => (MSG_JOINED.to_owned(), MessageKind::Success),
            Self::SavedLocally { .. } => (MSG_SAVED_LOCALLY.to_owned(), MessageKind::Error),
        }
    }

    /// `true` when the input should be cleared.
    #[must_use]
    pub fn clears_input(&self) -> bool {
        matches!(self, Self::Joined { .. })
    }

    /// `true` when focus should return to the input for a correction.
    #[must_use]
    pub fn refocuses_input(&self) -> bool {
        matches!(self, Self::Invalid(_))
    }
}

/// Signup collaborators bundled once per page.
pub struct SignupService<S, T, Z> {
    waitlist: WaitlistStore<S>,
    transport: T,
    sleeper: Z,
    policy: RetryPolicy,
    bus: EventBus,
    source: String,
    user_agent: String,
}

impl<S, T, Z> SignupService<S, T, Z>
where
    S: KeyValueStore,
    T: WaitlistTransport,
    Z: Sleeper,
{
    pub fn new(waitlist: WaitlistStore<S>, transport: T, sleeper: Z, policy: RetryPolicy, bus: EventBus) -> Self {
        Self {
            waitlist,
            transport,
            sleeper,
            policy,
            bus,
            source: SIGNUP_SOURCE.to_owned(),
            user_agent: String::new(),
        }
    }

    /// Build with the retry settings from `config`.
    pub fn from_config(config: &LandingConfig, waitlist: WaitlistStore<S>, transport: T, sleeper: Z, bus: EventBus) -> Self {
        let policy = RetryPolicy::new(config.max_retries, config.retry_delay);
        Self::new(waitlist, transport, sleeper, policy, bus)
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    #[must_use]
    pub fn waitlist(&self) -> &WaitlistStore<S> {
        &self.waitlist
    }

    /// Run the full signup flow for `raw` at `now_ms`.
    pub async fn submit(&self, raw: &str, now_ms: i64) -> SignupOutcome {
        let email = match validate_email(raw) {
            Ok(email) => email,
            Err(e) => return SignupOutcome::Invalid(e),
        };
        if self.waitlist.contains(&email) {
            return SignupOutcome::AlreadyJoined;
        }

        let timestamp = iso_timestamp(now_ms);
        let submission = Submission {
            email: email.clone(),
            timestamp: timestamp.clone(),
            source: self.source.clone(),
            user_agent: self.user_agent.clone(),
        };
        let report = retry(self.policy, &self.sleeper, |_| self.transport.submit(&submission)).await;

        let entry = WaitlistEntry::unsynced(&email, timestamp, &self.source);
        if let Err(e) = self.waitlist.record(entry) {
            leptos::logging::warn!("waitlist: could not store {email} locally: {e}");
        }

        match report.result {
            Ok(()) => {
                self.bus.publish(&LandingEvent::SignupSucceeded { email });
                SignupOutcome::Joined { attempts: report.attempts }
            }
            Err(e) => {
                leptos::logging::error!("waitlist: submission failed after {} attempts: {e}", report.attempts);
                SignupOutcome::SavedLocally { attempts: report.attempts }
            }
        }
    }
}
