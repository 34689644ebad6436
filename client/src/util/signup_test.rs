use std::cell::{Cell, RefCell};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use futures::executor::block_on;

use super::*;
use crate::net::sheets::SubmitError;
use crate::util::storage::MemoryStorage;

const KEY: &str = "solus-waitlist";

/// Fails the first `failures` calls, then succeeds.
#[derive(Default)]
struct FlakyTransport {
    failures: u32,
    calls: Cell<u32>,
    sent: RefCell<Vec<Submission>>,
}

impl FlakyTransport {
    fn failing(failures: u32) -> Self {
        Self { failures, ..Self::default() }
    }
}

impl WaitlistTransport for &FlakyTransport {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmitError> {
        let call = self.calls.get() + 1;
        self.calls.set(call);
        self.sent.borrow_mut().push(submission.clone());
        if call <= self.failures {
            Err(SubmitError::Network("offline".to_owned()))
        } else {
            Ok(())
        }
    }
}

#[derive(Default)]
struct NoSleep {
    slept: RefCell<Vec<Duration>>,
}

impl Sleeper for &NoSleep {
    async fn sleep(&self, duration: Duration) {
        self.slept.borrow_mut().push(duration);
    }
}

fn service<'a>(
    storage: &MemoryStorage,
    transport: &'a FlakyTransport,
    sleeper: &'a NoSleep,
    bus: &EventBus,
) -> SignupService<MemoryStorage, &'a FlakyTransport, &'a NoSleep> {
    let policy = RetryPolicy::new(3, Duration::from_millis(1000));
    SignupService::new(WaitlistStore::new(storage.clone(), KEY), transport, sleeper, policy, bus.clone())
        .with_user_agent("test-agent")
}

fn signup_events(bus: &EventBus) -> Arc<Mutex<Vec<String>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(move |event| {
        if let LandingEvent::SignupSucceeded { email } = event {
            sink.lock().unwrap().push(email.clone());
        }
    });
    seen
}

#[test]
fn invalid_email_makes_no_network_call() {
    let storage = MemoryStorage::new();
    let transport = FlakyTransport::default();
    let sleeper = NoSleep::default();
    let svc = service(&storage, &transport, &sleeper, &EventBus::new());

    assert_eq!(block_on(svc.submit("user@", 0)), SignupOutcome::Invalid(EmailError::Malformed));
    assert_eq!(block_on(svc.submit("   ", 0)), SignupOutcome::Invalid(EmailError::Empty));
    assert_eq!(transport.calls.get(), 0);
    assert!(storage.is_empty());
}

#[test]
fn successful_signup_records_unsynced_entry_and_publishes() {
    let storage = MemoryStorage::new();
    let transport = FlakyTransport::default();
    let sleeper = NoSleep::default();
    let bus = EventBus::new();
    let events = signup_events(&bus);
    let svc = service(&storage, &transport, &sleeper, &bus);

    let outcome = block_on(svc.submit(" user@example.com ", 1_735_787_045_678));

    assert_eq!(outcome, SignupOutcome::Joined { attempts: 1 });
    assert!(outcome.clears_input());
    let entries = svc.waitlist().load();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].email, "user@example.com");
    assert_eq!(entries[0].timestamp, "2025-01-02T03:04:05.678Z");
    assert_eq!(entries[0].source, "solus-foods-landing");
    assert!(!entries[0].synced);
    assert_eq!(*events.lock().unwrap(), vec!["user@example.com".to_owned()]);

    let sent = transport.sent.borrow();
    assert_eq!(sent[0].user_agent, "test-agent");
}

#[test]
fn same_email_twice_persists_one_entry() {
    let storage = MemoryStorage::new();
    let transport = FlakyTransport::default();
    let sleeper = NoSleep::default();
    let svc = service(&storage, &transport, &sleeper, &EventBus::new());

    assert_eq!(block_on(svc.submit("user@example.com", 0)), SignupOutcome::Joined { attempts: 1 });
    assert_eq!(block_on(svc.submit("user@example.com", 1)), SignupOutcome::AlreadyJoined);

    assert_eq!(svc.waitlist().count(), 1);
    assert_eq!(transport.calls.get(), 1);
}

#[test]
fn every_attempt_failing_retries_max_times_and_saves_locally() {
    let storage = MemoryStorage::new();
    let transport = FlakyTransport::failing(u32::MAX);
    let sleeper = NoSleep::default();
    let bus = EventBus::new();
    let events = signup_events(&bus);
    let svc = service(&storage, &transport, &sleeper, &bus);

    let outcome = block_on(svc.submit("user@example.com", 0));

    assert_eq!(outcome, SignupOutcome::SavedLocally { attempts: 3 });
    assert_eq!(transport.calls.get(), 3);
    assert_eq!(
        *sleeper.slept.borrow(),
        vec![Duration::from_millis(1000), Duration::from_millis(2000)]
    );
    let unsynced = svc.waitlist().unsynced();
    assert_eq!(unsynced.len(), 1);
    assert_eq!(unsynced[0].email, "user@example.com");
    assert!(events.lock().unwrap().is_empty());
    assert_eq!(outcome.message().1, MessageKind::Error);
}

#[test]
fn transient_failure_recovers_within_budget() {
    let storage = MemoryStorage::new();
    let transport = FlakyTransport::failing(2);
    let sleeper = NoSleep::default();
    let svc = service(&storage, &transport, &sleeper, &EventBus::new());

    assert_eq!(block_on(svc.submit("user@example.com", 0)), SignupOutcome::Joined { attempts: 3 });
    assert_eq!(svc.waitlist().count(), 1);
}

#[test]
fn storage_failure_does_not_block_signup() {
    let storage = MemoryStorage::read_only();
    let transport = FlakyTransport::default();
    let sleeper = NoSleep::default();
    let svc = service(&storage, &transport, &sleeper, &EventBus::new());

    assert_eq!(block_on(svc.submit("user@example.com", 0)), SignupOutcome::Joined { attempts: 1 });
    assert_eq!(svc.waitlist().count(), 0);
}

#[test]
fn outcome_messages_use_form_copy() {
    assert_eq!(SignupOutcome::AlreadyJoined.message(), (MSG_ALREADY_JOINED.to_owned(), MessageKind::Success));
    assert_eq!(
        SignupOutcome::Invalid(EmailError::Empty).message().0,
        "Please enter your email address"
    );
    assert_eq!(MessageKind::Error.class(), "error");
}

#[test]
fn only_validation_errors_return_focus_to_the_input() {
    assert!(SignupOutcome::Invalid(EmailError::Malformed).refocuses_input());
    assert!(SignupOutcome::Invalid(EmailError::Empty).refocuses_input());
    assert!(!SignupOutcome::AlreadyJoined.refocuses_input());
    assert!(!SignupOutcome::Joined { attempts: 1 }.refocuses_input());
    assert!(!SignupOutcome::SavedLocally { attempts: 3 }.refocuses_input());
}
