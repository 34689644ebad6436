use std::cell::{Cell, RefCell};

use futures::executor::block_on;

use super::*;

#[derive(Default)]
struct RecordingSleeper {
    delays: RefCell<Vec<Duration>>,
}

impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}

fn policy() -> RetryPolicy {
    RetryPolicy::new(3, Duration::from_millis(1000))
}

#[test]
fn first_success_needs_no_sleep() {
    let sleeper = RecordingSleeper::default();
    let report = block_on(retry(policy(), &sleeper, |_| async { Ok::<_, String>(7) }));
    assert_eq!(report, RetryReport { result: Ok(7), attempts: 1 });
    assert!(sleeper.delays.borrow().is_empty());
}

#[test]
fn succeeds_on_later_attempt_with_linear_backoff() {
    let sleeper = RecordingSleeper::default();
    let report = block_on(retry(policy(), &sleeper, |attempt| async move {
        if attempt < 3 { Err(format!("boom {attempt}")) } else { Ok(attempt) }
    }));
    assert_eq!(report, RetryReport { result: Ok(3), attempts: 3 });
    assert_eq!(
        *sleeper.delays.borrow(),
        vec![Duration::from_millis(1000), Duration::from_millis(2000)]
    );
}

#[test]
fn gives_up_after_max_attempts() {
    let sleeper = RecordingSleeper::default();
    let calls = Cell::new(0);
    let report = block_on(retry(policy(), &sleeper, |_| {
        calls.set(calls.get() + 1);
        async { Err::<(), _>("offline") }
    }));
    assert_eq!(report, RetryReport { result: Err("offline"), attempts: 3 });
    assert_eq!(calls.get(), 3);
    assert_eq!(sleeper.delays.borrow().len(), 2);
}

#[test]
fn zero_attempt_policy_still_tries_once() {
    let sleeper = RecordingSleeper::default();
    let report = block_on(retry(RetryPolicy::new(0, Duration::ZERO), &sleeper, |_| async {
        Err::<(), _>("nope")
    }));
    assert_eq!(report.attempts, 1);
}

#[test]
fn delay_grows_with_attempt_number() {
    let policy = policy();
    assert_eq!(policy.delay_after(1), Duration::from_millis(1000));
    assert_eq!(policy.delay_after(3), Duration::from_millis(3000));
}
