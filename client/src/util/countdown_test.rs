use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;

const DAY: i64 = 86_400_000;

#[test]
fn splits_remaining_time_into_units() {
    let remaining = 2 * DAY + 3 * 3_600_000 + 4 * 60_000 + 5_000 + 999;
    assert_eq!(
        TimeUnits::from_remaining_ms(remaining),
        TimeUnits { days: 2, hours: 3, minutes: 4, seconds: 5 }
    );
}

#[test]
fn negative_remaining_clamps_to_zero() {
    assert_eq!(TimeUnits::from_remaining_ms(-5_000), TimeUnits::ZERO);
}

#[test]
fn digits_are_zero_padded() {
    let units = TimeUnits { days: 123, hours: 4, minutes: 0, seconds: 59 };
    assert_eq!(units.digits(), ["123", "04", "00", "59"].map(str::to_owned));
    assert_eq!(TimeUnits::ZERO.display(), "00:00:00:00");
}

#[test]
fn running_countdown_reports_units() {
    let mut countdown = Countdown::new(10_000);
    let tick = countdown.tick(1_000);
    assert_eq!(tick, CountdownTick::Running(TimeUnits { days: 0, hours: 0, minutes: 0, seconds: 9 }));
    assert!(!countdown.is_complete());
}

#[test]
fn past_target_completes_exactly_once() {
    let bus = EventBus::new();
    let completions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&completions);
    bus.subscribe(move |event| {
        if matches!(event, LandingEvent::CountdownComplete { .. }) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });

    let mut controller = CountdownController::new(0, bus);
    let first = controller.tick(1_700_000_000_000);
    assert_eq!(first, CountdownTick::Completed);
    assert_eq!(first.units().display(), "00:00:00:00");

    for offset in 1..5 {
        let tick = controller.tick(1_700_000_000_000 + offset * 1_000);
        assert_eq!(tick, CountdownTick::Finished);
        assert_eq!(tick.units(), TimeUnits::ZERO);
    }

    assert_eq!(completions.load(Ordering::SeqCst), 1);
    assert!(controller.countdown().is_complete());
}

#[test]
fn exact_target_instant_counts_as_complete() {
    let mut countdown = Countdown::new(5_000);
    assert_eq!(countdown.tick(5_000), CountdownTick::Completed);
}

#[test]
fn retarget_rearms_completion() {
    let mut countdown = Countdown::new(0);
    assert_eq!(countdown.tick(10), CountdownTick::Completed);
    countdown.retarget(60_000);
    assert!(!countdown.is_complete());
    assert!(countdown.tick(10).is_running());
    assert_eq!(countdown.tick(60_000), CountdownTick::Completed);
}

fn counting_bus() -> (EventBus, Arc<AtomicUsize>) {
    let bus = EventBus::new();
    let completions = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&completions);
    bus.subscribe(move |event| {
        if matches!(event, LandingEvent::CountdownComplete { .. }) {
            counter.fetch_add(1, Ordering::SeqCst);
        }
    });
    (bus, completions)
}

#[test]
fn hidden_page_pauses_without_ticking() {
    let (bus, completions) = counting_bus();
    let mut controller = CountdownController::new(DAY, bus);
    assert_eq!(controller.on_visibility(true, DAY + 1), VisibilityAction::Pause);
    assert!(!controller.countdown().is_complete());
    assert_eq!(completions.load(Ordering::SeqCst), 0);
}

#[test]
fn visible_page_resumes_with_a_fresh_tick() {
    let (bus, _) = counting_bus();
    let mut controller = CountdownController::new(DAY, bus);
    let action = controller.on_visibility(false, 0);
    let VisibilityAction::Resume(tick) = action else {
        panic!("expected resume, got {action:?}");
    };
    assert!(tick.is_running());
    assert_eq!(tick.units().days, 1);
}

#[test]
fn visible_after_completion_stays_stopped() {
    let (bus, completions) = counting_bus();
    let mut controller = CountdownController::new(1_000, bus);
    assert_eq!(
        controller.on_visibility(false, 2_000),
        VisibilityAction::Resume(CountdownTick::Completed)
    );
    assert_eq!(controller.on_visibility(true, 3_000), VisibilityAction::Pause);
    assert_eq!(controller.on_visibility(false, 4_000), VisibilityAction::Stay);
    assert_eq!(completions.load(Ordering::SeqCst), 1);
}
