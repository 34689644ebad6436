use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

fn recorder(bus: &EventBus) -> Arc<Mutex<Vec<LandingEvent>>> {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    bus.subscribe(move |event| sink.lock().unwrap().push(event.clone()));
    seen
}

#[test]
fn publish_reaches_every_subscriber_in_order() {
    let bus = EventBus::new();
    let order = Arc::new(Mutex::new(Vec::new()));
    for tag in ["first", "second"] {
        let order = Arc::clone(&order);
        bus.subscribe(move |_| order.lock().unwrap().push(tag));
    }

    bus.publish(&LandingEvent::ThemeChanged { theme: Theme::Dark });

    assert_eq!(*order.lock().unwrap(), vec!["first", "second"]);
}

#[test]
fn clones_share_subscribers() {
    let bus = EventBus::new();
    let seen = recorder(&bus);
    let clone = bus.clone();

    clone.publish(&LandingEvent::SignupSucceeded { email: "a@b.co".to_owned() });

    assert_eq!(seen.lock().unwrap().len(), 1);
    assert_eq!(clone.subscriber_count(), 1);
}

#[test]
fn unsubscribe_stops_delivery() {
    let bus = EventBus::new();
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&hits);
    let id = bus.subscribe(move |_| {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    bus.publish(&LandingEvent::CountdownComplete { at_ms: 1 });
    assert!(bus.unsubscribe(id));
    assert!(!bus.unsubscribe(id));
    bus.publish(&LandingEvent::CountdownComplete { at_ms: 2 });

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn handler_may_publish_reentrantly() {
    let bus = EventBus::new();
    let seen = recorder(&bus);
    let inner_bus = bus.clone();
    bus.subscribe(move |event| {
        if matches!(event, LandingEvent::CountdownComplete { .. }) {
            inner_bus.publish(&LandingEvent::ThemeChanged { theme: Theme::Light });
        }
    });

    bus.publish(&LandingEvent::CountdownComplete { at_ms: 0 });

    let seen = seen.lock().unwrap();
    assert_eq!(
        *seen,
        vec![
            LandingEvent::CountdownComplete { at_ms: 0 },
            LandingEvent::ThemeChanged { theme: Theme::Light },
        ]
    );
}
