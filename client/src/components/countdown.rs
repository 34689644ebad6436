//! Launch countdown panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! Ticks once per second through a [`RepeatingTimer`] owned by the component.
//! The timer stops on completion and pauses while the tab is hidden; it is
//! cancelled on cleanup. [`CountdownController::on_visibility`] decides
//! what happens on each visibility change. Completion is published once by
//! [`CountdownController`].

use leptos::prelude::*;

use crate::config::LandingConfig;
use crate::events::EventBus;
use crate::state::countdown::CountdownState;
use crate::state::ui::UiState;
use crate::util::clock::now_ms;
use crate::util::countdown::{CountdownController, CountdownTick, TimeUnits, VisibilityAction};
use crate::util::timer::{RepeatingTimer, defer};

const TICK_MS: u32 = 1000;
const FLASH_MS: u32 = 200;
const SLOTS: [(&str, &str); 4] = [("days", "Days"), ("hours", "Hours"), ("minutes", "Minutes"), ("seconds", "Seconds")];

#[component]
pub fn CountdownPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let bus = expect_context::<EventBus>();
    let state = RwSignal::new(CountdownState::default());
    let flashing = RwSignal::new([false; 4]);
    let controller = StoredValue::new(CountdownController::new(LandingConfig::get().launch_at_ms, bus));
    let timer = StoredValue::new_local(RepeatingTimer::new());

    let show = move |units: TimeUnits| {
        let previous = state.with_untracked(|s| s.units.digits());
        let next = units.digits();
        for (slot, (old, new)) in previous.iter().zip(next.iter()).enumerate() {
            if old != new {
                flashing.update(|f| f[slot] = true);
                defer(FLASH_MS, move || flashing.update(|f| f[slot] = false));
            }
        }
        state.update(|s| s.units = units);
    };

    let stop = move || {
        // The interval may be mid-callback; cancel on the next turn.
        defer(0, move || {
            timer.update_value(|t| {
                let _ = t.cancel();
            });
        });
        state.update(|s| s.ticking = false);
    };

    let render = move |tick: CountdownTick| match tick {
        CountdownTick::Running(units) => show(units),
        CountdownTick::Completed => {
            show(TimeUnits::ZERO);
            state.update(|s| s.complete = true);
            stop();
        }
        CountdownTick::Finished => stop(),
    };

    let tick = move || match controller.try_update_value(|c| c.tick(now_ms())) {
        Some(tick) => render(tick),
        None => stop(),
    };

    let hidden = Memo::new(move |_| ui.with(|u| u.page_hidden));
    Effect::new(move || {
        let hidden = hidden.get();
        match controller.try_update_value(|c| c.on_visibility(hidden, now_ms())) {
            Some(VisibilityAction::Pause) => {
                let was_active = timer.try_update_value(RepeatingTimer::cancel).unwrap_or(false);
                if was_active {
                    state.update(|s| s.ticking = false);
                }
            }
            Some(VisibilityAction::Resume(first)) => {
                render(first);
                if first.is_running() {
                    timer.update_value(|t| t.start(TICK_MS, tick));
                    state.update(|s| s.ticking = true);
                }
            }
            Some(VisibilityAction::Stay) | None => {}
        }
    });

    on_cleanup(move || {
        timer.update_value(|t| {
            let _ = t.cancel();
        });
    });

    let section_class = move || {
        if ui.with(|u| u.countdown_complete) {
            "countdown-section countdown-complete"
        } else {
            "countdown-section"
        }
    };

    view! {
        <section class=section_class aria-labelledby="countdown-heading">
            <h2 id="countdown-heading" data-animate="fade-up">"Launching In"</h2>
            <div class="countdown" role="timer" aria-live="off">
                {SLOTS
                    .into_iter()
                    .enumerate()
                    .map(|(slot, (id, label))| {
                        view! {
                            <div class="time-box">
                                <span
                                    id=id
                                    class="time-value"
                                    class:tick=move || flashing.with(|f| f[slot])
                                >
                                    {move || state.with(|s| s.units.digits()[slot].clone())}
                                </span>
                                <span class="time-label">{label}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
