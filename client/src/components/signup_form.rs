//! Waitlist signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering and transient UI (loading, messages, celebration) live here;
//! validation, dedupe, retry, and local persistence live in
//! [`SignupService`]. A successful signup is published on the event bus by
//! the service itself.

use std::sync::Arc;

use leptos::prelude::*;

use crate::config::{LEGACY_WAITLIST_STORAGE_KEY, LandingConfig, WAITLIST_STORAGE_KEY};
use crate::events::EventBus;
use crate::net::sheets::{SheetsTransport, user_agent};
use crate::state::signup::SignupState;
use crate::util::clock::now_ms;
use crate::util::email::validate_email;
use crate::util::retry::TimerSleeper;
use crate::util::signup::{MessageKind, SignupService};
use crate::util::storage::BrowserStorage;
use crate::util::timer::defer;
use crate::util::waitlist::WaitlistStore;

type PageSignupService = SignupService<BrowserStorage, SheetsTransport, TimerSleeper>;

const MESSAGE_FADE_MS: u32 = 300;
const CELEBRATION_MS: u32 = 200;

#[component]
pub fn SignupForm() -> impl IntoView {
    let bus = expect_context::<EventBus>();
    let config = LandingConfig::get();
    let state = RwSignal::new(SignupState::default());
    let email_ref = NodeRef::<leptos::html::Input>::new();

    let service: PageSignupService = SignupService::from_config(
        config,
        WaitlistStore::new(BrowserStorage, WAITLIST_STORAGE_KEY),
        SheetsTransport::new(config.sheets_url.clone()),
        TimerSleeper,
        bus,
    )
    .with_user_agent(user_agent());
    let service = StoredValue::new(Arc::new(service));

    Effect::new(move || {
        service.with_value(|s| {
            let waitlist = s.waitlist();
            match waitlist.migrate_legacy(LEGACY_WAITLIST_STORAGE_KEY) {
                Ok(0) => {}
                Ok(moved) => leptos::logging::log!("waitlist: migrated {moved} legacy entries"),
                Err(e) => leptos::logging::warn!("waitlist: legacy migration failed: {e}"),
            }
            leptos::logging::log!("waitlist: {} signups stored locally", waitlist.count());
        });
    });

    let message_timeout_ms = u32::try_from(config.message_timeout.as_millis()).unwrap_or(u32::MAX);

    let show_message = move |text: String, kind: MessageKind| {
        let Some(seq) = state.try_update(|s| s.show(text, kind)) else {
            return;
        };
        defer(message_timeout_ms, move || {
            if state.try_update(|s| s.begin_hide(seq)).unwrap_or(false) {
                defer(MESSAGE_FADE_MS, move || state.update(|s| s.clear(seq)));
            }
        });
    };

    let celebrate = move || {
        state.update(|s| s.celebrating = true);
        defer(CELEBRATION_MS, move || state.update(|s| s.celebrating = false));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.with_untracked(|s| s.busy) {
            return;
        }
        let raw = state.with_untracked(|s| s.email.clone());
        state.update(|s| s.busy = true);
        let service = service.get_value();

        leptos::task::spawn_local(async move {
            let outcome = service.submit(&raw, now_ms()).await;
            state.update(|s| {
                s.busy = false;
                if outcome.clears_input() {
                    s.email.clear();
                }
            });
            if outcome.clears_input() {
                celebrate();
            }
            if outcome.refocuses_input() {
                // Wait for the input to be re-enabled.
                defer(0, move || {
                    if let Some(input) = email_ref.get_untracked() {
                        let _ = input.focus();
                    }
                });
            }
            let (text, kind) = outcome.message();
            show_message(text, kind);
        });
    };

    let on_blur = move |_| {
        let raw = state.with_untracked(|s| s.email.clone());
        if raw.trim().is_empty() {
            return;
        }
        if let Err(e) = validate_email(&raw) {
            show_message(e.to_string(), MessageKind::Error);
        }
    };

    let on_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        state.update(|s| {
            s.email = value;
            s.clear_error();
        });
    };

    let busy = move || state.with(|s| s.busy);

    view! {
        <form id="signupForm" class="signup-form" novalidate=true on:submit=on_submit>
            <label for="emailInput" class="sr-only">"Email address"</label>
            <input
                id="emailInput"
                node_ref=email_ref
                class="email-input"
                type="email"
                name="email"
                placeholder="Enter your email"
                autocomplete="email"
                required=true
                prop:value=move || state.with(|s| s.email.clone())
                prop:disabled=busy
                on:input=on_input
                on:blur=on_blur
            />
            <button
                id="signupBtn"
                class="signup-btn"
                class:loading=busy
                type="submit"
                prop:disabled=busy
                aria-label=move || state.with(|s| s.submit_label())
                style:transform=move || if state.with(|s| s.celebrating) { "scale(1.1)" } else { "" }
            >
                <span class="btn-text">"Join Waitlist"</span>
                <span class="btn-spinner" aria-hidden="true"></span>
            </button>
        </form>
        <div
            id="formMessage"
            class=move || state.with(|s| s.message_class())
            role="status"
            aria-live="polite"
            style:opacity=move || if state.with(|s| s.message.as_ref().is_some_and(|m| m.fading)) { "0" } else { "" }
        >
            {move || state.with(|s| s.message.as_ref().map(|m| m.text.clone()).unwrap_or_default())}
        </div>
    }
}
