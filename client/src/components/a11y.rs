//! Skip link and screen reader live region.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::a11y::{SKIP_LINK_TARGET, SKIP_LINK_TEXT};

/// Jump link that is visually hidden until focused.
#[component]
pub fn SkipLink() -> impl IntoView {
    let focused = RwSignal::new(false);
    view! {
        <a
            href=SKIP_LINK_TARGET
            class="skip-link"
            class=("sr-only", move || !focused.get())
            on:focus=move |_| focused.set(true)
            on:blur=move |_| focused.set(false)
        >
            {SKIP_LINK_TEXT}
        </a>
    }
}

/// Polite live region mirroring `UiState::announcement`.
#[component]
pub fn LiveRegion() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    view! {
        <div id="live-region" class="sr-only" aria-live="polite" aria-atomic="true">
            {move || ui.with(|u| u.announcement.clone())}
        </div>
    }
}
