//! Social link cards with a hover ripple.

use leptos::prelude::*;

use crate::util::animation::RIPPLE_LIFETIME_MS;
use crate::util::timer::defer;

#[component]
pub fn SocialCard(name: &'static str, handle: &'static str, href: &'static str) -> impl IntoView {
    let ripples = RwSignal::new(Vec::<u64>::new());
    let next_id = StoredValue::new(0_u64);

    let on_enter = move |_| {
        let id = next_id.try_update_value(|n| {
            *n += 1;
            *n
        });
        let Some(id) = id else {
            return;
        };
        ripples.update(|r| r.push(id));
        defer(RIPPLE_LIFETIME_MS, move || ripples.update(|r| r.retain(|existing| *existing != id)));
    };

    view! {
        <a class="social-card" href=href target="_blank" rel="noopener noreferrer" on:mouseenter=on_enter>
            <span class="social-name">{name}</span>
            <span class="social-handle">{handle}</span>
            <For
                each=move || ripples.get()
                key=|id| *id
                children=move |_| view! { <div class="ripple-effect" aria-hidden="true"></div> }
            />
        </a>
    }
}
