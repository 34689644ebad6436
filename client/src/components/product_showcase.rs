//! Floating product showcase with hover spotlight.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::animation::{float_animation, spotlight};
use crate::util::timer::defer;

/// Delay between all images settling and the idle float starting.
const FLOAT_START_MS: u32 = 500;

/// A product image in the hero showcase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub name: &'static str,
    pub image: &'static str,
}

pub const PRODUCTS: [Product; 3] = [
    Product {
        name: "Solus Sunrise Granola",
        image: "/images/product-granola.webp",
    },
    Product {
        name: "Solus Green Bowl",
        image: "/images/product-bowl.webp",
    },
    Product {
        name: "Solus Citrus Press",
        image: "/images/product-juice.webp",
    },
];

#[component]
pub fn ProductShowcase() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let hovered = RwSignal::new(None::<usize>);
    let floating = RwSignal::new(false);

    Effect::new(move || {
        if ui.with(|u| u.images_loaded) && !floating.get_untracked() {
            defer(FLOAT_START_MS, move || floating.set(true));
        }
    });

    let item_style = move |index: usize| {
        let mut css = spotlight(PRODUCTS.len(), hovered.get())
            .get(index)
            .map(|s| s.to_css())
            .unwrap_or_default();
        if floating.get() {
            let (animation, delay) = float_animation(index);
            css.push_str(&format!("; animation: {animation}; animation-delay: {delay}"));
        }
        css
    };

    view! {
        <div class="product-showcase" aria-label="Featured products">
            {PRODUCTS
                .iter()
                .enumerate()
                .map(|(index, product)| {
                    view! {
                        <div
                            class=format!("product-float product-{}", index + 1)
                            style=move || item_style(index)
                            on:mouseenter=move |_| hovered.set(Some(index))
                            on:mouseleave=move |_| hovered.set(None)
                        >
                            <img class="product-item" src=product.image alt=product.name loading="lazy"/>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
