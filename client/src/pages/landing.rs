//! The coming-soon landing page.

use leptos::prelude::*;

use crate::components::countdown::CountdownPanel;
use crate::components::product_showcase::ProductShowcase;
use crate::components::scroll_reveal::ScrollEffects;
use crate::components::signup_form::SignupForm;
use crate::components::social_card::SocialCard;
use crate::components::theme_toggle::ThemeToggle;

struct Social {
    name: &'static str,
    handle: &'static str,
    href: &'static str,
}

const SOCIALS: [Social; 3] = [
    Social {
        name: "Instagram",
        handle: "@solusfoods",
        href: "https://instagram.com/solusfoods",
    },
    Social {
        name: "TikTok",
        handle: "@solusfoods",
        href: "https://tiktok.com/@solusfoods",
    },
    Social {
        name: "X",
        handle: "@solusfoods",
        href: "https://x.com/solusfoods",
    },
];

const STORES: [(&str, &str); 2] = [("App Store", "Download on the"), ("Google Play", "Get it on")];

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="logo" href="/" aria-label="Solus Foods home">"Solus Foods"</a>
            <ThemeToggle/>
        </header>

        <main id="main-content" tabindex="-1">
            <section class="hero-section">
                <div class="decoration-circle circle-1" aria-hidden="true"></div>
                <div class="decoration-circle circle-2" aria-hidden="true"></div>
                <div class="decoration-circle circle-3" aria-hidden="true"></div>

                <div class="hero-content">
                    <span class="hero-badge" data-animate="fade-up">"Coming Soon"</span>
                    <h1 class="hero-title" data-animate="fade-up" data-delay="100">
                        "Real food, "
                        <span class="highlight">"made simple."</span>
                    </h1>
                    <p class="hero-subtitle" data-animate="fade-up" data-delay="200">
                        "Fresh, wholesome meals delivered from our kitchen to your table. "
                        "Join the waitlist to be first in line when we launch."
                    </p>
                    <div class="signup-container" data-animate="fade-up" data-delay="300">
                        <SignupForm/>
                    </div>
                </div>

                <ProductShowcase/>
            </section>

            <CountdownPanel/>

            <section class="social-section" aria-labelledby="social-heading">
                <h2 id="social-heading" data-animate="fade-left">"Follow Our Journey"</h2>
                <div class="social-grid">
                    {SOCIALS
                        .iter()
                        .map(|s| view! { <SocialCard name=s.name handle=s.handle href=s.href/> })
                        .collect_view()}
                </div>
            </section>

            <section class="store-section" aria-labelledby="store-heading">
                <h2 id="store-heading" data-animate="fade-right">"Get the App"</h2>
                <div class="store-grid">
                    {STORES
                        .iter()
                        .map(|(store, prefix)| {
                            view! {
                                <div class="store-card" aria-disabled="true">
                                    <span class="store-prefix">{*prefix}</span>
                                    <span class="store-name">{*store}</span>
                                    <span class="store-status">"Coming soon"</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </section>
        </main>

        <footer class="site-footer">
            <p>"© 2025 Solus Foods. All rights reserved."</p>
        </footer>

        <ScrollEffects/>
    }
}
