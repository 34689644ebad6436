//! Entrance animation, hover spotlight, and parallax math.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::scroll_effects` and `components::product_showcase` wire these
//! rules to `IntersectionObserver`, hover, and scroll events. Keeping the
//! numbers here lets the page behavior be checked without a DOM.

#[cfg(test)]
#[path = "animation_test.rs"]
mod animation_test;

/// Observer settings for `[data-animate]` entrance reveals.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "50px 0px -50px 0px";

/// Observer settings for section-level `in-view` tracking.
pub const SECTION_THRESHOLD: f64 = 0.2;
pub const SECTION_ROOT_MARGIN: &str = "100px 0px";

pub const RESIZE_DEBOUNCE_MS: u32 = 250;
pub const SHOWCASE_MIN_HEIGHT_PX: f64 = 350.0;
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Delay after hydration before the body gets `loaded`.
pub const PAGE_LOADED_DELAY_MS: u32 = 100;
/// Gap between the hero and showcase entrances.
pub const ENTRANCE_STAGGER_MS: u32 = 200;
pub const HERO_ENTRANCE: &str = "fadeInLeft 0.8s ease forwards";
pub const SHOWCASE_ENTRANCE: &str = "fadeInRight 0.8s ease forwards";

/// Entrance animation named by a `data-animate` attribute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EntryAnimation {
    #[default]
    FadeUp,
    FadeLeft,
    FadeRight,
}

impl EntryAnimation {
    /// Unknown or missing values fall back to fade-up.
    #[must_use]
    pub fn from_attr(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("fade-left") => Self::FadeLeft,
            Some("fade-right") => Self::FadeRight,
            _ => Self::FadeUp,
        }
    }

    #[must_use]
    pub fn keyframes(self) -> &'static str {
        match self {
            Self::FadeUp => "fadeInUp",
            Self::FadeLeft => "fadeInLeft",
            Self::FadeRight => "fadeInRight",
        }
    }

    /// Inline `animation` shorthand.
    #[must_use]
    pub fn css(self) -> String {
        format!("{} 0.6s ease forwards", self.keyframes())
    }
}

/// Parse a `data-delay` value in milliseconds. Junk reads as zero.
#[must_use]
pub fn parse_delay_ms(value: Option<&str>) -> u32 {
    value
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|ms| ms.is_finite() && *ms > 0.0)
        .map_or(0, |ms| {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let ms = ms.min(f64::from(u32::MAX)) as u32;
            ms
        })
}

/// Sections whose children animate in sequence when the section enters view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealSection {
    Countdown,
    Social,
    Store,
}

impl RevealSection {
    pub const ALL: [Self; 3] = [Self::Countdown, Self::Social, Self::Store];

    /// Selector matching every tracked section.
    #[must_use]
    pub fn selector() -> String {
        Self::ALL
            .iter()
            .map(|s| format!(".{}", s.class()))
            .collect::<Vec<_>>()
            .join(", ")
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Countdown => "countdown-section",
            Self::Social => "social-section",
            Self::Store => "store-section",
        }
    }

    /// Match a section by its class list.
    pub fn from_classes<'a>(mut classes: impl Iterator<Item = &'a str>) -> Option<Self> {
        classes.find_map(|class| Self::ALL.into_iter().find(|s| s.class() == class))
    }

    #[must_use]
    pub fn child_selector(self) -> &'static str {
        match self {
            Self::Countdown => ".time-box",
            Self::Social => ".social-card",
            Self::Store => ".store-card",
        }
    }

    #[must_use]
    pub fn stagger_ms(self) -> u32 {
        match self {
            Self::Countdown => 100,
            Self::Social => 150,
            Self::Store => 200,
        }
    }

    #[must_use]
    pub fn child_animation(self) -> &'static str {
        match self {
            Self::Social => "fadeInUp 0.6s ease forwards",
            Self::Countdown | Self::Store => "fadeInUp 0.5s ease forwards",
        }
    }

    /// Delay before child `index` starts.
    #[must_use]
    pub fn child_delay_ms(self, index: usize) -> u32 {
        u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(self.stagger_ms())
    }
}

/// Inline style for one showcase item.
#[derive(Clone, Debug, PartialEq)]
pub struct ItemStyle {
    pub opacity: f64,
    pub filter: Option<&'static str>,
    pub z_index: Option<i32>,
}

impl ItemStyle {
    /// CSS declaration list for a `style` attribute.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut css = format!("opacity: {}", self.opacity);
        if let Some(filter) = self.filter {
            css.push_str("; filter: ");
            css.push_str(filter);
        }
        if let Some(z) = self.z_index {
            css.push_str(&format!("; z-index: {z}"));
        }
        css
    }
}

/// Styles for `count` showcase items with `hovered` spotlighted.
///
/// With a hovered item the others dim and blur while it comes forward. With
/// none, items reset to full opacity and stack front-to-back by index.
#[must_use]
pub fn spotlight(count: usize, hovered: Option<usize>) -> Vec<ItemStyle> {
    (0..count)
        .map(|index| match hovered {
            Some(active) if active == index => ItemStyle {
                opacity: 1.0,
                filter: Some("brightness(1.1)"),
                z_index: Some(20),
            },
            Some(_) => ItemStyle {
                opacity: 0.6,
                filter: Some("blur(2px)"),
                z_index: None,
            },
            None => ItemStyle {
                opacity: 1.0,
                filter: None,
                z_index: Some(3 - i32::try_from(index).unwrap_or(i32::MAX - 3)),
            },
        })
        .collect()
}

/// Vertical offset for decoration circle `index` at `scroll_y`.
#[must_use]
pub fn decoration_offset(scroll_y: f64, index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let speed = 0.3 + (index as f64) * 0.1;
    scroll_y * speed
}

/// Vertical offset for the product showcase at `scroll_y` (moves upward).
#[must_use]
pub fn showcase_offset(scroll_y: f64) -> f64 {
    scroll_y * -0.5 * 0.2
}

/// Showcase height after a resize re-measure.
#[must_use]
pub fn showcase_height(measured_px: f64) -> f64 {
    measured_px.max(SHOWCASE_MIN_HEIGHT_PX)
}

/// `(animation, animation-delay)` for the idle float of product `index`.
#[must_use]
pub fn float_animation(index: usize) -> (String, String) {
    #[allow(clippy::cast_precision_loss)]
    let i = index as f64;
    (format!("float {}s ease-in-out infinite", 4.0 + i), format!("{}s", i * 1.5))
}
