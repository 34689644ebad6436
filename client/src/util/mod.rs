//! Utility helpers shared across landing page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from component
//! logic. Everything except `dom` builds without the `hydrate` feature so
//! the rules can be unit tested natively.

pub mod a11y;
pub mod animation;
pub mod clock;
pub mod countdown;
#[cfg(feature = "hydrate")]
pub mod dom;
pub mod email;
pub mod global;
pub mod retry;
pub mod signup;
pub mod storage;
pub mod theme;
pub mod timer;
pub mod waitlist;
