//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`theme`, `countdown`, `signup`, `ui`) so each
//! landing page component depends on a small focused model provided through
//! Leptos context.

pub mod countdown;
pub mod signup;
pub mod theme;
pub mod ui;
