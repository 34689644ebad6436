//! Outbound network calls.
//!
//! The page talks to exactly one remote: the spreadsheet web app that
//! collects waitlist signups.

pub mod sheets;
