//! Client utility modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `board_actions` runs the async fetch/submit/lookup workflows, `share`
//! builds and copies share links, `browser` wraps the `web-sys` calls, and
//! `text` holds the user-facing strings.

pub mod board_actions;
pub mod browser;
pub mod share;
pub mod text;
