//! Reusable UI components for the greeting board.
//!
//! ARCHITECTURE
//! ============
//! Components render from `BoardState`/`ToastState` signals and report user
//! intent through callbacks; the pages own the async workflows.

pub mod greeting_card;
pub mod greeting_form;
pub mod greeting_list;
pub mod nav_bar;
pub mod site_footer;
pub mod toast_stack;
