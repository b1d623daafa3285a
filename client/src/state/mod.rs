//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`board`, `toast`, `video`) so components depend
//! on small focused models. Every model is a plain struct with pure
//! transitions; the pages hold them in `RwSignal`s.

pub mod board;
pub mod toast;
pub mod video;
