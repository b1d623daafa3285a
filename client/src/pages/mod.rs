//! Top-level route pages.
//!
//! ROUTES
//! ======
//! - `/`: `greeting_board` (home and greetings tabs)
//! - `/video/{id}`: `video` (single greeting behind a share link)

pub mod greeting_board;
pub mod video;
