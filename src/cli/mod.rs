//! CLI operation mode handlers.
//!
//! Marquee has a single mode, the interactive movie browser in
//! [`movie_tui`].

pub mod movie_tui;
