//! Keyboard input, mapped to engine commands.
//!
//! Intentionally independent of the renderer: it turns `crossterm` key
//! events into [`crate::types::Command`] values and nothing else.

pub mod map;

pub use map::{handle_key_event, should_quit};
