//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Intent`] plus the host
//! controls (quit, start, reset) that sit outside the game's intent set.

pub mod map;

pub use basetris_types as types;

pub use map::{handle_key_event, is_press, is_reset_key, is_start_key, should_quit};
