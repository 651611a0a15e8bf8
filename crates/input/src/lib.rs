//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::Command`]. Terminals do not
//! report key releases reliably, so only press and repeat events are turned into
//! commands; holding a key therefore repeats at the terminal's own rate.

pub mod map;

pub use fallblock_types as types;

pub use map::{command_for_event, handle_key_event, should_quit};
