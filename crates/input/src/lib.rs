//! Terminal input module.
//!
//! The simulation takes no commands; the only input that matters is the
//! interrupt key, which raw mode delivers as a key event instead of a signal.
//! This module maps `crossterm` key events into [`crate::types::LoopControl`].

pub mod map;

pub use tui_life_types as types;

pub use map::{handle_key_event, is_interrupt};
