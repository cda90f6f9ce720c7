//! Key mapping from terminal events to loop control.

use crate::types::LoopControl;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a key event to what the run loop should do.
pub fn handle_key_event(key: KeyEvent) -> LoopControl {
    if is_interrupt(key) {
        LoopControl::Interrupt
    } else {
        LoopControl::Continue
    }
}

/// Ctrl-C (or Ctrl-D / Ctrl-\, the other terminal interrupt chords).
pub fn is_interrupt(key: KeyEvent) -> bool {
    if key.kind == KeyEventKind::Release {
        return false;
    }
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(
            key.code,
            KeyCode::Char('c') | KeyCode::Char('C') | KeyCode::Char('d') | KeyCode::Char('\\')
        )
}
