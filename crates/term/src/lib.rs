//! Terminal rendering layer.
//!
//! Draws a [`core::Board`] straight to the terminal with ANSI escapes. There is
//! no widget toolkit and no per-cell framebuffer: every frame is encoded into a
//! single byte buffer and written in one go.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Emit a color escape only where the cell state changes along the scan
//! - 2 columns per cell so cells look roughly square

pub mod ansi;
pub mod renderer;
pub mod view;

pub use tui_life_core as core;
pub use tui_life_types as types;

pub use ansi::{ClearToLineEnd, CursorHome, MoveToRow, SetCellBackground};
pub use renderer::{encode_frame_into, FrameStats, TerminalRenderer};
pub use view::Viewport;
