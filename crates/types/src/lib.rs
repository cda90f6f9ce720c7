//! Shared types and constants.
//!
//! Everything here is plain data with no external dependencies so that the
//! simulation, the terminal layer and the binary agree on the same values.
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_FRAMERATE` | 15.0 | Target frames per second |
//! | `DEFAULT_DENSITY` | 0.1 | Share of cells alive after seeding |
//! | `CELL_COLUMNS` | 2 | Terminal columns per board cell |
//!
//! # Examples
//!
//! ```
//! use tui_life_types::{CellState, CELL_COLUMNS, CELL_GLYPH};
//!
//! assert_eq!(CellState::from(true), CellState::Alive);
//! assert!(CellState::Alive.is_alive());
//! assert_eq!(CELL_GLYPH.len(), CELL_COLUMNS as usize);
//! ```

/// Target frame rate when none is configured.
pub const DEFAULT_FRAMERATE: f64 = 15.0;

/// Fraction of the board seeded alive when none is configured.
pub const DEFAULT_DENSITY: f64 = 0.1;

/// Text drawn for every cell; the background color carries the state.
pub const CELL_GLYPH: &str = "  ";

/// Terminal columns taken by one cell, so cells look roughly square.
pub const CELL_COLUMNS: u16 = 2;

/// SGR background code for live cells (white).
pub const ALIVE_BACKGROUND_SGR: u8 = 47;

/// SGR background code for dead cells (black).
pub const DEAD_BACKGROUND_SGR: u8 = 40;

/// Liveness of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }

    /// SGR background code used to paint this state.
    pub fn background_sgr(self) -> u8 {
        match self {
            CellState::Alive => ALIVE_BACKGROUND_SGR,
            CellState::Dead => DEAD_BACKGROUND_SGR,
        }
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive {
            CellState::Alive
        } else {
            CellState::Dead
        }
    }
}

/// What the run loop should do in response to terminal input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopControl {
    /// Keep drawing and stepping.
    Continue,
    /// The user interrupted the run (Ctrl-C in raw mode).
    Interrupt,
}
