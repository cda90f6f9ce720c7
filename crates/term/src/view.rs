//! Mapping terminal dimensions to board dimensions.

use crate::types::CELL_COLUMNS;

/// Terminal size in character cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Query the current terminal size.
    pub fn current() -> anyhow::Result<Self> {
        let (w, h) = crossterm::terminal::size()?;
        Ok(Self::new(w, h))
    }

    /// Board (width, height) that fits this viewport.
    ///
    /// Each cell takes [`CELL_COLUMNS`] columns. With a debug line one row is
    /// reserved below the grid. Returns `None` when not even a 1x1 board fits.
    pub fn board_size(self, debug_line: bool) -> Option<(usize, usize)> {
        let cols = self.width / CELL_COLUMNS;
        let rows = if debug_line {
            self.height.saturating_sub(1)
        } else {
            self.height
        };
        if cols == 0 || rows == 0 {
            return None;
        }
        Some((cols as usize, rows as usize))
    }
}
