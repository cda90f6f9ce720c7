//! Escape sequences crossterm spells differently than the life renderer needs.
//!
//! crossterm writes `ESC[1;1H` for a home move and 256-color SGR codes for
//! `Color::White`/`Color::Black`. The renderer wants the short VT100 forms
//! (`ESC[H`, `ESC[47m`, `ESC[40m`, `ESC[{row};0H`), so these are small
//! [`Command`]s that queue like any other crossterm command.

use std::fmt;

use crossterm::Command;

use crate::types::CellState;

/// `ESC[H`: cursor to row 1, column 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorHome;

impl Command for CursorHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        crossterm::cursor::MoveTo(0, 0).execute_winapi()
    }
}

/// `ESC[{row};0H`: cursor to the start of a 1-based terminal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveToRow(pub u16);

impl Command for MoveToRow {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[{};0H", self.0)
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        crossterm::cursor::MoveTo(0, self.0.saturating_sub(1)).execute_winapi()
    }
}

/// `ESC[47m` / `ESC[40m`: paint the background for a cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetCellBackground(pub CellState);

impl Command for SetCellBackground {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        write!(f, "\x1b[{}m", self.0.background_sgr())
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        use crossterm::style::{Color, SetBackgroundColor};
        let color = match self.0 {
            CellState::Alive => Color::White,
            CellState::Dead => Color::Black,
        };
        SetBackgroundColor(color).execute_winapi()
    }
}

/// `ESC[0K`: clear from the cursor to the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearToLineEnd;

impl Command for ClearToLineEnd {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[0K")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> std::io::Result<()> {
        use crossterm::terminal::{Clear, ClearType};
        Clear(ClearType::UntilNewLine).execute_winapi()
    }
}
