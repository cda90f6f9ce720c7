//! TerminalRenderer: draws a board to a real terminal.
//!
//! A frame is a cursor-home, then the grid in row-major order, then an
//! optional debug line on the row reserved below the grid. Color escapes are
//! only emitted where the cell state differs from the previously drawn cell,
//! so a frame costs one escape per run of same-state cells rather than one per
//! cell. The whole frame is encoded into a buffer and written with a single
//! write + flush.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::ansi::{ClearToLineEnd, CursorHome, MoveToRow, SetCellBackground};
use crate::core::Board;
use crate::types::{CellState, CELL_GLYPH};

/// What a single encoded frame contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Color escapes emitted for the grid.
    pub color_escapes: usize,
    /// Cells drawn.
    pub cells: usize,
    /// Bytes queued for the frame.
    pub bytes: usize,
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    buf: Vec<u8>,
    active: bool,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into any writer (tests use a `Vec<u8>`).
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            buf: Vec::with_capacity(64 * 1024),
            active: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Whether `enter` has run without a matching `exit`.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Take over the terminal: raw mode, alternate screen, cleared, cursor hidden.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.active = true;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(terminal::Clear(terminal::ClearType::All))?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Give the terminal back. Safe to call more than once.
    pub fn exit(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame of `board`, with `debug_line` on the row below it.
    pub fn draw(&mut self, board: &Board, debug_line: Option<&str>) -> Result<FrameStats> {
        self.buf.clear();
        let stats = encode_frame_into(board, debug_line, &mut self.buf)?;
        self.flush_buf()?;
        Ok(stats)
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for TerminalRenderer<W> {
    fn drop(&mut self) {
        // Covers early returns and unwinding; the normal path has already exited.
        let _ = self.exit();
    }
}

/// Encode a full frame of `board` into `out`.
///
/// This builds the escape sequence stream without writing to the terminal.
pub fn encode_frame_into(
    board: &Board,
    debug_line: Option<&str>,
    out: &mut Vec<u8>,
) -> Result<FrameStats> {
    let start_len = out.len();
    let mut stats = FrameStats::default();
    // Last color emitted this frame; None until the first cell.
    let mut current: Option<CellState> = None;

    out.queue(CursorHome)?;

    for y in 0..board.height() {
        if y > 0 {
            out.queue(Print("\r\n"))?;
        }
        for x in 0..board.width() {
            let state = board.state(x, y);
            if current != Some(state) {
                out.queue(SetCellBackground(state))?;
                current = Some(state);
                stats.color_escapes += 1;
            }
            out.queue(Print(CELL_GLYPH))?;
            stats.cells += 1;
        }
    }

    if let Some(line) = debug_line {
        let row = u16::try_from(board.height() + 1).unwrap_or(u16::MAX);
        out.queue(MoveToRow(row))?;
        out.queue(Print(line))?;
        out.queue(ResetColor)?;
        out.queue(ClearToLineEnd)?;
    }

    stats.bytes = out.len() - start_len;
    Ok(stats)
}
