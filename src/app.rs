//! Application state and the run loop.
//!
//! [`App`] owns everything a run needs: the board, the simulator, the
//! terminal renderer and the frame scheduler. Nothing lives in globals.

use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::Result;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::config::LifeConfig;
use crate::core::{seeded_rng, Board, BoardError, Simulator};
use crate::scheduler::{FrameScheduler, FrameWait};
use crate::term::{TerminalRenderer, Viewport};
use crate::types::LoopControl;

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("terminal too small ({columns}x{rows}); need at least {min_columns}x{min_rows}")]
    TerminalTooSmall {
        columns: u16,
        rows: u16,
        min_columns: u16,
        min_rows: u16,
    },
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Totals reported when the loop ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub generation: u64,
}

pub struct App<W: Write> {
    board: Board,
    simulator: Simulator,
    renderer: TerminalRenderer<W>,
    scheduler: FrameScheduler,
    debug: bool,
    frames: u64,
}

impl<W: Write> App<W> {
    /// Size and seed a board for `viewport`.
    pub fn new(
        config: &LifeConfig,
        viewport: Viewport,
        renderer: TerminalRenderer<W>,
    ) -> Result<Self, StartupError> {
        let (width, height) =
            viewport
                .board_size(config.debug)
                .ok_or(StartupError::TerminalTooSmall {
                    columns: viewport.width,
                    rows: viewport.height,
                    min_columns: crate::types::CELL_COLUMNS,
                    min_rows: if config.debug { 2 } else { 1 },
                })?;

        let mut board = Board::new(width, height)?;
        let (mut rng, seed) = seeded_rng(config.seed);
        let seeded = board.seed_random(config.density, &mut rng)?;

        info!(
            width,
            height,
            seed,
            seeded,
            density = config.density,
            framerate = config.framerate,
            debug = config.debug,
            "board ready"
        );

        Ok(Self::with_board(board, config, renderer))
    }

    /// Run an already built board.
    pub fn with_board(board: Board, config: &LifeConfig, renderer: TerminalRenderer<W>) -> Self {
        Self {
            board,
            simulator: Simulator::new(),
            renderer,
            scheduler: FrameScheduler::new(config.frame_period()),
            debug: config.debug,
            frames: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn renderer(&self) -> &TerminalRenderer<W> {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut TerminalRenderer<W> {
        &mut self.renderer
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }

    /// Draw the current generation, then advance it. Returns the time left
    /// in the frame period.
    pub fn tick(&mut self) -> Result<Duration> {
        self.scheduler.begin_frame(Instant::now());

        let debug_line = self.debug.then(|| self.debug_line());
        let stats = self.renderer.draw(&self.board, debug_line.as_deref())?;
        self.simulator.step(&mut self.board);
        self.frames += 1;

        let remaining = self.scheduler.finish_frame(Instant::now());
        trace!(
            frame = self.frames,
            delta_us = self.scheduler.last_delta().unwrap_or_default().as_micros() as u64,
            color_escapes = stats.color_escapes,
            bytes = stats.bytes,
            remaining_us = remaining.as_micros() as u64,
            "frame"
        );
        Ok(remaining)
    }

    /// Tick until `wait` reports an interrupt.
    pub fn run(&mut self, wait: &mut impl FrameWait) -> Result<RunSummary> {
        debug!(period_us = self.scheduler.period().as_micros() as u64, "loop start");
        loop {
            let remaining = self.tick()?;
            if wait.wait(remaining)? == LoopControl::Interrupt {
                break;
            }
        }
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            generation: self.simulator.generation(),
        }
    }

    /// Previous frame time, generation and population.
    pub fn debug_line(&self) -> String {
        let frame = match self.scheduler.last_delta() {
            Some(delta) => format!("{:.2} ms", delta.as_secs_f64() * 1000.0),
            None => "-- ms".to_string(),
        };
        format!(
            "frame {frame} / {:.2} ms | gen {} | pop {}",
            self.scheduler.period().as_secs_f64() * 1000.0,
            self.simulator.generation(),
            self.board.population()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Frames {
        left: usize,
        waits: Vec<Duration>,
    }

    impl FrameWait for Frames {
        fn wait(&mut self, duration: Duration) -> Result<LoopControl> {
            self.waits.push(duration);
            self.left -= 1;
            Ok(if self.left == 0 {
                LoopControl::Interrupt
            } else {
                LoopControl::Continue
            })
        }
    }

    fn config(debug: bool) -> LifeConfig {
        LifeConfig {
            debug,
            seed: Some(5),
            ..LifeConfig::default()
        }
    }

    #[test]
    fn new_sizes_board_from_viewport() {
        let app = App::new(
            &config(false),
            Viewport::new(80, 24),
            TerminalRenderer::with_writer(Vec::new()),
        )
        .unwrap();
        assert_eq!((app.board().width(), app.board().height()), (40, 24));
        assert_eq!(app.board().population(), 96);
    }

    #[test]
    fn new_reserves_debug_row() {
        let app = App::new(
            &config(true),
            Viewport::new(80, 24),
            TerminalRenderer::with_writer(Vec::new()),
        )
        .unwrap();
        assert_eq!(app.board().height(), 23);
    }

    #[test]
    fn new_rejects_tiny_terminal() {
        let err = App::new(
            &config(true),
            Viewport::new(80, 1),
            TerminalRenderer::with_writer(Vec::new()),
        )
        .err()
        .unwrap();
        assert!(matches!(err, StartupError::TerminalTooSmall { .. }));
    }

    #[test]
    fn run_ticks_until_interrupt() {
        let board = Board::from_rows(&[".....", ".....", ".###.", ".....", "....."]).unwrap();
        let mut app = App::with_board(
            board,
            &config(false),
            TerminalRenderer::with_writer(Vec::new()),
        );
        let mut wait = Frames {
            left: 3,
            waits: Vec::new(),
        };

        let summary = app.run(&mut wait).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                frames: 3,
                generation: 3
            }
        );
        assert_eq!(wait.waits.len(), 3);
        assert!(wait.waits.iter().all(|w| *w <= app.scheduler().period()));
        // Odd number of steps leaves the blinker vertical.
        assert_eq!(
            app.board().to_rows(),
            [".....", "..#..", "..#..", "..#..", "....."]
        );
    }

    #[test]
    fn debug_line_reports_previous_frame() {
        let board = Board::from_rows(&["....", ".##.", ".##.", "...."]).unwrap();
        let mut app = App::with_board(
            board,
            &config(true),
            TerminalRenderer::with_writer(Vec::new()),
        );
        assert_eq!(app.debug_line(), "frame -- ms / 66.67 ms | gen 0 | pop 4");

        app.tick().unwrap();
        let line = app.debug_line();
        assert!(line.starts_with("frame "), "{line}");
        assert!(!line.contains("--"), "{line}");
        assert!(line.ends_with("| gen 1 | pop 4"), "{line}");

        let written = String::from_utf8(app.renderer().writer().clone()).unwrap();
        assert!(written.contains("\x1b[5;0H"), "debug row goes below the 4-row grid");
    }
}
