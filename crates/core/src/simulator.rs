//! Simulator module - advances a board one generation at a time
//!
//! Every cell of the next generation is computed from the current generation
//! into a scratch buffer, which is then swapped into the board in one move.
//! No cell ever reads a value that was already updated in the same step.

use crate::board::Board;
use crate::rule::next_state;

/// Steps a [`Board`] forward and counts generations.
#[derive(Debug, Clone, Default)]
pub struct Simulator {
    /// Next-generation buffer, reused between steps
    scratch: Vec<bool>,
    generation: u64,
}

impl Simulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps applied so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Advance `board` by one generation.
    pub fn step(&mut self, board: &mut Board) {
        self.scratch.clear();
        self.scratch.reserve(board.cells().len());

        for y in 0..board.height() {
            for x in 0..board.width() {
                let current = board.get(x, y);
                let live_count = board.count_live_neighbors(x, y) + u8::from(current);
                self.scratch.push(next_state(current, live_count));
            }
        }

        board.replace_cells(&mut self.scratch);
        self.generation += 1;
    }
}
