//! Board module - the toroidal cell grid
//!
//! The board is a `width x height` grid of boolean cells stored in a flat
//! row-major `Vec` (index `y * width + x`). Dimensions are fixed at
//! construction and never change for the lifetime of a run.
//!
//! Neighbor lookups wrap around both axes, so the left edge touches the right
//! edge and the top edge touches the bottom edge.

use rand::Rng;
use thiserror::Error;

use crate::types::CellState;

/// Offsets of the 8 cells surrounding a cell.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("board dimensions must be non-zero (got {width}x{height})")]
    EmptyDimension { width: usize, height: usize },
    #[error("seed density {0} must be between 0.0 and 1.0")]
    InvalidDensity(f64),
    #[error("pattern row {row} has width {actual}, expected {expected}")]
    RaggedPattern {
        row: usize,
        expected: usize,
        actual: usize,
    },
}

/// Fixed-size toroidal grid of live/dead cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Row-major cells (y * width + x)
    cells: Vec<bool>,
}

impl Board {
    /// Create an all-dead board.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyDimension { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![false; width * height],
        })
    }

    /// Build a board from text rows, `#` (or `O`) alive and anything else dead.
    ///
    /// ```
    /// use tui_life_core::Board;
    ///
    /// let board = Board::from_rows(&[".#.", ".#.", ".#."]).unwrap();
    /// assert_eq!(board.width(), 3);
    /// assert_eq!(board.population(), 3);
    /// assert!(board.get(1, 2));
    /// ```
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardError> {
        let height = rows.len();
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        let mut board = Self::new(width, height)?;

        for (y, row) in rows.iter().enumerate() {
            let actual = row.chars().count();
            if actual != width {
                return Err(BoardError::RaggedPattern {
                    row: y,
                    expected: width,
                    actual,
                });
            }
            for (x, ch) in row.chars().enumerate() {
                board.set(x, y, matches!(ch, '#' | 'O'));
            }
        }
        Ok(board)
    }

    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} board",
            self.width,
            self.height
        );
        y * self.width + x
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Liveness at (x, y). Panics when out of range.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    /// Same as [`Board::get`], as a [`CellState`].
    pub fn state(&self, x: usize, y: usize) -> CellState {
        CellState::from(self.get(x, y))
    }

    /// Set liveness at (x, y). Panics when out of range.
    pub fn set(&mut self, x: usize, y: usize, alive: bool) {
        let idx = self.index(x, y);
        self.cells[idx] = alive;
    }

    /// Row-major view of all cells.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Count live cells among the 8 wrapped neighbors of (x, y).
    pub fn count_live_neighbors(&self, x: usize, y: usize) -> u8 {
        let w = self.width as isize;
        let h = self.height as isize;
        let (x, y) = (x as isize, y as isize);

        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                let nx = (x + dx).rem_euclid(w) as usize;
                let ny = (y + dy).rem_euclid(h) as usize;
                self.cells[ny * self.width + nx]
            })
            .count() as u8
    }

    /// Bring `round(width * height * density)` dead cells to life at random.
    ///
    /// Coordinates are drawn uniformly and re-rolled when they hit a live
    /// cell, so no cell is seeded twice. When the request covers every
    /// remaining dead cell, those cells are filled directly instead.
    /// Returns the number of cells brought to life.
    pub fn seed_random<R: Rng + ?Sized>(
        &mut self,
        density: f64,
        rng: &mut R,
    ) -> Result<usize, BoardError> {
        if !(0.0..=1.0).contains(&density) {
            return Err(BoardError::InvalidDensity(density));
        }

        let total = self.cells.len();
        let wanted = (total as f64 * density).round() as usize;
        let dead = total - self.population();

        if wanted >= dead {
            self.cells.fill(true);
            return Ok(dead);
        }

        let mut placed = 0;
        while placed < wanted {
            let x = rng.gen_range(0..self.width);
            let y = rng.gen_range(0..self.height);
            let idx = y * self.width + x;
            if !self.cells[idx] {
                self.cells[idx] = true;
                placed += 1;
            }
        }
        Ok(placed)
    }

    /// Swap in a complete next generation.
    pub(crate) fn replace_cells(&mut self, next: &mut Vec<bool>) {
        debug_assert_eq!(next.len(), self.cells.len());
        std::mem::swap(&mut self.cells, next);
    }

    /// Render as text rows (`#` alive, `.` dead), handy in assertions.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(|&a| if a { '#' } else { '.' }).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn new_board_is_dead() {
        let board = Board::new(4, 3).unwrap();
        assert_eq!(board.cells().len(), 12);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            Board::new(0, 5),
            Err(BoardError::EmptyDimension {
                width: 0,
                height: 5
            })
        );
        assert!(Board::new(5, 0).is_err());
    }

    #[test]
    fn set_and_get_use_row_major_layout() {
        let mut board = Board::new(5, 4).unwrap();
        board.set(3, 2, true);
        assert!(board.get(3, 2));
        assert!(board.cells()[2 * 5 + 3]);
        board.set(3, 2, false);
        assert!(!board.get(3, 2));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn out_of_range_access_panics() {
        let board = Board::new(3, 3).unwrap();
        board.get(3, 0);
    }

    #[test]
    fn neighbors_wrap_from_corner() {
        let mut board = Board::new(5, 4).unwrap();
        board.set(0, 0, true);

        assert_eq!(board.count_live_neighbors(4, 3), 1);
        assert_eq!(board.count_live_neighbors(4, 0), 1);
        assert_eq!(board.count_live_neighbors(0, 3), 1);
        assert_eq!(board.count_live_neighbors(1, 1), 1);
        assert_eq!(board.count_live_neighbors(2, 2), 0);
        // A cell is not its own neighbor.
        assert_eq!(board.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn fully_surrounded_cell_has_eight_neighbors() {
        let mut board = Board::new(5, 5).unwrap();
        for y in 0..3 {
            for x in 0..3 {
                board.set(x, y, true);
            }
        }
        assert_eq!(board.count_live_neighbors(1, 1), 8);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        assert_eq!(
            Board::from_rows(&["..", "..."]),
            Err(BoardError::RaggedPattern {
                row: 1,
                expected: 2,
                actual: 3
            })
        );
    }

    #[test]
    fn to_rows_mirrors_from_rows() {
        let rows = ["#..", ".#.", "..#"];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    fn seed_places_exact_distinct_count() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut board = Board::new(20, 10).unwrap();
        let placed = board.seed_random(0.1, &mut rng).unwrap();
        assert_eq!(placed, 20);
        assert_eq!(board.population(), 20);
    }

    #[test]
    fn seed_rounds_the_requested_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut board = Board::new(3, 3).unwrap();
        // 9 * 0.25 = 2.25 -> 2
        assert_eq!(board.seed_random(0.25, &mut rng).unwrap(), 2);
        assert_eq!(board.population(), 2);
    }

    #[test]
    fn seed_zero_density_leaves_board_dead() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(8, 8).unwrap();
        assert_eq!(board.seed_random(0.0, &mut rng).unwrap(), 0);
        assert_eq!(board.population(), 0);
    }

    #[test]
    fn seed_full_density_fills_board() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(6, 4).unwrap();
        assert_eq!(board.seed_random(1.0, &mut rng).unwrap(), 24);
        assert_eq!(board.population(), 24);
    }

    #[test]
    fn seed_rejects_density_out_of_range() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut board = Board::new(2, 2).unwrap();
        assert_eq!(
            board.seed_random(1.5, &mut rng),
            Err(BoardError::InvalidDensity(1.5))
        );
        assert!(board.seed_random(f64::NAN, &mut rng).is_err());
        assert_eq!(board.population(), 0);
    }
}
