//! Core simulation module - pure, deterministic, and testable
//!
//! This crate holds the Game of Life itself and has no dependency on the
//! terminal or on I/O:
//!
//! - [`board`]: fixed-size toroidal grid with neighbor counting and random seeding
//! - [`rule`]: the Life transition rule
//! - [`simulator`]: synchronous generation stepping
//! - [`rng`]: reproducible seeding
//!
//! # Example
//!
//! ```
//! use tui_life_core::{seeded_rng, Board, Simulator};
//!
//! let (mut rng, _seed) = seeded_rng(Some(42));
//! let mut board = Board::new(40, 20).unwrap();
//! board.seed_random(0.1, &mut rng).unwrap();
//! assert_eq!(board.population(), 80);
//!
//! let mut sim = Simulator::new();
//! sim.step(&mut board);
//! assert_eq!(sim.generation(), 1);
//! ```

pub mod board;
pub mod rng;
pub mod rule;
pub mod simulator;

pub use tui_life_types as types;

pub use board::{Board, BoardError};
pub use rng::seeded_rng;
pub use rule::next_state;
pub use simulator::Simulator;
