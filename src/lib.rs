//! Conway's Game of Life in the terminal (workspace facade crate).
//!
//! The simulation, terminal layer, input mapping and shared types live in
//! dedicated crates under `crates/`; this package re-exports them as
//! `tui_life::{core,term,input,types}` and adds the pieces that tie a run
//! together: configuration, frame pacing, logging and the application loop.

pub mod app;
pub mod config;
pub mod logging;
pub mod scheduler;

pub use tui_life_core as core;
pub use tui_life_input as input;
pub use tui_life_term as term;
pub use tui_life_types as types;

pub use app::{App, RunSummary, StartupError};
pub use config::{ConfigError, Invocation, LifeConfig};
pub use scheduler::{FrameScheduler, FrameTiming, FrameWait, TerminalWait};
