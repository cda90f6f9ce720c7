//! Terminal Game of Life runner.
//!
//! Draws the board with ANSI escapes at a fixed frame rate until Ctrl-C.

use anyhow::{anyhow, Result};
use tracing::info;

use tui_life::config::{self, Invocation, USAGE};
use tui_life::term::{TerminalRenderer, Viewport};
use tui_life::{App, TerminalWait};

fn main() -> Result<()> {
    let config = match config::load().map_err(|e| anyhow!("{e}\n\n{USAGE}"))? {
        Invocation::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        Invocation::Run(config) => config,
    };

    tui_life::logging::init(config.log_path.as_deref())?;

    // Everything that can fail at startup happens before the terminal is touched.
    let viewport = Viewport::current()?;
    let mut app = App::new(&config, viewport, TerminalRenderer::new())?;

    app.renderer_mut().enter()?;
    let result = app.run(&mut TerminalWait);

    // Always try to restore terminal state.
    let _ = app.renderer_mut().exit();

    let summary = result?;
    info!(
        frames = summary.frames,
        generation = summary.generation,
        "interrupted"
    );
    Ok(())
}
