//! Main application loop and terminal management.

use color_eyre::eyre::{Context, Result, eyre};
use core::time;
use ratatui::{
    Terminal,
    crossterm::{
        event, execute,
        terminal::{
            EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
            enable_raw_mode,
        },
    },
    prelude::Backend,
};
use std::io;

use crate::ui::app::App;

/// Manages the terminal lifecycle (raw mode, alternate screen) and runs the
/// loop that draws the app and feeds it input events.
pub struct Renderer<B: Backend + io::Write> {
    terminal: Terminal<B>,
    app: App,
}

impl<B: Backend + io::Write> Renderer<B> {
    pub fn new(terminal: Terminal<B>, app: App) -> Self {
        Self { terminal, app }
    }

    /// Initializes the terminal and starts the render loop. Returns when the
    /// user quits.
    pub fn start_render_loop(&mut self) -> Result<()> {
        self.enable_terminal_raw_mode()?;
        let res = self.start_loop();
        // restore the terminal even if the loop failed
        let exited = self.exit();
        first_error(res, exited)
    }

    fn start_loop(&mut self) -> Result<()> {
        loop {
            let mut rendered = Ok(());

            self.terminal
                .draw(|f| rendered = self.app.draw(f))
                .map_err(|e| eyre!("failed to render: {}", e))?;

            rendered?;

            if let Ok(has_event) = event::poll(time::Duration::from_millis(60))
                && has_event
            {
                let evt = event::read()?;

                if let Err(e) = self.app.process_event(&evt) {
                    log::error!("failed to process event: {}", e);
                }

                if self.app.should_quit() {
                    return Ok(());
                }
            }
        }
    }

    fn enable_terminal_raw_mode(&mut self) -> Result<()> {
        enable_raw_mode().wrap_err("failed to enter raw mode")?;
        // stdout is written directly, the backend buffers until the first draw
        execute!(io::stdout(), EnterAlternateScreen)
            .wrap_err("failed to enter alternate screen")?;
        self.terminal
            .clear()
            .map_err(|e| eyre!("failed to clear terminal: {}", e))?;
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal
            .show_cursor()
            .map_err(|e| eyre!("failed to show terminal cursor: {}", e))?;
        Ok(())
    }
}

// The loop's failure is the one reported. A failure to restore the terminal
// after it is only logged.
fn first_error(res: Result<()>, exited: Result<()>) -> Result<()> {
    match (res, exited) {
        (Err(e), Err(exit_err)) => {
            log::error!("failed to restore terminal: {}", exit_err);
            Err(e)
        }
        (Err(e), Ok(())) => Err(e),
        (Ok(()), exited) => exited,
    }
}

#[cfg(test)]
#[path = "./renderer_tests.rs"]
mod tests;
