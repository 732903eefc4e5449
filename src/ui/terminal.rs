//! Console plumbing: clearing the screen and the outer menu loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};

use super::app::App;
use super::prompt::InputClosed;

/// Wipe the console and park the cursor at the top-left corner.
pub(crate) fn clear_screen<W: Write>(output: &mut W) -> Result<()> {
    execute!(output, Clear(ClearType::All), MoveTo(0, 0)).context("failed to clear screen")
}

/// Drive the menu until the user exits or input runs out.
///
/// Errors from a single flow are caught here, reported, and the menu resumes
/// on the same connection. Only a failure to talk to the console itself ends
/// the loop with an error.
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> Result<()> {
    app.clear()?;
    log::info!("session started");

    loop {
        match app.step() {
            Ok(true) => break,
            Ok(false) => {}
            Err(err) if err.is::<InputClosed>() => {
                log::info!("input closed");
                break;
            }
            Err(err) => {
                log::error!("{err:#}");
                app.report_error(&err)?;
            }
        }
    }

    log::info!("session ended");
    Ok(())
}
