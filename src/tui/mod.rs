// Interactive fuzzy picker for the project list
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;

use std::io;
use std::io::IsTerminal;

use anyhow::{Result, bail};
pub use app::App;

use self::terminal::TerminalGuard;

/// Show the picker over `labels` and return the user's choice
///
/// Labels are displayed in the given order (recency-ranked by the caller)
/// and can be narrowed by typing a fuzzy query. Returns `None` when the
/// picker is dismissed without a selection; that is normal flow, not an
/// error.
pub fn run_picker(labels: Vec<String>) -> Result<Option<String>> {
    if !io::stdout().is_terminal() {
        bail!("The interactive picker requires a terminal");
    }

    let mut guard = TerminalGuard::enter()?;
    let mut app = App::new(labels);
    app.run(guard.terminal_mut())
}
