//! Raw mode and alternate screen handling.
//!
//! The preview owns the whole terminal while it runs. [`setup_terminal`] and
//! [`restore_terminal`] switch in and out of that mode, and
//! [`install_panic_hook`] makes sure a panic leaves the shell usable.

use std::io::{self, Stdout, Write};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

/// Terminal the preview draws to.
pub type AppTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Failure while switching terminal modes.
#[derive(Debug, thiserror::Error)]
pub enum TerminalError {
    #[error("failed to setup terminal: {0}")]
    Setup(#[source] io::Error),

    #[error("failed to restore terminal: {0}")]
    Restore(#[source] io::Error),
}

/// Enables raw mode, switches to the alternate screen and wraps stdout in a
/// ratatui terminal.
///
/// # Errors
///
/// Returns [`TerminalError::Setup`] if the terminal refuses either mode.
///
/// # Examples
///
/// ```no_run
/// use cardex_tui::terminal;
///
/// # fn main() -> Result<(), terminal::TerminalError> {
/// let mut terminal = terminal::setup_terminal()?;
/// // Draw cards...
/// terminal::restore_terminal(&mut terminal)?;
/// # Ok(())
/// # }
/// ```
pub fn setup_terminal() -> Result<AppTerminal, TerminalError> {
    let mut stdout = io::stdout();
    enter_preview_mode(&mut stdout).map_err(TerminalError::Setup)?;
    Terminal::new(CrosstermBackend::new(stdout)).map_err(TerminalError::Setup)
}

/// Undoes [`setup_terminal`] and shows the cursor again.
///
/// # Errors
///
/// Returns [`TerminalError::Restore`] if the terminal cannot be switched back.
pub fn restore_terminal(terminal: &mut AppTerminal) -> Result<(), TerminalError> {
    leave_preview_mode(terminal.backend_mut()).map_err(TerminalError::Restore)?;
    terminal.show_cursor().map_err(TerminalError::Restore)
}

/// Chains a panic hook that leaves preview mode before the previous hook
/// prints the panic.
///
/// Call once, before [`setup_terminal`].
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Nothing useful to do if this fails while panicking.
        let _ = leave_preview_mode(&mut io::stdout());
        previous(info);
    }));
}

fn enter_preview_mode(out: &mut impl Write) -> io::Result<()> {
    enable_raw_mode()?;
    execute!(out, EnterAlternateScreen)
}

fn leave_preview_mode(out: &mut impl Write) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(out, LeaveAlternateScreen)
}
