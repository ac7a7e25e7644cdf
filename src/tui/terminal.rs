//! Terminal setup and teardown.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{Result, StockPulseError};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts stdout into raw mode on the alternate screen.
///
/// Also installs a panic hook that restores the terminal before the default
/// hook prints, so a panic does not leave the shell in raw mode.
///
/// # Errors
///
/// Returns [`StockPulseError::Io`] if stdout is not a TTY or any terminal
/// call fails. Raw mode is disabled again before returning an error.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(StockPulseError::Io(
            "dashboard requires an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode()
        .map_err(|e| StockPulseError::Io(format!("failed to enable raw mode: {e}")))?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| {
        let _ = disable_raw_mode();
        StockPulseError::Io(format!("failed to enter alternate screen: {e}"))
    })?;

    let terminal = Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        StockPulseError::Io(format!("failed to create terminal: {e}"))
    })?;

    install_panic_hook();
    Ok(terminal)
}

/// Leaves the alternate screen, disables raw mode, and shows the cursor.
///
/// # Errors
///
/// Returns [`StockPulseError::Io`] if any step fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| StockPulseError::Io(e.to_string()))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| StockPulseError::Io(e.to_string()))?;
    terminal
        .show_cursor()
        .map_err(|e| StockPulseError::Io(e.to_string()))?;
    Ok(())
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        default_hook(info);
    }));
}
