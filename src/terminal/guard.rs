//! Scoped terminal mode changes.

use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal;
use std::io::{self, IsTerminal};
use tracing::debug;

/// Holds raw mode for the lifetime of a pull.
///
/// Restoration runs exactly once: either through [`TerminalGuard::restore`] or
/// when the guard is dropped, which also covers unwinding panics.
#[derive(Debug)]
pub struct TerminalGuard {
    raw_mode: bool,
    show_cursor: bool,
    restored: bool,
}

impl TerminalGuard {
    /// Switch the controlling terminal to raw input mode.
    ///
    /// Without a controlling terminal the guard is inert; that is not an error.
    pub fn acquire() -> Self {
        let raw_mode = match terminal::enable_raw_mode() {
            Ok(()) => true,
            Err(e) => {
                debug!("raw mode unavailable: {}", e);
                false
            }
        };
        Self {
            raw_mode,
            show_cursor: io::stdout().is_terminal(),
            restored: false,
        }
    }

    /// A guard that leaves the input mode alone.
    ///
    /// It still re-shows the cursor on a terminal stdout, since renderers may
    /// hide it whether or not raw mode is on.
    pub fn inert() -> Self {
        Self {
            raw_mode: false,
            show_cursor: io::stdout().is_terminal(),
            restored: false,
        }
    }

    /// Whether raw mode was switched on.
    pub fn is_raw(&self) -> bool {
        self.raw_mode
    }

    /// Whether restoring re-shows the cursor.
    pub fn restores_cursor(&self) -> bool {
        self.show_cursor
    }

    /// Whether the terminal has been put back.
    pub fn is_restored(&self) -> bool {
        self.restored
    }

    /// Put the terminal back the way it was found.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        if self.raw_mode {
            if let Err(e) = terminal::disable_raw_mode() {
                debug!("failed to leave raw mode: {}", e);
            }
        }
        if self.show_cursor {
            let _ = execute!(io::stdout(), Show);
        }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.restore();
    }
}
