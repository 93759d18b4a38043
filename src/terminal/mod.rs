//! Terminal module: process-wide terminal state and keyboard input.
//!
//! - `guard` - [`TerminalGuard`], raw mode held for the lifetime of a pull
//! - `input` - [`InputWatcher`], cancel keys read on a separate thread

pub mod guard;
pub mod input;

pub use guard::TerminalGuard;
pub use input::{
    is_cancel_byte, key_byte, watch, InputWatcher, KeySource, TerminalKeys, CTRL_C,
    DEFAULT_POLL_INTERVAL, ESC,
};
