//! Keyboard watcher.
//!
//! Runs on its own blocking thread, reading keys from the controlling
//! terminal. Escape or Ctrl-C cancels the shared token; a token cancelled from
//! anywhere else stops the watcher within one poll interval.

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Escape.
pub const ESC: u8 = 27;
/// End of text, sent by Ctrl-C in raw mode.
pub const CTRL_C: u8 = 3;

/// Default time between cancellation checks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Whether a raw input byte requests cancellation.
pub fn is_cancel_byte(byte: u8) -> bool {
    byte == ESC || byte == CTRL_C
}

/// The byte a key would send to a terminal in raw mode, if it sends one.
pub fn key_byte(key: &KeyEvent) -> Option<u8> {
    match key.code {
        KeyCode::Esc => Some(ESC),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) && c.is_ascii_alphabetic() => {
            Some(c.to_ascii_lowercase() as u8 - b'a' + 1)
        }
        KeyCode::Char(c) if c.is_ascii() => Some(c as u8),
        KeyCode::Enter => Some(b'\r'),
        KeyCode::Tab => Some(b'\t'),
        KeyCode::Backspace => Some(0x7f),
        _ => None,
    }
}

/// Something that delivers keystrokes as raw bytes.
pub trait KeySource: Send + 'static {
    /// Wait up to `timeout` for the next keystroke.
    ///
    /// `Ok(None)` means nothing arrived in time, or the input was not a key.
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

/// Keystrokes from the controlling terminal.
///
/// Reads standard input when it is a terminal and the terminal device
/// otherwise.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl KeySource for TerminalKeys {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => Ok(key_byte(&key)),
            _ => Ok(None),
        }
    }
}

/// Watch `keys` until a cancel key arrives or `cancel` fires elsewhere.
///
/// Returns the byte that triggered cancellation, if any. The token is
/// cancelled at most once from here.
pub fn watch<K: KeySource>(mut keys: K, cancel: &CancellationToken, poll: Duration) -> Option<u8> {
    while !cancel.is_cancelled() {
        match keys.next_key(poll) {
            Ok(Some(byte)) if is_cancel_byte(byte) => {
                debug!(byte, "cancel key pressed");
                cancel.cancel();
                return Some(byte);
            }
            Ok(_) => {}
            Err(e) => {
                debug!("stopped watching input: {}", e);
                return None;
            }
        }
    }
    None
}

/// Handle to a running keyboard watcher.
pub struct InputWatcher {
    handle: JoinHandle<Option<u8>>,
}

impl InputWatcher {
    /// Start watching on a blocking thread.
    pub fn spawn<K: KeySource>(keys: K, cancel: CancellationToken, poll: Duration) -> Self {
        let handle = tokio::task::spawn_blocking(move || watch(keys, &cancel, poll));
        Self { handle }
    }

    /// Wait for the watcher to stop.
    ///
    /// Only returns promptly once the token is cancelled.
    pub async fn join(self) -> Option<u8> {
        match self.handle.await {
            Ok(byte) => byte,
            Err(e) => {
                warn!("input watcher failed: {}", e);
                None
            }
        }
    }
}
