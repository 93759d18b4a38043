#![allow(dead_code)]

use pullbar::progress::{FinishState, ProgressView};
use pullbar::record::ProgressEvent;
use pullbar::terminal::KeySource;
use pullbar::{Monitor, MonitorBuilder};
use serde_json::Value;
use std::collections::VecDeque;
use std::io;
use std::time::{Duration, Instant};

// Common test constants
pub const TEST_IMAGE: &str = "node:20";
pub const TEST_LABEL: &str = "Pulling node:20";

/// Creates a layer progress event
pub fn layer(id: &str, status: &str, current: i64, total: i64) -> ProgressEvent {
    ProgressEvent::new(id, status, current, total)
}

/// Creates a global status event
pub fn header(status: &str) -> ProgressEvent {
    ProgressEvent::new("", status, 0, 0)
}

/// Serializes records the way the engine streams them, one per line
pub fn ndjson(records: &[Value]) -> Vec<u8> {
    let mut out = Vec::new();
    for record in records {
        out.extend_from_slice(record.to_string().as_bytes());
        out.extend_from_slice(b"\r\n");
    }
    out
}

/// Creates a monitor that never touches the terminal
pub fn headless_monitor() -> Monitor {
    MonitorBuilder::headless().build()
}

/// Asserts that a sequence of fractions never decreases
pub fn assert_non_decreasing(fractions: &[f64]) {
    for pair in fractions.windows(2) {
        assert!(
            pair[1] >= pair[0],
            "fraction went backwards: {} -> {} in {:?}",
            pair[0],
            pair[1],
            fractions
        );
    }
}

/// Progress view that remembers everything it was told
#[derive(Debug, Default)]
pub struct RecordingView {
    pub fractions: Vec<f64>,
    pub finished: Vec<FinishState>,
}

impl RecordingView {
    pub fn last_fraction(&self) -> Option<f64> {
        self.fractions.last().copied()
    }
}

impl ProgressView for RecordingView {
    fn set_fraction(&mut self, fraction: f64) -> io::Result<()> {
        self.fractions.push(fraction);
        Ok(())
    }

    fn finish(&mut self, state: FinishState) -> io::Result<()> {
        self.finished.push(state);
        Ok(())
    }
}

/// Key source replaying a fixed list of bytes, then staying idle
pub struct ScriptedKeys {
    keys: VecDeque<u8>,
    ready_at: Instant,
}

impl ScriptedKeys {
    pub fn new(keys: &[u8]) -> Self {
        Self::after(Duration::ZERO, keys)
    }

    /// Stays idle for `delay` before the first key
    pub fn after(delay: Duration, keys: &[u8]) -> Self {
        Self {
            keys: keys.iter().copied().collect(),
            ready_at: Instant::now() + delay,
        }
    }
}

impl KeySource for ScriptedKeys {
    fn next_key(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        if Instant::now() < self.ready_at {
            std::thread::sleep(timeout);
            return Ok(None);
        }
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None => {
                std::thread::sleep(timeout);
                Ok(None)
            }
        }
    }
}

/// Key source whose terminal went away
pub struct BrokenKeys;

impl KeySource for BrokenKeys {
    fn next_key(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        Err(io::Error::new(io::ErrorKind::NotFound, "no terminal"))
    }
}
