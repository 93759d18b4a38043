//! The capability every renderer exposes to the monitor.

use std::fmt;
use std::io;

/// How a pull ended, as shown on the final frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishState {
    /// The pull completed.
    Done,
    /// The user cancelled the pull.
    Cancelled,
    /// The pull failed; the error is reported separately.
    Failed,
}

impl FinishState {
    /// The word written in place of the bar, if any.
    pub fn word(&self) -> Option<&'static str> {
        match self {
            FinishState::Done => Some("DONE"),
            FinishState::Cancelled => Some("CANCELLED"),
            FinishState::Failed => None,
        }
    }
}

impl fmt::Display for FinishState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.word().unwrap_or("FAILED"))
    }
}

/// A sink for overall progress.
///
/// The monitor only ever sets a fraction in `[0, 1]` and finishes the view
/// exactly once, so a renderer needs no knowledge of layers or records.
pub trait ProgressView {
    /// Show a new overall fraction.
    fn set_fraction(&mut self, fraction: f64) -> io::Result<()>;

    /// Draw the final frame and release anything the view changed on screen.
    fn finish(&mut self, state: FinishState) -> io::Result<()>;
}

impl<V: ProgressView + ?Sized> ProgressView for Box<V> {
    fn set_fraction(&mut self, fraction: f64) -> io::Result<()> {
        (**self).set_fraction(fraction)
    }

    fn finish(&mut self, state: FinishState) -> io::Result<()> {
        (**self).finish(state)
    }
}
