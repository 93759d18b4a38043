//! Widget renderer backed by indicatif.
//!
//! Consumes exactly the same fractions as the plain [`LineRenderer`], so the
//! merge and clamp logic lives in one place.
//!
//! [`LineRenderer`]: super::LineRenderer
//!
//! # Examples
//!
//! ```rust
//! use pullbar::progress::{BarRenderer, FinishState, ProgressBarOpts, ProgressView};
//!
//! let mut view = BarRenderer::new("Pulling node:20", ProgressBarOpts::hidden());
//! view.set_fraction(0.4).unwrap();
//! assert_eq!(view.bar().position(), 400);
//! view.finish(FinishState::Done).unwrap();
//! ```

use super::style::{message_style, ProgressBarOpts};
use super::view::{FinishState, ProgressView};
use indicatif::ProgressBar;
use std::io;

/// Resolution of the widget bar.
const SCALE: u64 = 1000;

/// Progress view drawing an indicatif bar.
pub struct BarRenderer {
    label: String,
    bar: ProgressBar,
}

impl BarRenderer {
    /// Create the bar and draw its first frame.
    pub fn new(label: impl Into<String>, opts: ProgressBarOpts) -> Self {
        let label = label.into();
        let bar = opts.to_progress_bar(SCALE);
        bar.set_message(label.clone());
        bar.tick();
        Self { label, bar }
    }

    /// Get the underlying progress bar.
    pub fn bar(&self) -> &ProgressBar {
        &self.bar
    }
}

impl ProgressView for BarRenderer {
    fn set_fraction(&mut self, fraction: f64) -> io::Result<()> {
        let fraction = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        self.bar.set_position((fraction * SCALE as f64).round() as u64);
        Ok(())
    }

    fn finish(&mut self, state: FinishState) -> io::Result<()> {
        match state.word() {
            Some(word) => {
                self.bar.set_style(message_style());
                let message = format!("{}...{}", self.label, word);
                if state == FinishState::Done {
                    self.bar.finish_with_message(message);
                } else {
                    self.bar.abandon_with_message(message);
                }
            }
            None => self.bar.finish_and_clear(),
        }
        Ok(())
    }
}
