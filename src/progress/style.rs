//! Styling options for the widget renderer.
//!
//! # Examples
//!
//! ```rust
//! use pullbar::progress::ProgressBarOpts;
//!
//! // Default look: `Pulling node:20...[=======>    ]  64%`
//! let opts = ProgressBarOpts::default();
//! assert!(opts.is_enabled());
//!
//! // Block characters over 30 columns
//! let opts = ProgressBarOpts::with_width(30).progress_chars(ProgressBarOpts::CHARS_FINE);
//!
//! // Nothing drawn at all
//! let hidden = ProgressBarOpts::hidden();
//! assert!(!hidden.is_enabled());
//! ```

use super::line::DEFAULT_BAR_WIDTH;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tracing::warn;

/// Define the options for the widget progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: String,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: String,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self::with_width(DEFAULT_BAR_WIDTH)
    }
}

impl ProgressBarOpts {
    /// Use the same characters as the plain renderer: `"=> "`.
    pub const CHARS_ASCII: &'static str = "=> ";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Template of the final frame, which only carries the message.
    pub const TEMPLATE_MESSAGE: &'static str = "{msg}";

    /// Create options drawing a bar of `width` columns.
    pub fn with_width(width: usize) -> Self {
        Self {
            template: format!("{{msg}}...[{{bar:{}}}] {{percent:>3}}%", width),
            progress_chars: Self::CHARS_ASCII.into(),
            enabled: true,
        }
    }

    /// Replace the template.
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = template.into();
        self
    }

    /// Replace the progression characters.
    pub fn progress_chars(mut self, chars: impl Into<String>) -> Self {
        self.progress_chars = chars.into();
        self
    }

    /// Whether the bar is drawn at all.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    ///
    /// An invalid template falls back to the indicatif default bar.
    pub fn to_progress_style(&self) -> ProgressStyle {
        let style = match ProgressStyle::with_template(&self.template) {
            Ok(style) => style,
            Err(e) => {
                warn!(template = %self.template, "invalid progress template: {}", e);
                ProgressStyle::default_bar()
            }
        };
        style.progress_chars(&self.progress_chars)
    }

    /// Create a [`ProgressBar`] of length `len` drawing to stdout.
    pub fn to_progress_bar(&self, len: u64) -> ProgressBar {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::hidden());
        }

        ProgressBar::with_draw_target(Some(len), ProgressDrawTarget::stdout())
            .with_style(self.to_progress_style())
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bar.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}

/// Style of the final frame.
pub(crate) fn message_style() -> ProgressStyle {
    ProgressStyle::with_template(ProgressBarOpts::TEMPLATE_MESSAGE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}
