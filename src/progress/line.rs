//! Plain single-line renderer.
//!
//! Draws `Label...[=====>     ]  42%` with raw control sequences. On a
//! terminal every frame rewrites the same line; anywhere else a plain line is
//! appended whenever the shown percentage changes.
//!
//! # Examples
//!
//! ```rust
//! use pullbar::progress::{render_line, FinishState, LineRenderer, ProgressView};
//!
//! assert_eq!(render_line("Pulling node:20", 0.5, 10), "Pulling node:20...[====>     ]  50%");
//!
//! let mut out = Vec::new();
//! let mut line = LineRenderer::new("Pulling node:20", &mut out, false);
//! line.set_fraction(0.25).unwrap();
//! line.finish(FinishState::Done).unwrap();
//! drop(line);
//! assert!(String::from_utf8(out).unwrap().ends_with("Pulling node:20...DONE\n"));
//! ```

use super::view::{FinishState, ProgressView};
use crossterm::cursor::{Hide, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

/// Default bar width in columns.
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// Build a bar of `width` columns: `=` filled, `>` head, blanks after.
pub fn ascii_bar(fraction: f64, width: usize) -> String {
    let fraction = clamp_unit(fraction);
    let filled = ((fraction * width as f64).floor() as usize).min(width);

    let mut bar = String::with_capacity(width);
    if filled > 0 {
        bar.extend(std::iter::repeat('=').take(filled - 1));
        bar.push('>');
    }
    bar.extend(std::iter::repeat(' ').take(width - filled));
    bar
}

/// Format one progress line: `<label>...[<bar>] <pct>%`.
pub fn render_line(label: &str, fraction: f64, width: usize) -> String {
    let fraction = clamp_unit(fraction);
    format!(
        "{}...[{}] {:>3}%",
        label,
        ascii_bar(fraction, width),
        percent(fraction)
    )
}

fn percent(fraction: f64) -> u32 {
    (clamp_unit(fraction) * 100.0).round() as u32
}

fn clamp_unit(fraction: f64) -> f64 {
    if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    }
}

/// Renders progress on a single line of `out`.
pub struct LineRenderer<W: Write> {
    label: String,
    out: W,
    width: usize,
    interactive: bool,
    cursor_hidden: bool,
    last_percent: Option<u32>,
}

impl<W: Write> LineRenderer<W> {
    /// Create a renderer.
    ///
    /// Control sequences are only written when `interactive` is set, which
    /// should mean `out` is a real terminal.
    pub fn new(label: impl Into<String>, out: W, interactive: bool) -> Self {
        Self {
            label: label.into(),
            out,
            width: DEFAULT_BAR_WIDTH,
            interactive,
            cursor_hidden: false,
            last_percent: None,
        }
    }

    /// Set the bar width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    fn rewind(&mut self) -> io::Result<()> {
        self.out.write_all(b"\r")?;
        queue!(self.out, Clear(ClearType::CurrentLine))
    }
}

impl<W: Write> ProgressView for LineRenderer<W> {
    fn set_fraction(&mut self, fraction: f64) -> io::Result<()> {
        let line = render_line(&self.label, fraction, self.width);

        if self.interactive {
            if !self.cursor_hidden {
                queue!(self.out, Hide)?;
                self.cursor_hidden = true;
            }
            self.rewind()?;
            self.out.write_all(line.as_bytes())?;
        } else {
            let shown = percent(fraction);
            if self.last_percent == Some(shown) {
                return Ok(());
            }
            self.last_percent = Some(shown);
            writeln!(self.out, "{}", line)?;
        }
        self.out.flush()
    }

    fn finish(&mut self, state: FinishState) -> io::Result<()> {
        if self.interactive {
            self.rewind()?;
            if let Some(word) = state.word() {
                // Raw mode may still be on, so return the carriage explicitly.
                write!(self.out, "{}...{}\r\n", self.label, word)?;
            }
            queue!(self.out, Show)?;
            self.cursor_hidden = false;
        } else if let Some(word) = state.word() {
            writeln!(self.out, "{}...{}", self.label, word)?;
        }
        self.out.flush()
    }
}
