//! The pull controller.
//!
//! A [`Monitor`] pumps records through decoding, tracking and aggregation into
//! a [`ProgressView`]. Every run goes through one of three phases before it is
//! finalized:
//!
//! - `Completing` - a global terminal status or every layer finished; the bar
//!   jumps to 100% and the line reads DONE
//! - `Cancelling` - the shared token fired; the source is dropped and the line
//!   reads CANCELLED
//! - `Failing` - a broken stream, an in-band error, or a stream that ended
//!   before the pull finished; the line is cleared and the error is handed back
//!
//! Finalization happens exactly once per run, whichever phase led to it.
//!
//! # Examples
//!
//! ```rust
//! use pullbar::monitor::{MonitorBuilder, Outcome};
//! use pullbar::progress::LineRenderer;
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let stream: &[u8] = br#"{"status":"Status: Image is up to date for node:20"}
//! "#;
//! let monitor = MonitorBuilder::headless().build();
//! let mut out = Vec::new();
//! let mut view = LineRenderer::new("Pulling node:20", &mut out, false);
//! let outcome = monitor.run(stream, &mut view, &CancellationToken::new()).await;
//! assert!(matches!(outcome, Outcome::Done));
//! # }
//! ```

use super::config::{MonitorConfig, RenderStyle};
use super::outcome::Outcome;
use super::state::{PullProgress, Step};
use crate::error::{Error, Result};
use crate::progress::{BarRenderer, FinishState, LineRenderer, ProgressBarOpts, ProgressView};
use crate::record::{decode, RecordReader};
use crate::source::{open_replay, EngineClient, RecordSource};
use crate::terminal::{InputWatcher, TerminalGuard, TerminalKeys};
use crate::utils::human_bytes;

use std::fmt;
use std::io::{self, IsTerminal};
use tokio::io::AsyncBufRead;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

/// Where a run stands just before it is finalized.
enum Phase {
    Completing,
    Cancelling,
    Failing(Error),
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Completing => f.write_str("Completing"),
            Phase::Cancelling => f.write_str("Cancelling"),
            Phase::Failing(e) => write!(f, "Failing({})", e),
        }
    }
}

/// Represents the pull controller.
///
/// A monitor can be created via its builder:
///
/// ```rust
/// use pullbar::monitor::MonitorBuilder;
///
/// let m = MonitorBuilder::new().build();
/// ```
#[derive(Clone, Debug)]
pub struct Monitor {
    config: MonitorConfig,
}

impl Monitor {
    /// Creates a new Monitor with the given configuration.
    pub(crate) fn new(config: MonitorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// The label shown in front of the bar.
    pub fn label(image: &str) -> String {
        format!("Pulling {}", image)
    }

    /// Pull `image` with the full terminal lifecycle.
    ///
    /// Acquires raw mode, starts the keyboard watcher and a process interrupt
    /// listener, opens the configured source and pumps it into a renderer on
    /// stdout. The terminal is restored before this returns, on every path.
    pub async fn pull(&self, image: &str) -> Outcome {
        let cancel = CancellationToken::new();
        // Stops the watcher thread even if the pump unwinds.
        let _stop_watcher = cancel.clone().drop_guard();
        let mut guard = if self.config.watch_input {
            TerminalGuard::acquire()
        } else {
            TerminalGuard::inert()
        };
        let watcher = self
            .config
            .watch_input
            .then(|| InputWatcher::spawn(TerminalKeys, cancel.clone(), self.config.poll_interval));
        let interrupt = tokio::spawn(interrupt_on_signal(cancel.clone()));

        let mut view = self.stdout_view(&Self::label(image));
        let mut progress = PullProgress::new();

        let phase = tokio::select! {
            biased;
            _ = cancel.cancelled() => Phase::Cancelling,
            opened = self.open_source(image) => match opened {
                Ok(source) => {
                    let mut records = RecordReader::new(source);
                    self.pump(&mut records, &mut progress, view.as_mut(), &cancel).await
                }
                Err(e) => Phase::Failing(e),
            },
        };
        let outcome = self.finalize(phase, &mut progress, view.as_mut());

        // Stop the watcher and the signal listener before giving the terminal back.
        cancel.cancel();
        if let Some(watcher) = watcher {
            watcher.join().await;
        }
        let _ = interrupt.await;
        guard.restore();

        outcome
    }

    /// Pump `source` into `view` until the pull completes, fails or `cancel` fires.
    ///
    /// The source is dropped before the final frame is drawn.
    pub async fn run<R>(&self, source: R, view: &mut dyn ProgressView, cancel: &CancellationToken) -> Outcome
    where
        R: AsyncBufRead + Unpin,
    {
        let mut progress = PullProgress::new();
        let phase = {
            let mut records = RecordReader::new(source);
            self.pump(&mut records, &mut progress, view, cancel).await
        };
        self.finalize(phase, &mut progress, view)
    }

    async fn open_source(&self, image: &str) -> Result<RecordSource> {
        match self.config.replay {
            Some(ref path) => open_replay(path, self.config.replay_delay).await,
            None => EngineClient::new(self.config.engine.clone())?.pull(image).await,
        }
    }

    fn stdout_view(&self, label: &str) -> Box<dyn ProgressView + Send> {
        let interactive = io::stdout().is_terminal();
        if uses_widget(self.config.style, interactive) {
            Box::new(BarRenderer::new(
                label,
                ProgressBarOpts::with_width(self.config.bar_width),
            ))
        } else {
            Box::new(LineRenderer::new(label, io::stdout(), interactive).with_width(self.config.bar_width))
        }
    }

    async fn pump<R>(
        &self,
        records: &mut RecordReader<R>,
        progress: &mut PullProgress,
        view: &mut dyn ProgressView,
        cancel: &CancellationToken,
    ) -> Phase
    where
        R: AsyncBufRead + Unpin,
    {
        loop {
            let next = tokio::select! {
                biased;
                _ = cancel.cancelled() => return Phase::Cancelling,
                next = records.next_record() => next,
            };

            let record = match next {
                Ok(Some(record)) => record,
                Ok(None) => {
                    debug!(records = records.records(), "progress stream ended");
                    if progress.aggregate().all_done {
                        return Phase::Completing;
                    }
                    return Phase::Failing(Error::Truncated);
                }
                // A stream torn down by cancellation is not a failure.
                Err(_) if cancel.is_cancelled() => return Phase::Cancelling,
                Err(e) => return Phase::Failing(e),
            };

            let event = match decode(&record) {
                Ok(event) => event,
                Err(e) => return Phase::Failing(e),
            };

            match progress.observe(&event) {
                Step::Skip => {}
                Step::Render(fraction) => show(view, fraction),
                Step::Complete => return Phase::Completing,
            }
        }
    }

    fn finalize(&self, phase: Phase, progress: &mut PullProgress, view: &mut dyn ProgressView) -> Outcome {
        debug!(?phase, layers = progress.tracker().len(), "finalizing pull");

        let outcome = match phase {
            Phase::Completing => {
                let aggregate = progress.aggregate();
                debug!(
                    "pulled {} of {} in known-size layers",
                    human_bytes(aggregate.sum_current),
                    human_bytes(aggregate.sum_total)
                );
                show(view, progress.complete());
                Outcome::Done
            }
            Phase::Cancelling => Outcome::Cancelled,
            Phase::Failing(e) => Outcome::Failed(e),
        };

        let state: FinishState = outcome.finish_state();
        if let Err(e) = view.finish(state) {
            warn!("failed to draw final frame: {}", e);
        }
        outcome
    }
}

/// The widget bar only draws on a terminal; anywhere else the plain renderer
/// still prints percentages and the final word.
fn uses_widget(style: RenderStyle, interactive: bool) -> bool {
    style == RenderStyle::Bar && interactive
}

fn show(view: &mut dyn ProgressView, fraction: f64) {
    if let Err(e) = view.set_fraction(fraction) {
        warn!("failed to draw progress: {}", e);
    }
}

/// Cancel on a process interrupt, or return once the token fires elsewhere.
async fn interrupt_on_signal(cancel: CancellationToken) {
    tokio::select! {
        _ = cancel.cancelled() => {}
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => {
                debug!("interrupt received");
                cancel.cancel();
            }
            Err(e) => debug!("cannot listen for interrupts: {}", e),
        },
    }
}
