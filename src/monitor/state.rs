//! Per-event state machine of a pull.
//!
//! [`PullProgress`] folds decoded events into the tracker and aggregator and
//! says what the monitor should do next. It is synchronous and knows nothing
//! about sources, renderers or cancellation.

use crate::progress::{Aggregate, Aggregator, LayerTracker};
use crate::record::ProgressEvent;
use tracing::debug;

/// What to do after observing one event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Nothing to show.
    Skip,
    /// Show this fraction.
    Render(f64),
    /// The pull is finished.
    Complete,
}

/// Tracker and aggregator of one pull.
#[derive(Debug, Default)]
pub struct PullProgress {
    tracker: LayerTracker,
    aggregator: Aggregator,
}

impl PullProgress {
    /// Start a new pull at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the layer tracker.
    pub fn tracker(&self) -> &LayerTracker {
        &self.tracker
    }

    /// Current byte totals without touching the rendered floor.
    pub fn aggregate(&self) -> Aggregate {
        Aggregate::measure(&self.tracker)
    }

    /// Observe one event.
    pub fn observe(&mut self, event: &ProgressEvent) -> Step {
        if event.is_pulling_header() {
            return Step::Skip;
        }

        if event.is_global() {
            if event.is_terminal_header() {
                debug!(status = %event.status, "pull finished by global status");
                return Step::Complete;
            }
            let aggregate = self.aggregator.compute(&self.tracker);
            return Step::Render(aggregate.fraction);
        }

        self.tracker.observe(event);
        let aggregate = self.aggregator.compute(&self.tracker);
        if aggregate.all_done {
            debug!(layers = self.tracker.len(), "every layer finished");
            return Step::Complete;
        }
        Step::Render(aggregate.fraction)
    }

    /// Mark the pull finished and return the final fraction, always 1.0.
    pub fn complete(&mut self) -> f64 {
        self.aggregator.force_complete()
    }
}
