//! Folding the tracker into one overall fraction.
//!
//! The [`Aggregator`] owns a single piece of state: the last fraction handed
//! to a renderer. Everything else is recomputed from the [`LayerTracker`] on
//! every event.

use super::tracker::LayerTracker;
use crate::record::event::is_finished_status;

/// Fractions at or above this are held back while the pull is unfinished.
const NEARLY_COMPLETE: f64 = 0.999;

/// Ceiling for the fraction of an unfinished pull.
const UNFINISHED_CEILING: f64 = 0.99;

/// Byte totals over all layers with a known size.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Aggregate {
    /// Sum of `current` over layers with a known size.
    pub sum_current: i64,
    /// Sum of `total` over layers with a known size.
    pub sum_total: i64,
    /// `sum_current / sum_total`, or 0 when no size is known.
    pub fraction: f64,
    /// Every tracked layer reached "Pull complete" or "Already exists".
    pub all_done: bool,
}

impl Aggregate {
    /// Measure the tracker without any clamping.
    pub fn measure(tracker: &LayerTracker) -> Self {
        let mut sum_current = 0;
        let mut sum_total = 0;
        let mut all_done = !tracker.is_empty();

        for (_, layer) in tracker.iter() {
            if !is_finished_status(&layer.status) {
                all_done = false;
            }
            if layer.total > 0 {
                sum_current += layer.current;
                sum_total += layer.total;
            }
        }

        let fraction = if sum_total > 0 {
            sum_current as f64 / sum_total as f64
        } else {
            0.0
        };

        Self {
            sum_current,
            sum_total,
            fraction,
            all_done,
        }
    }
}

/// Turns tracker snapshots into the fractions shown to the user.
///
/// Shown fractions never decrease, and never reach 1.0 before the pull is
/// confirmed finished.
#[derive(Debug, Default)]
pub struct Aggregator {
    last_rendered: f64,
}

impl Aggregator {
    /// Create an aggregator starting at 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The last fraction handed out.
    pub fn last_rendered(&self) -> f64 {
        self.last_rendered
    }

    /// Compute the aggregate and the fraction to render.
    ///
    /// The returned [`Aggregate::fraction`] is the clamped value, which is
    /// also remembered as the new floor.
    pub fn compute(&mut self, tracker: &LayerTracker) -> Aggregate {
        let mut aggregate = Aggregate::measure(tracker);

        let mut fraction = aggregate.fraction;
        if !aggregate.all_done && fraction >= NEARLY_COMPLETE {
            fraction = UNFINISHED_CEILING;
        }
        fraction = fraction.max(self.last_rendered);

        self.last_rendered = fraction;
        aggregate.fraction = fraction;
        aggregate
    }

    /// Jump straight to 1.0 once the pull is known to be finished.
    pub fn force_complete(&mut self) -> f64 {
        self.last_rendered = 1.0;
        self.last_rendered
    }
}
