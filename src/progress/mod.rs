//! Progress module: layer tracking, aggregation and rendering.
//!
//! The tracker and aggregator know nothing about drawing. Renderers only see
//! the [`ProgressView`] capability, so the plain escape-sequence renderer and
//! the indicatif widget share every bit of merge and clamp logic.
//!
//! # Overview
//!
//! - `tracker` - Per-layer state table in first-seen order
//! - `aggregate` - Overall fraction, completion detection and monotonic clamp
//! - `view` - The [`ProgressView`] trait and [`FinishState`]
//! - `line` - Plain single-line renderer
//! - `style` - Styling options for the widget renderer
//! - `display` - Widget renderer backed by indicatif
//!
//! # Examples
//!
//! ```rust
//! use pullbar::progress::{Aggregator, LayerTracker};
//! use pullbar::record::ProgressEvent;
//!
//! let mut tracker = LayerTracker::new();
//! let mut aggregator = Aggregator::new();
//!
//! tracker.observe(&ProgressEvent::new("a", "Downloading", 50, 100));
//! tracker.observe(&ProgressEvent::new("b", "Downloading", 0, 200));
//! let aggregate = aggregator.compute(&tracker);
//! assert!((aggregate.fraction - 50.0 / 300.0).abs() < 1e-9);
//! assert!(!aggregate.all_done);
//! ```

pub mod aggregate;
pub(crate) mod display;
pub mod line;
pub(crate) mod style;
pub mod tracker;
pub mod view;

pub use aggregate::{Aggregate, Aggregator};
pub use display::BarRenderer;
pub use line::{ascii_bar, render_line, LineRenderer, DEFAULT_BAR_WIDTH};
pub use style::ProgressBarOpts;
pub use tracker::{LayerState, LayerTracker};
pub use view::{FinishState, ProgressView};
