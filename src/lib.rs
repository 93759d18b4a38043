//! Pullbar renders a container image pull as one continuously updating
//! progress line in a terminal.
//!
//! Layers download concurrently and report progress out of order, some never
//! report a size and some only say "Already exists". Pullbar merges those
//! records into a single overall fraction that never moves backwards, decides
//! when the pull is really finished, and draws it in place on one line while
//! Escape or Ctrl-C cancels the pull cleanly.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use pullbar::monitor::MonitorBuilder;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let monitor = MonitorBuilder::new().build();
//! let outcome = monitor.pull("node:20").await;
//! if let Some(e) = outcome.error() {
//!     println!("Error: {}", e);
//! }
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`record`] - Decoding raw engine records into progress events
//! - [`progress`] - Layer tracking, aggregation and the renderers
//! - [`source`] - Engine client and recorded-stream replay
//! - [`terminal`] - Raw mode guard and keyboard watcher
//! - [`monitor`] - The controller tying everything together
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Shared utility functions

pub mod error;
pub mod monitor;
pub mod progress;
pub mod record;
pub mod source;
pub mod terminal;
pub mod utils;

pub use error::{Error, Result};
pub use monitor::{Monitor, MonitorBuilder, Outcome, RenderStyle};
pub use progress::{FinishState, LineRenderer, ProgressView};
pub use record::ProgressEvent;
pub use source::EngineConfig;
