//! Monitor module containing the pull controller, its builder and configuration.
//!
//! # Overview
//!
//! - `monitor` - The [`Monitor`] controller: pump loop, cancellation and finalization
//! - `builder` - [`MonitorBuilder`] for flexible configuration using the builder pattern
//! - `config` - [`MonitorConfig`] defaults and [`RenderStyle`]
//! - `state` - [`PullProgress`], the synchronous per-event state machine
//! - `outcome` - [`Outcome`] of a run and its exit code
//!
//! # Examples
//!
//! ```rust,no_run
//! use pullbar::monitor::MonitorBuilder;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let outcome = MonitorBuilder::new().build().pull("alpine:3.20").await;
//! std::process::exit(outcome.exit_code().into());
//! # }
//! ```

pub mod builder;
pub mod config;
pub mod monitor;
pub mod outcome;
pub mod state;

pub use builder::MonitorBuilder;
pub use config::{MonitorConfig, RenderStyle};
pub use monitor::Monitor;
pub use outcome::Outcome;
pub use state::{PullProgress, Step};
