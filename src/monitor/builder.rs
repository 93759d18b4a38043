//! Builder pattern implementation for creating [`Monitor`] instances.
//!
//! # Examples
//!
//! ```rust
//! use pullbar::monitor::{MonitorBuilder, RenderStyle};
//!
//! let monitor = MonitorBuilder::new()
//!     .style(RenderStyle::Bar)
//!     .bar_width(30)
//!     .host("tcp://127.0.0.1:2375")
//!     .build();
//! assert_eq!(monitor.config().bar_width, 30);
//! ```

use super::config::{MonitorConfig, RenderStyle};
use super::monitor::Monitor;
use crate::source::EngineConfig;

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use std::path::PathBuf;
use std::time::Duration;

/// A builder used to create a [`Monitor`].
#[derive(Default)]
pub struct MonitorBuilder {
    config: MonitorConfig,
}

impl MonitorBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        MonitorBuilder::default()
    }

    /// Convenience function for runs without a keyboard: no raw mode, no watcher.
    pub fn headless() -> Self {
        MonitorBuilder::default().watch_input(false)
    }

    /// Set the bar width in columns.
    pub fn bar_width(mut self, width: usize) -> Self {
        self.config.bar_width = width;
        self
    }

    /// Set the renderer.
    pub fn style(mut self, style: RenderStyle) -> Self {
        self.config.style = style;
        self
    }

    /// Enable or disable raw mode and the keyboard watcher.
    pub fn watch_input(mut self, watch: bool) -> Self {
        self.config.watch_input = watch;
        self
    }

    /// Set the keyboard watcher poll interval.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    /// Replace the whole engine configuration.
    pub fn engine(mut self, engine: EngineConfig) -> Self {
        self.config.engine = engine;
        self
    }

    /// Set the engine host, e.g. `unix:///run/docker.sock` or `tcp://10.0.0.2:2375`.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.engine.host = host.into();
        self
    }

    /// Pin the engine API version.
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.config.engine.api_version = Some(version.into());
        self
    }

    /// Set the number of retries of the pull request.
    pub fn retries(mut self, retries: u32) -> Self {
        self.config.engine.retries = retries;
        self
    }

    /// Add headers to the pull request.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be merged into a single one.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.config
            .engine
            .headers
            .get_or_insert_with(HeaderMap::new)
            .extend(headers);
        self
    }

    /// Add one header to the pull request.
    ///
    /// ```
    /// use pullbar::monitor::MonitorBuilder;
    /// use reqwest::header::HeaderValue;
    ///
    /// let auth = HeaderValue::from_static("eyJ1c2VybmFtZSI6ImEifQ==");
    /// let monitor = MonitorBuilder::new().header("x-registry-auth", auth).build();
    /// ```
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        self.config
            .engine
            .headers
            .get_or_insert_with(HeaderMap::new)
            .insert(name, value);
        self
    }

    /// Replay a recorded stream instead of asking an engine.
    pub fn replay(mut self, path: PathBuf) -> Self {
        self.config.replay = Some(path);
        self
    }

    /// Delay between replayed records.
    pub fn replay_delay(mut self, delay: Duration) -> Self {
        self.config.replay_delay = Some(delay);
        self
    }

    /// Create the [`Monitor`] with the specified options.
    pub fn build(self) -> Monitor {
        Monitor::new(self.config)
    }
}
