//! Configuration structures and defaults for the monitor.

use crate::progress::DEFAULT_BAR_WIDTH;
use crate::source::EngineConfig;
use crate::terminal::DEFAULT_POLL_INTERVAL;

use std::path::PathBuf;
use std::time::Duration;

/// Which renderer draws the progress line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderStyle {
    /// Plain ASCII bar drawn with control sequences.
    #[default]
    Line,
    /// Widget bar drawn by indicatif.
    Bar,
}

/// Configuration structure for the monitor.
#[derive(Clone, Debug)]
pub struct MonitorConfig {
    /// Bar width in columns.
    pub bar_width: usize,
    /// Renderer used for the progress line.
    pub style: RenderStyle,
    /// Put the terminal in raw mode and watch for cancel keys.
    pub watch_input: bool,
    /// Time between cancellation checks of the keyboard watcher.
    pub poll_interval: Duration,
    /// How to reach the container engine.
    pub engine: EngineConfig,
    /// Read records from this recording instead of an engine. `-` is stdin.
    pub replay: Option<PathBuf>,
    /// Delay between replayed records.
    pub replay_delay: Option<Duration>,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            bar_width: DEFAULT_BAR_WIDTH,
            style: RenderStyle::default(),
            watch_input: true,
            poll_interval: DEFAULT_POLL_INTERVAL,
            engine: EngineConfig::from_env(),
            replay: None,
            replay_delay: None,
        }
    }
}
