//! Replays a recorded pull of `node:20` on the terminal.
//!
//! Run with `cargo run --example replay`, optionally passing another recording
//! and a per-record delay in milliseconds. Press Esc to cancel.

use color_eyre::{eyre::Report, Result};
use pullbar::monitor::{MonitorBuilder, RenderStyle};
use std::path::PathBuf;
use std::time::Duration;

const RECORDING: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/pull-node-20.jsonl");

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);
    let recording = args.next().map(PathBuf::from).unwrap_or_else(|| RECORDING.into());
    let delay_ms = match args.next() {
        Some(ms) => ms.parse::<u64>()?,
        None => 120,
    };
    let style = match std::env::var("PULLBAR_STYLE").as_deref() {
        Ok("bar") => RenderStyle::Bar,
        _ => RenderStyle::Line,
    };

    let monitor = MonitorBuilder::new()
        .style(style)
        .replay(recording)
        .replay_delay(Duration::from_millis(delay_ms))
        .build();

    let outcome = monitor.pull("node:20").await;
    match outcome.error() {
        Some(e) => Err(Report::msg(e.to_string())),
        None => Ok(()),
    }
}
