use clap::{Parser, ValueEnum};
use pullbar::monitor::{MonitorBuilder, RenderStyle};
use pullbar::Monitor;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Image pulled when none is given.
const DEFAULT_IMAGE: &str = "node:20";

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Style {
    /// Plain ASCII bar
    Line,
    /// indicatif widget
    Bar,
}

impl From<Style> for RenderStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Line => RenderStyle::Line,
            Style::Bar => RenderStyle::Bar,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "pullbar", version, about = "Pull a container image behind a single progress line")]
struct Cli {
    /// Image reference to pull
    image: Option<String>,

    /// Engine host, e.g. unix:///var/run/docker.sock or tcp://127.0.0.1:2375 [default: $DOCKER_HOST]
    #[arg(long)]
    host: Option<String>,

    /// Engine API version [default: $DOCKER_API_VERSION]
    #[arg(long)]
    api_version: Option<String>,

    /// Progress renderer
    #[arg(long, value_enum, default_value_t = Style::Line)]
    style: Style,

    /// Bar width in columns
    #[arg(long, default_value_t = pullbar::progress::DEFAULT_BAR_WIDTH)]
    width: usize,

    /// Replay a recorded JSON stream instead of pulling; `-` reads stdin
    #[arg(long, value_name = "FILE")]
    replay: Option<PathBuf>,

    /// Delay between replayed records, in milliseconds
    #[arg(long, default_value_t = 0)]
    replay_delay_ms: u64,

    /// Do not switch the terminal to raw mode or watch for cancel keys
    #[arg(long)]
    no_input: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr and only when asked for, so the progress line stays clean.
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let cli = Cli::parse();
    let image = cli
        .image
        .as_deref()
        .map(str::trim)
        .filter(|image| !image.is_empty())
        .unwrap_or(DEFAULT_IMAGE)
        .to_owned();

    let mut builder = MonitorBuilder::new()
        .style(cli.style.into())
        .bar_width(cli.width)
        .watch_input(!cli.no_input);
    if let Some(host) = cli.host {
        builder = builder.host(host);
    }
    if let Some(version) = cli.api_version {
        builder = builder.api_version(version);
    }
    if let Some(path) = cli.replay {
        builder = builder
            .replay(path)
            .replay_delay(Duration::from_millis(cli.replay_delay_ms));
    }
    let monitor: Monitor = builder.build();

    let outcome = monitor.pull(&image).await;
    if let Some(e) = outcome.error() {
        println!("Error: {}", e);
    }
    ExitCode::from(outcome.exit_code())
}
