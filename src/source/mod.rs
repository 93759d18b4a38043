//! Source module: where progress records come from.
//!
//! A source is any buffered async byte stream carrying line-delimited JSON
//! records. Dropping it closes the underlying connection, which is how a
//! cancelled pull tears the transfer down.
//!
//! # Overview
//!
//! - `config` - Engine connection settings read from the environment
//! - `client` - HTTP client with tracing and optional retry middleware
//! - `engine` - Starting a pull on a container engine
//! - `replay` - Replaying a recorded stream from a file or stdin
//!
//! # Examples
//!
//! ```rust,no_run
//! use pullbar::source::open_replay;
//! use std::path::Path;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<(), pullbar::Error> {
//! let source = open_replay(Path::new("pull.jsonl"), Some(Duration::from_millis(50))).await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod engine;
pub mod replay;

pub use client::create_http_client;
pub use config::{EngineConfig, DEFAULT_ENGINE_HOST};
pub use engine::{pull_path, split_image_ref, EngineClient, EngineHost};
pub use replay::{open_replay, paced};

use tokio::io::AsyncBufRead;

/// A boxed stream of line-delimited JSON records.
pub type RecordSource = Box<dyn AsyncBufRead + Send + Unpin>;
