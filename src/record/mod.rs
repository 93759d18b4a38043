//! Record module turning the raw engine stream into typed progress events.
//!
//! The engine emits one loosely structured JSON object per line. This module
//! splits the stream into records and decodes each one into a
//! [`ProgressEvent`], tolerating missing or wrong-typed fields.
//!
//! # Overview
//!
//! - `event` - The [`ProgressEvent`] type and its status classification helpers
//! - `decode` - Best-effort conversion of one JSON record into an event
//! - `reader` - Line-delimited JSON reader over any async buffered source
//!
//! # Examples
//!
//! ```rust
//! use pullbar::record::decode;
//! use serde_json::json;
//!
//! let record = json!({
//!     "id": "a1b2",
//!     "status": "Downloading",
//!     "progressDetail": { "current": 512.7, "total": 1024 }
//! });
//! let event = decode(&record).unwrap();
//! assert_eq!(event.current, 512);
//! assert_eq!(event.total, 1024);
//! ```

pub mod decode;
pub mod event;
pub mod reader;

pub use decode::decode;
pub use event::ProgressEvent;
pub use reader::RecordReader;
