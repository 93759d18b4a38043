//! Shared utility functions.
//!
//! - [`bytes`] - Human readable byte counts for log output

pub mod bytes;

// Re-export commonly used utilities
pub use bytes::human_bytes;
