//! Error handling for pullbar.
//!
//! This module provides centralized error handling for everything that can
//! abort a pull run. A cancelled run is not an error but a clean
//! [`Outcome`](crate::monitor::Outcome).

use thiserror::Error;

/// Errors that can happen while monitoring a pull.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other categories.
    #[error("Internal error: {0}")]
    Internal(String),

    /// The connection to the container engine could not be set up.
    ///
    /// Covers unreachable hosts, malformed host strings and non-success
    /// responses to the pull request itself.
    #[error("{0}")]
    SourceConstruction(String),

    /// The record stream is malformed beyond recovery.
    ///
    /// A missing or wrong-typed field is not a decode error; only a stream
    /// that cannot be split into JSON records is.
    #[error("decoding progress stream: {0}")]
    Decode(String),

    /// The engine reported a failure inside an otherwise well-formed record.
    #[error("{0}")]
    InBand(String),

    /// The record stream ended before the pull was confirmed finished.
    #[error("progress stream ended before the pull completed")]
    Truncated,
}

impl Error {
    pub(crate) fn source_construction(msg: impl std::fmt::Display) -> Self {
        Error::SourceConstruction(msg.to_string())
    }
}

/// Result type alias for operations that can fail with a pullbar error.
pub type Result<T> = std::result::Result<T, Error>;
