//! Typed progress events.

/// Statuses marking a layer as done for snapping purposes.
pub const DONE_STATUSES: [&str; 3] = ["Download complete", "Pull complete", "Already exists"];

/// Statuses a layer must reach for the whole pull to count as finished.
///
/// "Download complete" is missing on purpose: the layer still has to be
/// extracted after it.
pub const FINISHED_STATUSES: [&str; 2] = ["Pull complete", "Already exists"];

/// Lower-cased fragments of global status lines that end the pull.
const TERMINAL_HEADERS: [&str; 3] = ["digest:", "downloaded newer image", "image is up to date"];

/// One decoded progress record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressEvent {
    /// Layer identifier. Empty for top-level status lines.
    pub id: String,
    /// Free-text phase label.
    pub status: String,
    /// Bytes transferred so far, 0 when absent.
    pub current: i64,
    /// Declared size in bytes, 0 when unknown.
    pub total: i64,
}

impl ProgressEvent {
    /// Create a new [`ProgressEvent`].
    pub fn new(id: impl Into<String>, status: impl Into<String>, current: i64, total: i64) -> Self {
        Self {
            id: id.into(),
            status: status.into(),
            current,
            total,
        }
    }

    /// Whether the event is a top-level line not tied to any layer.
    pub fn is_global(&self) -> bool {
        self.id.is_empty()
    }

    /// Whether the event is the redundant "Pulling from ..." header.
    pub fn is_pulling_header(&self) -> bool {
        self.status.to_lowercase().contains("pulling from")
    }

    /// Whether a global status line announces the end of the whole pull.
    pub fn is_terminal_header(&self) -> bool {
        let status = self.status.to_lowercase();
        TERMINAL_HEADERS.iter().any(|phrase| status.contains(phrase))
    }
}

/// Whether `status` marks a layer as done.
pub fn is_done_status(status: &str) -> bool {
    DONE_STATUSES.contains(&status)
}

/// Whether `status` counts toward the whole pull being finished.
pub fn is_finished_status(status: &str) -> bool {
    FINISHED_STATUSES.contains(&status)
}
