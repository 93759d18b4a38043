//! How a monitored pull ended.

use crate::error::Error;
use crate::progress::FinishState;

/// Result of one monitored pull.
#[derive(Debug)]
pub enum Outcome {
    /// The pull completed.
    Done,
    /// The user or a process interrupt cancelled the pull.
    Cancelled,
    /// The pull failed.
    Failed(Error),
}

impl Outcome {
    /// Process exit code: 0 for done or cancelled, 1 for failures.
    pub fn exit_code(&self) -> u8 {
        match self {
            Outcome::Done | Outcome::Cancelled => 0,
            Outcome::Failed(_) => 1,
        }
    }

    /// The final frame matching this outcome.
    pub fn finish_state(&self) -> FinishState {
        match self {
            Outcome::Done => FinishState::Done,
            Outcome::Cancelled => FinishState::Cancelled,
            Outcome::Failed(_) => FinishState::Failed,
        }
    }

    /// Get the error of a failed pull.
    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Failed(e) => Some(e),
            _ => None,
        }
    }
}
