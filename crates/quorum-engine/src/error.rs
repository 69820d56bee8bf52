//! Error types for quorum-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    /// Interval construction with `start > end` or bounds outside the day.
    /// The message names the offending bound; values are never clamped.
    #[error("invalid interval: {0}")]
    InvalidInterval(String),
}

pub type Result<T> = std::result::Result<T, ScheduleError>;
