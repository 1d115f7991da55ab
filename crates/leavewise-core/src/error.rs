//! Error types for leavewise-core.
//!
//! The planner is total over well-formed input; these errors only cover
//! precondition violations at the public API boundary.

use chrono::NaiveDate;
use thiserror::Error;

/// Planner error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// The queried date range is inverted
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    /// A span sequence handed to the suggestion engine is not strictly
    /// ordered and gap-separated
    #[error("Span at index {index} ends on {end} but the next span starts on {next_start}")]
    UnorderedSpans {
        index: usize,
        end: NaiveDate,
        next_start: NaiveDate,
    },

    /// A span with `end` before `start`
    #[error("Span at index {index} is inverted: {start} - {end}")]
    InvertedSpan {
        index: usize,
        start: NaiveDate,
        end: NaiveDate,
    },
}

/// Result type alias for PlanError
pub type Result<T, E = PlanError> = std::result::Result<T, E>;
