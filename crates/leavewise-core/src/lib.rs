//! # Leavewise Core Library
//!
//! This library provides the core logic for the Leavewise vacation planner.
//! It takes a list of public-holiday dates and an inclusive date range, finds
//! the contiguous blocks of non-working days (holidays merged with weekends)
//! long enough to count as free vacation windows, and proposes which short
//! gaps between windows are worth bridging with a few days of paid leave.
//!
//! The library is a pure, synchronous computation over in-memory values: it
//! performs no I/O, holds no global state, and all of its types are immutable
//! once built, so results can be shared freely across threads. Fetching
//! holiday data and rendering or exporting results belong to the surrounding
//! program.
//!
//! ## Key Components
//!
//! - [`enumerate_weekends`]: every Saturday and Sunday in a date range
//! - [`FreeDaySet`]: holidays and weekends merged into one ordered set
//! - [`SpanExtractor`]: maximal runs of consecutive free days
//! - [`SuggestionEngine`]: leave-bridging proposals between adjacent windows
//! - [`plan`]: the full pipeline in one call

pub mod error;
pub mod planner;
pub mod weekend;

pub use error::PlanError;
pub use planner::{
    extract_spans, generate_suggestions, plan, FreeDaySet, FreeSpan, PlannerConfig,
    SpanExtractor, Suggestion, SuggestionEngine, VacationPlan,
    DEFAULT_MAX_LEAVE_DAYS, DEFAULT_MIN_WINDOW_LENGTH,
};
pub use weekend::enumerate_weekends;
