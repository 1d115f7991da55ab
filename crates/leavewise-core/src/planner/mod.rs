//! Vacation planning pipeline.
//!
//! This module provides:
//! - Free-day merging (holidays + weekends)
//! - Vacation-window extraction (maximal runs of consecutive free days)
//! - Leave-bridging suggestions between adjacent windows

mod free_days;
mod span;
mod suggestion;

pub use free_days::FreeDaySet;
pub use span::{extract_spans, FreeSpan, SpanExtractor, DEFAULT_MIN_WINDOW_LENGTH};
pub use suggestion::{
    generate_suggestions, Suggestion, SuggestionEngine, DEFAULT_MAX_LEAVE_DAYS,
};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;
use crate::weekend::enumerate_weekends;

/// Planner thresholds, passed explicitly into [`plan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Minimum run length for a vacation window (days)
    pub min_window_length: i64,
    /// Maximum leave days a single bridge may cost
    pub max_leave_days: i64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            min_window_length: DEFAULT_MIN_WINDOW_LENGTH,
            max_leave_days: DEFAULT_MAX_LEAVE_DAYS,
        }
    }
}

/// Result of a planning run: vacation windows that cost no leave, and
/// suggested bridges between them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationPlan {
    pub windows: Vec<FreeSpan>,
    pub suggestions: Vec<Suggestion>,
}

/// Run the full pipeline for a holiday list over an inclusive date range.
///
/// Weekends in `[start, end]` are merged with `holidays`, maximal runs of
/// consecutive free days at least `min_window_length` long become windows,
/// and adjacent windows with a cheap enough gap become suggestions.
///
/// Empty input is not an error: no holidays and no qualifying runs simply
/// produce an empty plan.
///
/// # Errors
/// `PlanError::InvalidDateRange` if `start > end`.
pub fn plan(
    holidays: &[NaiveDate],
    start: NaiveDate,
    end: NaiveDate,
    config: &PlannerConfig,
) -> Result<VacationPlan, PlanError> {
    if start > end {
        return Err(PlanError::InvalidDateRange { start, end });
    }

    let weekends = enumerate_weekends(start, end);
    let free_days = FreeDaySet::build(holidays, &weekends);
    let windows = SpanExtractor::new()
        .with_min_window(config.min_window_length)
        .extract(&free_days);
    // Windows come out of the extractor ordered and gap-separated, so the
    // engine's precondition check cannot fire here.
    let suggestions = SuggestionEngine::new()
        .with_max_leave(config.max_leave_days)
        .generate(&windows)?;

    Ok(VacationPlan {
        windows,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_plan_rejects_inverted_range() {
        let err = plan(&[], date(2023, 6, 1), date(2023, 5, 1), &PlannerConfig::default());
        assert!(matches!(err, Err(PlanError::InvalidDateRange { .. })));
    }

    #[test]
    fn test_plan_with_no_holidays_is_empty_not_an_error() {
        // Plain weekends never form a run of 3
        let result = plan(
            &[],
            date(2023, 5, 1),
            date(2023, 5, 31),
            &PlannerConfig::default(),
        )
        .unwrap();

        assert!(result.windows.is_empty());
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_plan_finds_long_weekend() {
        // Whit Monday 2023-05-29 extends the preceding weekend
        let result = plan(
            &[date(2023, 5, 29)],
            date(2023, 5, 1),
            date(2023, 5, 31),
            &PlannerConfig::default(),
        )
        .unwrap();

        assert_eq!(
            result.windows,
            vec![FreeSpan::new(date(2023, 5, 27), date(2023, 5, 29))]
        );
    }
}
