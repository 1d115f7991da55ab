//! Leave-bridging suggestions between adjacent vacation windows.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

use super::span::FreeSpan;

/// Default cap on the number of leave days a bridge may cost.
pub const DEFAULT_MAX_LEAVE_DAYS: i64 = 5;

/// A proposal to take `leave_days` of paid leave to fuse two adjacent
/// vacation windows into one contiguous block of `total_days` off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Start of the earlier window
    pub start: NaiveDate,
    /// End of the later window
    pub end: NaiveDate,
    /// Working days strictly between the two windows
    pub leave_days: i64,
    /// Total contiguous days off if the leave is taken
    pub total_days: i64,
}

/// Engine that proposes bridges between consecutive vacation windows.
pub struct SuggestionEngine {
    /// Maximum leave days a single bridge may cost
    max_leave_days: i64,
}

impl SuggestionEngine {
    /// Create an engine with the default cap (5 leave days).
    pub fn new() -> Self {
        Self {
            max_leave_days: DEFAULT_MAX_LEAVE_DAYS,
        }
    }

    /// Set the leave-day cap.
    pub fn with_max_leave(mut self, days: i64) -> Self {
        self.max_leave_days = days;
        self
    }

    /// Examine each consecutive pair of windows and propose bridging the
    /// gap where it is cheap enough and worth it.
    ///
    /// A pair is skipped when the gap costs more than `max_leave_days`, or
    /// when the fused block would gain no more than one day over the leave
    /// spent. Zero or one input window yields no suggestions.
    ///
    /// # Errors
    /// `PlanError` if `spans` is not a strictly ascending, gap-separated
    /// sequence; malformed input is rejected rather than turned into a
    /// bogus suggestion.
    pub fn generate(&self, spans: &[FreeSpan]) -> Result<Vec<Suggestion>, PlanError> {
        for (i, span) in spans.iter().enumerate() {
            if span.end < span.start {
                return Err(PlanError::InvertedSpan {
                    index: i,
                    start: span.start,
                    end: span.end,
                });
            }
        }

        let mut suggestions = Vec::new();

        for (i, pair) in spans.windows(2).enumerate() {
            let (current, next) = (pair[0], pair[1]);
            if next.start <= current.end {
                return Err(PlanError::UnorderedSpans {
                    index: i,
                    end: current.end,
                    next_start: next.start,
                });
            }

            let leave_days = (next.start - current.end).num_days() - 1;
            if leave_days > self.max_leave_days {
                continue;
            }

            let total_days = (next.end - current.start).num_days() + 1;
            // At least two bonus days beyond the leave spent
            if total_days - leave_days > 1 {
                suggestions.push(Suggestion {
                    start: current.start,
                    end: next.end,
                    leave_days,
                    total_days,
                });
            }
        }

        Ok(suggestions)
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to generate suggestions with the default cap.
pub fn generate_suggestions(spans: &[FreeSpan]) -> Result<Vec<Suggestion>, PlanError> {
    SuggestionEngine::new().generate(spans)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn span(start: NaiveDate, end: NaiveDate) -> FreeSpan {
        FreeSpan::new(start, end)
    }

    #[test]
    fn test_christmas_bridge() {
        let spans = vec![
            span(date(2023, 12, 23), date(2023, 12, 26)),
            span(date(2023, 12, 30), date(2024, 1, 1)),
        ];

        let suggestions = generate_suggestions(&spans).unwrap();
        assert_eq!(
            suggestions,
            vec![Suggestion {
                start: date(2023, 12, 23),
                end: date(2024, 1, 1),
                leave_days: 3,
                total_days: 10,
            }]
        );
    }

    #[test]
    fn test_only_consecutive_pairs_are_bridged() {
        let spans = vec![
            span(date(2023, 5, 22), date(2023, 5, 23)),
            span(date(2023, 5, 24), date(2023, 5, 25)),
            span(date(2023, 5, 27), date(2023, 5, 28)),
        ];

        let suggestions = generate_suggestions(&spans).unwrap();
        assert_eq!(suggestions.len(), 2);
        assert_eq!((suggestions[0].leave_days, suggestions[0].total_days), (0, 4));
        assert_eq!((suggestions[1].leave_days, suggestions[1].total_days), (1, 5));
    }

    #[test]
    fn test_expensive_gap_is_skipped() {
        let spans = vec![
            span(date(2023, 5, 6), date(2023, 5, 8)),
            span(date(2023, 5, 18), date(2023, 5, 21)),
        ];

        // 9 working days between the windows, over the default cap
        assert!(generate_suggestions(&spans).unwrap().is_empty());
    }

    #[test]
    fn test_bonus_days_equal_combined_window_lengths() {
        let spans = vec![
            span(date(2023, 6, 3), date(2023, 6, 3)),
            span(date(2023, 6, 5), date(2023, 6, 5)),
        ];

        let suggestions = generate_suggestions(&spans).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].leave_days, 1);
        assert_eq!(suggestions[0].total_days, 3);
        // The net gain over the leave spent is the two window lengths
        assert_eq!(
            suggestions[0].total_days - suggestions[0].leave_days,
            spans[0].length() + spans[1].length()
        );
    }

    #[test]
    fn test_zero_or_one_span_yields_nothing() {
        assert!(generate_suggestions(&[]).unwrap().is_empty());
        let one = vec![span(date(2023, 5, 27), date(2023, 5, 29))];
        assert!(generate_suggestions(&one).unwrap().is_empty());
    }

    #[test]
    fn test_unordered_spans_are_rejected() {
        let spans = vec![
            span(date(2023, 5, 18), date(2023, 5, 21)),
            span(date(2023, 5, 6), date(2023, 5, 8)),
        ];

        let err = generate_suggestions(&spans).unwrap_err();
        assert!(matches!(err, PlanError::UnorderedSpans { index: 0, .. }));
    }

    #[test]
    fn test_inverted_span_is_rejected() {
        let spans = vec![
            span(date(2023, 5, 6), date(2023, 5, 8)),
            span(date(2023, 5, 20), date(2023, 5, 12)),
        ];

        let err = generate_suggestions(&spans).unwrap_err();
        assert!(matches!(err, PlanError::InvertedSpan { index: 1, .. }));
    }

    #[test]
    fn test_custom_leave_cap() {
        let spans = vec![
            span(date(2023, 12, 23), date(2023, 12, 26)),
            span(date(2023, 12, 30), date(2024, 1, 1)),
        ];

        let engine = SuggestionEngine::new().with_max_leave(2);
        assert!(engine.generate(&spans).unwrap().is_empty());
    }
}
