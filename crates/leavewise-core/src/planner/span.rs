//! Extraction of maximal runs of consecutive free days.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::free_days::FreeDaySet;

/// Default minimum run length for a vacation window.
pub const DEFAULT_MIN_WINDOW_LENGTH: i64 = 3;

/// A maximal run of consecutive free days -- a vacation window that costs
/// no leave. Both `start` and `end` are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeSpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl FreeSpan {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Length of the window in whole days, inclusive of both ends.
    pub fn length(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// Extractor for vacation windows in a free-day set.
pub struct SpanExtractor {
    /// Minimum window length to keep (in days)
    min_window_length: i64,
}

impl SpanExtractor {
    /// Create an extractor with the default threshold (3 days).
    pub fn new() -> Self {
        Self {
            min_window_length: DEFAULT_MIN_WINDOW_LENGTH,
        }
    }

    /// Set the minimum window length.
    pub fn with_min_window(mut self, days: i64) -> Self {
        self.min_window_length = days;
        self
    }

    /// Find all maximal runs of consecutive days in `free_days` that are at
    /// least `min_window_length` days long.
    ///
    /// Single left-to-right scan; a run ends when the next free day is not
    /// exactly one calendar day later. An empty set yields no spans.
    ///
    /// # Returns
    /// Windows in ascending order, non-overlapping, each separated from its
    /// neighbors by at least one working day.
    pub fn extract(&self, free_days: &FreeDaySet) -> Vec<FreeSpan> {
        let days = free_days.as_slice();
        let mut spans = Vec::new();

        let Some(&first) = days.first() else {
            return spans;
        };

        let mut run_start = first;
        for (i, &day) in days.iter().enumerate() {
            let run_ends = match days.get(i + 1) {
                Some(&next) => next != day + Duration::days(1),
                None => true,
            };
            if !run_ends {
                continue;
            }

            let span = FreeSpan::new(run_start, day);
            if span.length() >= self.min_window_length {
                spans.push(span);
            }
            if let Some(&next) = days.get(i + 1) {
                run_start = next;
            }
        }

        spans
    }
}

impl Default for SpanExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function to extract windows with the default threshold.
pub fn extract_spans(free_days: &FreeDaySet) -> Vec<FreeSpan> {
    SpanExtractor::new().extract(free_days)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn set(days: &[NaiveDate]) -> FreeDaySet {
        FreeDaySet::from_days(days.to_vec())
    }

    #[test]
    fn test_short_runs_are_discarded() {
        let free_days = set(&[
            date(2023, 5, 15),
            date(2023, 5, 27),
            date(2023, 5, 28),
            date(2023, 5, 29),
        ]);

        let spans = extract_spans(&free_days);
        assert_eq!(spans, vec![FreeSpan::new(date(2023, 5, 27), date(2023, 5, 29))]);
        assert_eq!(spans[0].length(), 3);
    }

    #[test]
    fn test_run_at_end_of_sequence_is_closed() {
        let free_days = set(&[
            date(2023, 12, 30),
            date(2023, 12, 31),
            date(2024, 1, 1),
        ]);

        let spans = extract_spans(&free_days);
        assert_eq!(spans, vec![FreeSpan::new(date(2023, 12, 30), date(2024, 1, 1))]);
    }

    #[test]
    fn test_multiple_windows_in_order() {
        let free_days = set(&[
            date(2023, 4, 29),
            date(2023, 4, 30),
            date(2023, 5, 1),
            // gap
            date(2023, 5, 6),
            date(2023, 5, 7),
            // gap
            date(2023, 5, 18),
            date(2023, 5, 19),
            date(2023, 5, 20),
            date(2023, 5, 21),
        ]);

        let spans = extract_spans(&free_days);
        assert_eq!(
            spans,
            vec![
                FreeSpan::new(date(2023, 4, 29), date(2023, 5, 1)),
                FreeSpan::new(date(2023, 5, 18), date(2023, 5, 21)),
            ]
        );
    }

    #[test]
    fn test_empty_set_yields_no_spans() {
        assert!(extract_spans(&FreeDaySet::default()).is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let free_days = set(&[date(2023, 5, 6), date(2023, 5, 7)]);

        assert!(extract_spans(&free_days).is_empty());
        let spans = SpanExtractor::new().with_min_window(2).extract(&free_days);
        assert_eq!(spans.len(), 1);
        assert_eq!(spans[0].length(), 2);
    }
}
