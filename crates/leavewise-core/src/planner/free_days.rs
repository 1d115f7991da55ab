//! Merged set of non-working calendar days.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An ascending, deduplicated sequence of free calendar days
/// (public holidays merged with weekend days).
///
/// The invariant is strictly increasing order with no repeats; both
/// constructors establish it, so the span extractor can scan without
/// re-sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeDaySet(Vec<NaiveDate>);

impl FreeDaySet {
    /// Merge holiday and weekend days into one set.
    ///
    /// A holiday that falls on a weekend collapses to a single entry.
    pub fn build(holidays: &[NaiveDate], weekends: &[NaiveDate]) -> Self {
        let mut days: Vec<NaiveDate> = holidays.iter().chain(weekends).copied().collect();
        days.sort_unstable();
        days.dedup();
        Self(days)
    }

    /// Build a set from an already-merged list of days.
    pub fn from_days(mut days: Vec<NaiveDate>) -> Self {
        days.sort_unstable();
        days.dedup();
        Self(days)
    }

    pub fn as_slice(&self) -> &[NaiveDate] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, NaiveDate> {
        self.0.iter()
    }
}
