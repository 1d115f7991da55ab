//! Weekend enumeration over an inclusive date range.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// List every Saturday and Sunday in `[start, end]`, ascending.
///
/// An inverted range (`start > end`) yields an empty vector; the caller is
/// expected to validate its range, but this degenerate case is well defined.
pub fn enumerate_weekends(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut weekends = Vec::new();
    let mut current = start;

    while current <= end {
        if matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            weekends.push(current);
        }
        current += Duration::days(1);
    }

    weekends
}
