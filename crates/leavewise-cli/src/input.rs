//! Holiday file parsing.
//!
//! Accepts either the calendar-events JSON export shape (all-day events with
//! a `start.date` field) or a bare array of `YYYY-MM-DD` strings. Fetching
//! and caching that file is somebody else's job; this only reads it.

use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum HolidayFile {
    Events(EventsFile),
    Dates(Vec<NaiveDate>),
}

#[derive(Deserialize)]
struct EventsFile {
    #[serde(default)]
    items: Vec<EventItem>,
}

#[derive(Deserialize)]
struct EventItem {
    #[serde(default)]
    start: Option<EventStart>,
}

#[derive(Deserialize)]
struct EventStart {
    #[serde(default)]
    date: Option<NaiveDate>,
}

/// Read a holiday file and return its dates, unordered and unfiltered.
pub fn load_holidays(path: &Path) -> Result<Vec<NaiveDate>, Box<dyn Error>> {
    let data = std::fs::read_to_string(path)?;
    parse_holidays(&data)
}

/// Parse holiday JSON in either supported shape.
///
/// Event items without an all-day `start.date` (e.g. timed events) are
/// skipped.
pub fn parse_holidays(json: &str) -> Result<Vec<NaiveDate>, Box<dyn Error>> {
    let file: HolidayFile = serde_json::from_str(json)?;
    let dates = match file {
        HolidayFile::Events(events) => events
            .items
            .into_iter()
            .filter_map(|item| item.start.and_then(|s| s.date))
            .collect(),
        HolidayFile::Dates(dates) => dates,
    };
    Ok(dates)
}
