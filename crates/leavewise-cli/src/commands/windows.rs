use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use leavewise_core::{enumerate_weekends, FreeDaySet, SpanExtractor};

use crate::input;

#[derive(Args)]
pub struct WindowsArgs {
    /// Path to the holiday JSON file
    #[arg(long)]
    pub holidays: PathBuf,
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
    /// Minimum length of a vacation window, in days
    #[arg(long, default_value_t = leavewise_core::DEFAULT_MIN_WINDOW_LENGTH)]
    pub min_window: i64,
    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: WindowsArgs) -> Result<(), Box<dyn Error>> {
    if args.start > args.end {
        return Err(format!(
            "invalid date range: start ({}) is after end ({})",
            args.start, args.end
        )
        .into());
    }

    let holidays = input::load_holidays(&args.holidays)?;
    let weekends = enumerate_weekends(args.start, args.end);
    let free_days = FreeDaySet::build(&holidays, &weekends);
    let windows = SpanExtractor::new()
        .with_min_window(args.min_window)
        .extract(&free_days);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&windows)?);
    } else if windows.is_empty() {
        println!("no vacation windows found for this range");
    } else {
        for window in &windows {
            println!(
                "{} - {} -> {} days",
                window.start,
                window.end,
                window.length()
            );
        }
    }
    Ok(())
}
