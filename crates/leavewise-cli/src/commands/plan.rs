use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use leavewise_core::{plan, PlannerConfig, VacationPlan};

use crate::input;

#[derive(Args)]
pub struct PlanArgs {
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
    /// Maximum leave days a suggestion may cost
    #[arg(long, default_value_t = leavewise_core::DEFAULT_MAX_LEAVE_DAYS)]
    pub max_leave: i64,
    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn Error>> {
    let holidays = input::load_holidays(&args.holidays)?;
    let config = PlannerConfig {
        min_window_length: args.min_window,
        max_leave_days: args.max_leave,
    };

    let result = plan(&holidays, args.start, args.end, &config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_plan(&result);
    }
    Ok(())
}

fn print_plan(result: &VacationPlan) {
    println!("Vacations without leaves:");
    if result.windows.is_empty() {
        println!("  no vacation windows found for this range");
    }
    for window in &result.windows {
        println!(
            "  {} - {} -> {} days",
            window.start,
            window.end,
            window.length()
        );
    }

    println!("Suggested leaves:");
    if result.suggestions.is_empty() {
        println!("  no suggestions found for this range");
    }
    for s in &result.suggestions {
        println!(
            "  {} - {} -> {} leaves / {} days",
            s.start, s.end, s.leave_days, s.total_days
        );
    }
}
