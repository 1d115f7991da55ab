use std::error::Error;

use chrono::NaiveDate;
use clap::Args;
use leavewise_core::enumerate_weekends;

#[derive(Args)]
pub struct WeekendsArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub start: NaiveDate,
    /// Last day of the range (YYYY-MM-DD)
    #[arg(long)]
    pub end: NaiveDate,
    /// Output JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: WeekendsArgs) -> Result<(), Box<dyn Error>> {
    if args.start > args.end {
        return Err(format!(
            "invalid date range: start ({}) is after end ({})",
            args.start, args.end
        )
        .into());
    }

    let weekends = enumerate_weekends(args.start, args.end);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&weekends)?);
    } else {
        for day in &weekends {
            println!("{day}");
        }
        println!("{} weekend day(s)", weekends.len());
    }
    Ok(())
}
