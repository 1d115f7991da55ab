use clap::{Parser, Subcommand};

mod commands;
mod input;

#[derive(Parser)]
#[command(name = "leavewise-cli", version, about = "Leavewise CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute vacation windows and leave-bridging suggestions
    Plan(commands::plan::PlanArgs),
    /// Show vacation windows only
    Windows(commands::windows::WindowsArgs),
    /// List weekend dates in a range
    Weekends(commands::weekends::WeekendsArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Plan(args) => commands::plan::run(args),
        Commands::Windows(args) => commands::windows::run(args),
        Commands::Weekends(args) => commands::weekends::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
