use crate::error::ReportError;
use crate::report::Report;
use crate::report::aggregate::Route;
use clap::{ArgAction, Parser};
use colored::Colorize;
use log::{LevelFilter, info};
use std::path::PathBuf;
use std::process::ExitCode;

mod error;
mod report;
mod ticket;
mod time;

#[derive(Parser)]
#[command(about = "Fastest flight per carrier and average vs median fare for one route")]
struct Args {
    /// Path to the JSON ticket file
    #[arg(short, long, value_name = "FILE", default_value = "data/tickets.json")]
    tickets: PathBuf,

    /// Origin city name, matched exactly
    #[arg(long, value_name = "NAME", default_value = "Владивосток")]
    origin: String,

    /// Destination city name, matched exactly
    #[arg(long, value_name = "NAME", default_value = "Тель-Авив")]
    destination: String,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn run(args: Args) -> Result<(), ReportError> {
    let tickets = ticket::load_from_file(&args.tickets)?;
    let route = Route::new(args.origin, args.destination);
    info!("building report for {}", route);

    let report = Report::build(&tickets, route)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::builder()
        .filter_module("fares", level)
        .parse_default_env()
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
