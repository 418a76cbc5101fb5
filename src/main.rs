use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use anyhow::Context;
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};

mod calendar;
mod config;
mod export;
mod labels;
mod logging;
mod models;
mod navigation;
mod report;
mod rotation;

use crate::config::SeatingConfig;
use crate::navigation::Navigator;

#[derive(Parser)]
#[command(name = "classroom-seating")]
#[command(about = "Daily rotating seating chart for one classroom", long_about = None)]
struct Cli {
    /// Classroom TOML file; the built-in classroom when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the seating chart for one school day
    Show {
        /// Day to show (YYYY-MM-DD); today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,
        /// School days to move forward (negative moves back).
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List every school day of the semester
    Days,
    /// Write the full rotation schedule as CSV
    Export {
        #[arg(long, default_value = "schedule.csv")]
        out: PathBuf,
    },
    /// Step through the semester from stdin: p, n, t, q
    Browse {
        /// Day to start on (YYYY-MM-DD); today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = SeatingConfig::resolve(cli.config.as_deref())?;
    let days = config.school_days();

    match cli.command {
        Commands::Show {
            date,
            offset,
            format,
        } => {
            let mut nav = Navigator::new(&days, date.unwrap_or_else(calendar::today));
            nav.step(offset);
            match format {
                Format::Text => print!("{}", report::build_chart(&nav, &config)),
                Format::Json => println!("{}", report::build_json(&nav, &config)?),
            }
        }
        Commands::Days => {
            if days.is_empty() {
                println!("No school days in this semester.");
                return Ok(());
            }

            for (index, day) in days.iter().enumerate() {
                println!(
                    "{:>3}. {} {:<9} rotation {}/{}",
                    index + 1,
                    day,
                    labels::weekday_name(day.date()),
                    rotation::rotation_of(index as i64) + 1,
                    rotation::ROTATION_PERIOD
                );
            }
        }
        Commands::Export { out } => {
            let written = export::export_csv(&out, &days)?;
            println!("Wrote {written} school days to {}.", out.display());
        }
        Commands::Browse { date } => {
            let nav = Navigator::new(&days, date.unwrap_or_else(calendar::today));
            let stdin = io::stdin();
            let stdout = io::stdout();
            browse(nav, &config, stdin.lock(), stdout.lock(), calendar::today)?;
        }
    }

    Ok(())
}

/// Reads one command per line and reprints the chart after each move.
fn browse<R, W>(
    mut nav: Navigator<'_>,
    config: &SeatingConfig,
    input: R,
    mut output: W,
    today: impl Fn() -> NaiveDate,
) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", report::build_chart(&nav, config))?;
    writeln!(output, "[p] anterioară  [n] următoare  [t] astăzi  [q] ieșire")?;
    output.flush()?;

    for line in input.lines() {
        let line = line.context("failed to read command")?;
        match line.trim() {
            "p" | "prev" => nav.go_to_previous(),
            "n" | "next" => nav.go_to_next(),
            "t" | "today" => nav.go_to_today(today()),
            "q" | "quit" => break,
            "" => continue,
            other => {
                writeln!(output, "Comandă necunoscută: {other}")?;
                continue;
            }
        }
        write!(output, "\n{}", report::build_chart(&nav, config))?;
        output.flush()?;
    }

    Ok(())
}
