//! `recur` CLI — expand repeat rules and print month grids from the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Every occurrence of a monthly event anchored on the 31st
//! recur expand --start 2025-01-31 --repeat monthly --end 2025-12-31
//!
//! # Every third day for one year (default bound), as a JSON array
//! recur expand --start 2025-03-01 --repeat daily --interval 3 --json
//!
//! # Write the dates to a file
//! recur expand --start 2025-01-06 --repeat weekly -o dates.txt
//!
//! # Month grid for July 2025
//! recur grid --year 2025 --month 7
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use recur_engine::{calendar, generate_occurrences, RepeatType};

#[derive(Parser)]
#[command(name = "recur", version, about = "Recurrence-date generator CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand a repeat rule into its occurrence dates
    Expand {
        /// Start date (YYYY-MM-DD) — the series anchor
        #[arg(short, long)]
        start: String,
        /// Repeat type: none, daily, weekly, monthly, yearly
        #[arg(short, long)]
        repeat: String,
        /// Step count between occurrences
        #[arg(short, long, default_value_t = 1)]
        interval: u32,
        /// Inclusive end date (YYYY-MM-DD); defaults to one year after start
        #[arg(short, long)]
        end: Option<String>,
        /// Emit a JSON array instead of one date per line
        #[arg(long)]
        json: bool,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Print the Sunday-first month grid for a given year and month
    Grid {
        #[arg(short, long)]
        year: i32,
        /// Month number, 1-12
        #[arg(short, long)]
        month: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Expand {
            start,
            repeat,
            interval,
            end,
            json,
            output,
        } => {
            let repeat = parse_repeat(&repeat)?;
            let dates = generate_occurrences(&start, repeat, interval, end.as_deref())
                .context("Failed to generate occurrence dates")?;

            let rendered = if json {
                serde_json::to_string(&dates)?
            } else {
                let mut lines = dates.join("\n");
                lines.push('\n');
                lines
            };
            write_output(output.as_deref(), &rendered)?;
        }
        Commands::Grid { year, month } => {
            if !(1..=12).contains(&month) {
                anyhow::bail!("Invalid month {}: expected 1-12", month);
            }
            print!("{}", render_grid(year, month));
        }
    }

    Ok(())
}

/// Map the `--repeat` argument onto a `RepeatType`.
fn parse_repeat(raw: &str) -> Result<RepeatType> {
    match raw {
        "none" => Ok(RepeatType::None),
        "daily" => Ok(RepeatType::Daily),
        "weekly" => Ok(RepeatType::Weekly),
        "monthly" => Ok(RepeatType::Monthly),
        "yearly" => Ok(RepeatType::Yearly),
        other => {
            anyhow::bail!(
                "Unknown repeat type: '{}'. Expected none, daily, weekly, monthly or yearly",
                other
            );
        }
    }
}

fn render_grid(year: i32, month: u32) -> String {
    let mut out = format!("{:04}-{:02}\n Su  Mo  Tu  We  Th  Fr  Sa\n", year, month);
    for week in calendar::month_grid(year, month) {
        let cells: Vec<String> = week
            .iter()
            .map(|cell| match cell {
                Some(day) => format!("{:3}", day),
                None => "   ".to_string(),
            })
            .collect();
        out.push_str(cells.join(" ").trim_end());
        out.push('\n');
    }
    out
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
