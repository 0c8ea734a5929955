use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Life calendar: how much time has passed since a date.
#[derive(Parser)]
#[command(
    name = "life-calendar",
    version,
    about = "Full months, full weeks, and years/months/days since a date"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: life-calendar.toml if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON.
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Full calendar months since DATE.
    Months(DeltaArgs),
    /// Full weeks since DATE.
    Weeks(DeltaArgs),
    /// Years, months and days since DATE.
    Ymd(DeltaArgs),
    /// Every delta since DATE, with the normalized dates.
    Summary(DeltaArgs),
}

/// Arguments shared by every delta subcommand.
#[derive(clap::Args)]
pub struct DeltaArgs {
    /// Start date (e.g. 1990-06-15). Falls back to `birth_date` from config.
    pub date: Option<String>,

    /// Reference date. Falls back to `reference_date` from config, then today.
    #[arg(short, long)]
    pub reference: Option<String>,
}
