use clap::{Parser, Subcommand};

/// Nongli lunisolar almanac.
#[derive(Parser)]
#[command(name = "nongli", version, about = "East-Asian lunisolar almanac")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Map every day of a Gregorian month to its lunar month and day.
    Month(MonthArgs),
    /// List the 24 solar terms of a year with their Gregorian dates.
    Terms(TermsArgs),
    /// Show the stem-branch designation and zodiac animal of a year.
    Year(YearArgs),
}

/// Arguments for the `month` subcommand.
#[derive(clap::Args)]
pub struct MonthArgs {
    /// Gregorian year (1901..=2099).
    pub year: i32,

    /// Gregorian month (1..=12).
    pub month: u8,

    /// Print raw integer day codes instead of month/day names.
    #[arg(long)]
    pub codes: bool,
}

/// Arguments for the `terms` subcommand.
#[derive(clap::Args)]
pub struct TermsArgs {
    /// Gregorian year (1900..=2099).
    pub year: i32,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Lunar year number. Dates before lunar New Year belong to the
    /// previous year's designation.
    pub year: i32,
}
