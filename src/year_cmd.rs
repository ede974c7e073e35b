//! Year command: print the stem-branch designation and zodiac animal.

use anyhow::Result;
use tracing::info_span;

use nongli_calendar::{branch_name, stem_name, zodiac_name};

use crate::cli::YearArgs;

/// Print the sexagenary designation of a lunar year.
pub fn run(args: YearArgs) -> Result<()> {
    let _cmd = info_span!("year").entered();

    println!(
        "{}: {}{} ({})",
        args.year,
        stem_name(args.year),
        branch_name(args.year),
        zodiac_name(args.year)
    );

    Ok(())
}
