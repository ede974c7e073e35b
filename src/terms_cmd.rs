//! Terms command: print the 24 solar terms of a year.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use tracing::{debug, info_span};

use nongli_calendar::{solar_terms, SOLAR_TERM_NAMES};

use crate::cli::TermsArgs;

/// Run the solar term calculation and print one dated line per term.
pub fn run(args: TermsArgs) -> Result<()> {
    let _cmd = info_span!("terms").entered();

    let terms = solar_terms(args.year)
        .with_context(|| format!("cannot compute solar terms for {}", args.year))?;
    debug!(year = args.year, "solar terms computed");

    for (name, offset) in SOLAR_TERM_NAMES.iter().zip(terms) {
        let date = NaiveDate::from_yo_opt(args.year, u32::from(offset) + 1)
            .context("solar term offset beyond the end of the year")?;
        println!("{name}  {date}");
    }

    Ok(())
}
