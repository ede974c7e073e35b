//! Month command: print the lunar mapping for a Gregorian month.

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use nongli_calendar::month_days;

use crate::cli::MonthArgs;

/// Run the month decoding and print one line per Gregorian day.
pub fn run(args: MonthArgs) -> Result<()> {
    let _cmd = info_span!("month").entered();

    let days = month_days(args.year, args.month)
        .with_context(|| format!("cannot decode {}-{:02}", args.year, args.month))?;
    debug!(n_days = days.len(), "month decoded");

    for (day_of_month, lunar) in (1..).zip(&days) {
        if args.codes {
            println!(
                "{}-{:02}-{:02}  {}",
                args.year,
                args.month,
                day_of_month,
                lunar.code()
            );
        } else {
            println!(
                "{}-{:02}-{:02}  {}",
                args.year, args.month, day_of_month, lunar
            );
        }
    }

    Ok(())
}
