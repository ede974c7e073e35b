//! Month decoder: maps every day of a Gregorian month to its lunar day.

use crate::error::CalendarError;
use crate::month::{LunarDay, Month};
use crate::table;

/// Number of days in each Gregorian month (index 0 unused, index 1 = January).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Where a Gregorian month sits relative to that lunar year's New Year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NewYearPosition {
    /// The whole month precedes lunar New Year (January with a February
    /// New Year); every day belongs to the previous lunar year.
    Before,
    /// Lunar New Year falls inside this month.
    Within,
    /// Lunar New Year has already passed.
    After,
}

impl NewYearPosition {
    fn classify(new_year_month: u8, month: u8) -> Self {
        use std::cmp::Ordering::*;
        match new_year_month.cmp(&month) {
            Greater => Self::Before,
            Equal => Self::Within,
            Less => Self::After,
        }
    }
}

/// Number of days in a Gregorian month.
///
/// February uses the simplified leap rule `year % 4 == 0 && year % 100 != 0`,
/// without the %400 correction; the lunar table ends in 2099, before the two
/// rules next disagree (2100).
fn days_in_gregorian_month(year: i32, month: u8) -> u8 {
    if month == 2 && year % 4 == 0 && year % 100 != 0 {
        29
    } else {
        DAYS_PER_MONTH[month as usize]
    }
}

/// Decodes every day of the Gregorian month `(year, month)` into its lunar
/// month and day.
///
/// The returned vector holds one [`LunarDay`] per Gregorian calendar day,
/// index 0 being the 1st of the month.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] for a month outside 1..=12 and
/// [`CalendarError::YearOutOfRange`] for a year outside 1901..=2099. Months
/// that precede the lunar New Year also need the previous year's table
/// entry, so January and early February of 1901 report
/// `YearOutOfRange { year: 1900 }`: the single boundary the table cannot
/// reach back across.
///
/// # Examples
///
/// ```
/// use nongli_calendar::{month_days, Month};
///
/// let days = month_days(2024, 2).unwrap();
/// // Lunar New Year 2024 falls on February 10.
/// assert_eq!(days[9].month, Month::Common(1));
/// assert_eq!(days[9].day, 1);
/// ```
pub fn month_days(year: i32, month: u8) -> Result<Vec<LunarDay>, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    let record = table::lookup(year)?;
    let n_days = days_in_gregorian_month(year, month);

    match NewYearPosition::classify(record.new_year_month(), month) {
        NewYearPosition::Before => {
            // January before a February New Year: walk back from New Year
            // through the previous lunar year's final two months.
            let prev = table::lookup(year - 1)?;
            let len_final = i32::from(prev.last_month_length());
            let len_penult = i32::from(prev.penultimate_month_length());
            // Days from January 1 up to New Year's eve, inclusive.
            let to_new_year = i32::from(n_days) + i32::from(record.new_year_day()) - 1;
            // Lunar-day position of January 1, counted from the 1st of the
            // previous year's month 11.
            let begin = len_penult + len_final - to_new_year + 1;
            let days = (0..i32::from(n_days))
                .map(|i| {
                    let pos = begin + i;
                    if pos <= len_penult {
                        LunarDay::new(Month::Common(11), pos as u8)
                    } else {
                        LunarDay::new(Month::Common(12), (pos - len_penult) as u8)
                    }
                })
                .collect();
            Ok(days)
        }
        NewYearPosition::Within => {
            let prev = table::lookup(year - 1)?;
            let len_final = i32::from(prev.last_month_length());
            let new_year_day = i32::from(record.new_year_day());
            let days = (1..=i32::from(n_days))
                .map(|day| {
                    if day < new_year_day {
                        // Ends exactly on the final month's length the day
                        // before New Year.
                        let lunar = len_final - new_year_day + day + 1;
                        LunarDay::new(Month::Common(12), lunar as u8)
                    } else {
                        LunarDay::new(Month::Common(1), (day - new_year_day + 1) as u8)
                    }
                })
                .collect();
            Ok(days)
        }
        NewYearPosition::After => {
            // Gregorian day offset from New Year to the 1st of `month`.
            let mut offset = 1 - i32::from(record.new_year_day());
            for m in record.new_year_month()..month {
                offset += i32::from(days_in_gregorian_month(year, m));
            }
            // Consume whole lunar months until the offset falls inside one.
            let mut slot = 0u8;
            let mut len = i32::from(record.month_length(slot));
            while offset >= len {
                offset -= len;
                slot += 1;
                len = i32::from(record.month_length(slot));
            }
            let mut days = Vec::with_capacity(n_days as usize);
            for _ in 0..n_days {
                if offset >= len {
                    offset -= len;
                    slot += 1;
                    len = i32::from(record.month_length(slot));
                }
                days.push(LunarDay::new(record.month_of_slot(slot), (offset + 1) as u8));
                offset += 1;
            }
            Ok(days)
        }
    }
}

/// Like [`month_days`] but returning the raw integer day codes
/// (see [`LunarDay::code`]).
///
/// # Errors
///
/// Same as [`month_days`].
pub fn month_day_codes(year: i32, month: u8) -> Result<Vec<i32>, CalendarError> {
    Ok(month_days(year, month)?.iter().map(LunarDay::code).collect())
}
