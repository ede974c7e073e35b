//! Error types for the nongli-calendar crate.

/// Error type for all fallible operations in the nongli-calendar crate.
///
/// This enum covers validation failures for Gregorian years outside the
/// span of the embedded lunar table and for month numbers outside 1..=12.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a year falls outside the supported window.
    ///
    /// The lunar table covers 1901..=2099 and the solar term formula
    /// 1900..=2099. Decoding January (or the pre-New-Year days of
    /// February) also needs the *previous* year's table entry, so 1901
    /// reports this error with `year: 1900` for those months.
    #[error("no calendar data for year {year}")]
    YearOutOfRange {
        /// The year for which no table entry exists.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },
}
