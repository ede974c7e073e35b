//! Solar term calculator: day offsets of the 24 seasonal markers.

use crate::error::CalendarError;

/// The 24 solar term names, in canonical order from Minor Cold (小寒) to
/// Winter Solstice (冬至). Indexed by the positions of [`solar_terms`].
#[rustfmt::skip]
pub const SOLAR_TERM_NAMES: [&str; 24] = [
    "小寒", "大寒", "立春", "雨水", "惊蛰", "春分",
    "清明", "谷雨", "立夏", "小满", "芒种", "夏至",
    "小暑", "大暑", "立秋", "处暑", "白露", "秋分",
    "寒露", "霜降", "立冬", "小雪", "大雪", "冬至",
];

/// Computes the day offsets of the 24 solar terms for `year`.
///
/// Each entry is a 0-based day count since January 1 of `year`, in the
/// order of [`SOLAR_TERM_NAMES`]. The closed-form approximation counts
/// days since 1900-01-01 in four-year blocks, which reproduces the
/// Gregorian leap pattern only within the supported window; offsets are
/// strictly increasing within a year.
///
/// # Errors
///
/// Returns [`CalendarError::YearOutOfRange`] when `year` is outside
/// 1900..=2099. Unlike the lunar table, 1900 itself is supported here.
pub fn solar_terms(year: i32) -> Result<[u16; 24], CalendarError> {
    if !(1900..=2099).contains(&year) {
        return Err(CalendarError::YearOutOfRange { year });
    }
    let y = year - 1900;
    // Cumulative day count from 1900-01-01 to January 1 of `year`,
    // approximated in 1461-day four-year blocks.
    let d = y / 4;
    let m = y % 4;
    let jan1 = if m == 0 { 1461 * d - 1 } else { 1461 * d + 365 * m };

    let mut offsets = [0u16; 24];
    for (i, offset) in offsets.iter_mut().enumerate() {
        let term = i as f64;
        let x = 365.242 * f64::from(y) + 6.2 + 15.22 * term - 1.9 * (0.262 * term).sin();
        *offset = (x - f64::from(jan1)) as u16;
    }
    Ok(offsets)
}
