//! # nongli-calendar
//!
//! Pure, table-driven conversion from Gregorian dates to the East-Asian
//! lunisolar calendar, plus the 24 solar terms and the stem-branch/zodiac
//! year cycle.
//!
//! Everything here is stateless and allocation-light: the only data are
//! compiled-in constant tables, so every function is reentrant and safe to
//! call concurrently. Valid years are 1901..=2099 for the lunar table and
//! 1900..=2099 for solar terms; out-of-range input yields an error, never
//! a partial result.
//!
//! ## Quick Start
//!
//! ```
//! use nongli_calendar::{month_days, solar_terms, zodiac_name, Month};
//!
//! // Lunar New Year 2024: February 10 is month 1 day 1.
//! let days = month_days(2024, 2).unwrap();
//! assert_eq!((days[9].month, days[9].day), (Month::Common(1), 1));
//!
//! // 24 solar term day offsets for the year.
//! let terms = solar_terms(2024).unwrap();
//! assert_eq!(terms.len(), 24);
//!
//! // 2024 is a dragon year.
//! assert_eq!(zodiac_name(2024), "龙");
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Packed lunar-year records for 1901..=2099 |
//! | `record` | Decoded year record and the 24-bit codec |
//! | `month` | Lunar month/day vocabulary and integer day codes |
//! | `decode` | Gregorian month to lunar day mapping |
//! | `solar_term` | The 24 seasonal markers |
//! | `sexagenary` | Heavenly stems, earthly branches, zodiac |
//! | `error` | Error types |

mod decode;
mod error;
mod month;
mod record;
mod sexagenary;
mod solar_term;
mod table;

pub use decode::{month_day_codes, month_days};
pub use error::CalendarError;
pub use month::{LunarDay, Month};
pub use record::YearRecord;
pub use sexagenary::{
    branch_name, earthly_branch_index, heavenly_stem_index, stem_name, zodiac_name, BRANCH_NAMES,
    STEM_NAMES, ZODIAC_NAMES,
};
pub use solar_term::{solar_terms, SOLAR_TERM_NAMES};
pub use table::{lookup, FIRST_YEAR, LAST_YEAR};
