//! Lunar month and day vocabulary, including the integer day-code encoding.

use std::fmt;

/// A lunar month name: `Common` for an ordinary month, `Leap` for the
/// intercalary month inserted after the ordinary month of the same number.
///
/// A lunar year has exactly twelve `Common` months; a leap year adds one
/// `Leap` month without disturbing the 1..=12 numbering of the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    Common(u8),
    Leap(u8),
}

impl Month {
    /// Returns the month number (1..=12), common or leap.
    pub fn number(self) -> u8 {
        match self {
            Month::Common(n) | Month::Leap(n) => n,
        }
    }

    /// Returns `true` for an intercalary month.
    pub fn is_leap(self) -> bool {
        matches!(self, Month::Leap(_))
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Month::Common(n) => write!(f, "month {n}"),
            Month::Leap(n) => write!(f, "leap month {n}"),
        }
    }
}

/// A single day of the lunar calendar: a month name plus a 1-based day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDay {
    /// The lunar month this day belongs to.
    pub month: Month,
    /// Day within the lunar month (1..=30).
    pub day: u8,
}

impl LunarDay {
    /// Creates a new `LunarDay`.
    pub fn new(month: Month, day: u8) -> Self {
        Self { month, day }
    }

    /// Returns the integer day code: `indicator * 100 + day`, where the
    /// indicator is the month number for a common month and its negation
    /// for a leap month.
    ///
    /// Examples: month 1 day 1 is `101`, month 12 day 30 is `1230`,
    /// leap month 6 day 1 is `-599`.
    pub fn code(&self) -> i32 {
        let day = i32::from(self.day);
        match self.month {
            Month::Common(n) => i32::from(n) * 100 + day,
            Month::Leap(n) => i32::from(n) * -100 + day,
        }
    }

    /// Parses an integer day code back into a `LunarDay`.
    ///
    /// Returns `None` when the code does not describe a month in 1..=12
    /// with a day in 1..=30.
    pub fn from_code(code: i32) -> Option<Self> {
        let (month, day) = if code > 0 {
            (Month::Common(u8::try_from(code / 100).ok()?), code % 100)
        } else {
            let n = (99 - code) / 100;
            (Month::Leap(u8::try_from(n).ok()?), code + n * 100)
        };
        if !(1..=12).contains(&month.number()) || !(1..=30).contains(&day) {
            return None;
        }
        Some(Self::new(month, day as u8))
    }
}

impl fmt::Display for LunarDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.month, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_and_is_leap() {
        assert_eq!(Month::Common(6).number(), 6);
        assert_eq!(Month::Leap(6).number(), 6);
        assert!(!Month::Common(6).is_leap());
        assert!(Month::Leap(6).is_leap());
    }

    #[test]
    fn code_common() {
        assert_eq!(LunarDay::new(Month::Common(1), 1).code(), 101);
        assert_eq!(LunarDay::new(Month::Common(12), 30).code(), 1230);
    }

    #[test]
    fn code_leap() {
        assert_eq!(LunarDay::new(Month::Leap(6), 1).code(), -599);
        assert_eq!(LunarDay::new(Month::Leap(11), 30).code(), -1070);
    }

    #[test]
    fn from_code_common() {
        assert_eq!(
            LunarDay::from_code(101),
            Some(LunarDay::new(Month::Common(1), 1))
        );
        assert_eq!(
            LunarDay::from_code(1230),
            Some(LunarDay::new(Month::Common(12), 30))
        );
    }

    #[test]
    fn from_code_leap() {
        assert_eq!(
            LunarDay::from_code(-599),
            Some(LunarDay::new(Month::Leap(6), 1))
        );
        assert_eq!(
            LunarDay::from_code(-1070),
            Some(LunarDay::new(Month::Leap(11), 30))
        );
    }

    #[test]
    fn from_code_rejects_invalid() {
        assert_eq!(LunarDay::from_code(0), None);
        assert_eq!(LunarDay::from_code(100), None); // day 0
        assert_eq!(LunarDay::from_code(131), None); // day 31
        assert_eq!(LunarDay::from_code(1301), None); // month 13
        assert_eq!(LunarDay::from_code(-1300), None);
    }

    #[test]
    fn code_round_trip() {
        for month in [Month::Common(1), Month::Common(12), Month::Leap(2)] {
            for day in [1u8, 29, 30] {
                let lunar = LunarDay::new(month, day);
                assert_eq!(LunarDay::from_code(lunar.code()), Some(lunar));
            }
        }
    }

    #[test]
    fn display() {
        assert_eq!(
            LunarDay::new(Month::Common(1), 1).to_string(),
            "month 1 day 1"
        );
        assert_eq!(
            LunarDay::new(Month::Leap(6), 15).to_string(),
            "leap month 6 day 15"
        );
    }

    #[test]
    fn month_is_copy_and_ord() {
        fn assert_copy<T: Copy + Ord>() {}
        assert_copy::<Month>();
    }
}
