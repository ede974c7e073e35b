//! Decoded lunar-year record and the 24-bit packed layout it comes from.
//!
//! Bit layout of a packed record (bit 0 least significant):
//!
//! | Bits     | Field            | Meaning                                       |
//! |----------|------------------|-----------------------------------------------|
//! | `[0,5)`  | `new_year_day`   | Gregorian day-of-month of lunar New Year       |
//! | `[5,7)`  | `new_year_month` | Gregorian month of New Year (1 or 2)           |
//! | `[7,20)` | `month_flags`    | 13 long/short flags, last month slot lowest    |
//! | `[20,24)`| `leap_month`     | ordinary month the leap month follows, 0 = none|
//!
//! All knowledge of this layout lives here; the table itself stays a flat
//! array of opaque integers.

use crate::month::Month;

/// One lunar year's structure, decoded from its packed table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRecord {
    new_year_day: u8,
    new_year_month: u8,
    month_flags: u16,
    leap_month: Option<u8>,
}

impl YearRecord {
    /// Decodes a packed 24-bit table entry into named fields.
    pub(crate) fn from_packed(raw: u32) -> Self {
        let leap = ((raw >> 20) & 0xF) as u8;
        Self {
            new_year_day: (raw & 0x1F) as u8,
            new_year_month: ((raw >> 5) & 0x3) as u8,
            month_flags: ((raw >> 7) & 0x1FFF) as u16,
            leap_month: (leap != 0).then_some(leap),
        }
    }

    /// Gregorian day-of-month on which this lunar year begins (1..=31).
    pub fn new_year_day(self) -> u8 {
        self.new_year_day
    }

    /// Gregorian month in which this lunar year begins (1 or 2).
    pub fn new_year_month(self) -> u8 {
        self.new_year_month
    }

    /// The ordinary month (1..=12) after which an intercalary month is
    /// inserted this year, or `None` when the year has twelve months.
    pub fn leap_month(self) -> Option<u8> {
        self.leap_month
    }

    /// Number of month slots in this lunar year: 13 with a leap month,
    /// otherwise 12.
    pub fn month_count(self) -> u8 {
        if self.leap_month.is_some() { 13 } else { 12 }
    }

    /// Length in days (29 or 30) of the month slot at `slot` (0-based from
    /// the year's first month, counting the leap slot when present).
    ///
    /// Slots must be below [`month_count`](Self::month_count); the flag for
    /// the first month sits in the highest of the 13 flag bits.
    pub fn month_length(self, slot: u8) -> u8 {
        debug_assert!(slot < self.month_count());
        29 + ((self.month_flags >> (12 - slot)) & 1) as u8
    }

    /// Length of the final month slot (lunar month 12, or the leap month
    /// when it falls last). Used when bridging into the next Gregorian year.
    pub fn last_month_length(self) -> u8 {
        self.month_length(self.month_count() - 1)
    }

    /// Length of the next-to-final month slot.
    pub fn penultimate_month_length(self) -> u8 {
        self.month_length(self.month_count() - 2)
    }

    /// Maps a 0-based month slot to its [`Month`] name.
    ///
    /// Slots before the intercalary insertion point are `Common(slot + 1)`;
    /// the insertion slot itself is `Leap(n)`; slots after it continue as
    /// `Common(slot)` so the ordinary numbering stays a continuous 1..=12.
    pub fn month_of_slot(self, slot: u8) -> Month {
        match self.leap_month {
            Some(leap) if slot == leap => Month::Leap(leap),
            Some(leap) if slot > leap => Month::Common(slot),
            _ => Month::Common(slot + 1),
        }
    }

    /// Sum of all month-slot lengths: the lunar year's total day count.
    pub fn days_in_year(self) -> u16 {
        (0..self.month_count())
            .map(|slot| u16::from(self.month_length(slot)))
            .sum()
    }
}
