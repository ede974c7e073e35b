//! Stem-branch (干支) year designation and zodiac animals.
//!
//! These are pure residue computations on the Gregorian year number. The
//! caller is responsible for mapping a solar date to the correct *lunar*
//! year first (the cycle turns over at lunar New Year, not January 1);
//! nothing here reasons about calendar boundaries.

/// The ten heavenly stems, ordered so that `year % 10` indexes directly
/// (1900 was a 庚 year).
pub const STEM_NAMES: [&str; 10] = ["庚", "辛", "壬", "癸", "甲", "乙", "丙", "丁", "戊", "己"];

/// The twelve earthly branches, ordered so that `year % 12` indexes
/// directly (1900 was a 子 year).
pub const BRANCH_NAMES: [&str; 12] = [
    "申", "酉", "戌", "亥", "子", "丑", "寅", "卯", "辰", "巳", "午", "未",
];

/// The twelve zodiac animals, sharing the branch index.
pub const ZODIAC_NAMES: [&str; 12] = [
    "猴", "鸡", "狗", "猪", "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊",
];

/// Index into [`STEM_NAMES`] for a lunar year, `year mod 10`.
pub fn heavenly_stem_index(year: i32) -> usize {
    year.rem_euclid(10) as usize
}

/// Index into [`BRANCH_NAMES`] and [`ZODIAC_NAMES`] for a lunar year,
/// `year mod 12`.
pub fn earthly_branch_index(year: i32) -> usize {
    year.rem_euclid(12) as usize
}

/// The heavenly stem name for a lunar year.
pub fn stem_name(year: i32) -> &'static str {
    STEM_NAMES[heavenly_stem_index(year)]
}

/// The earthly branch name for a lunar year.
pub fn branch_name(year: i32) -> &'static str {
    BRANCH_NAMES[earthly_branch_index(year)]
}

/// The zodiac animal for a lunar year.
pub fn zodiac_name(year: i32) -> &'static str {
    ZODIAC_NAMES[earthly_branch_index(year)]
}
