//! lunar.rs
//!
//! The lunar side of the calendar: the closed set of Khmer lunar months,
//! their cyclic successor relation, the month and year length tables, and
//! the value types a conversion produces ([`LunarDate`], [`LunarDay`],
//! [`MoonPhase`]).
//!
//! A Khmer year has 12 ordinary months. In a leap-month year the single
//! month អាសាឍ is replaced by the intercalary pair បឋមាសាឍ/ទុតិយាសាឍ, giving
//! 13 months; in a leap-day year ជេស្ឋ gains a 30th day. The ordinary months
//! alternate 29/30 days starting from មិគសិរ with 29.

use chrono::NaiveDate;

use crate::reckoning::{self, YearType};

/// A Khmer lunar month: the 12 ordinary months plus the two intercalary
/// occurrences of the អាសាឍ slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarMonth {
    /// មិគសិរ
    Migasir,
    /// បុស្ស
    Pos,
    /// មាឃ
    Meakh,
    /// ផល្គុន
    Phalkun,
    /// ចេត្រ
    Chetr,
    /// ពិសាខ
    Pisakh,
    /// ជេស្ឋ — gains a 30th day in a leap-day year
    Chesth,
    /// អាសាឍ — replaced by the intercalary pair in a leap-month year
    Asath,
    /// ស្រាពណ៍
    Srapn,
    /// ភទ្របទ
    Phatrabot,
    /// អស្សុជ
    Assoch,
    /// កក្ដិក
    Kakdek,
    /// បឋមាសាឍ — first intercalary month
    PathamAsath,
    /// ទុតិយាសាឍ — second intercalary month
    TutiyAsath,
}

impl LunarMonth {
    /// All 14 month slots, in table order.
    pub const ALL: [LunarMonth; 14] = [
        LunarMonth::Migasir,
        LunarMonth::Pos,
        LunarMonth::Meakh,
        LunarMonth::Phalkun,
        LunarMonth::Chetr,
        LunarMonth::Pisakh,
        LunarMonth::Chesth,
        LunarMonth::Asath,
        LunarMonth::Srapn,
        LunarMonth::Phatrabot,
        LunarMonth::Assoch,
        LunarMonth::Kakdek,
        LunarMonth::PathamAsath,
        LunarMonth::TutiyAsath,
    ];

    /// Position of the month in the table, 0–13.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`LunarMonth::index`].
    pub fn from_index(index: usize) -> Option<LunarMonth> {
        LunarMonth::ALL.get(index).copied()
    }

    /// Cyclic successor of the month within the given BE year.
    ///
    /// The relation is total over all 14 slots and has exactly one branch
    /// point: after ជេស្ឋ a leap-month year routes through the intercalary
    /// pair, which rejoins the ordinary cycle at ស្រាពណ៍.
    ///
    /// ```
    /// # use chhankitek::lunar::LunarMonth;
    /// assert_eq!(LunarMonth::Pos.successor(2566), LunarMonth::Meakh);
    /// // BE 2567 is a leap-month year, BE 2566 is not.
    /// assert_eq!(LunarMonth::Chesth.successor(2567), LunarMonth::PathamAsath);
    /// assert_eq!(LunarMonth::Chesth.successor(2566), LunarMonth::Asath);
    /// assert_eq!(LunarMonth::TutiyAsath.successor(2567), LunarMonth::Srapn);
    /// ```
    pub fn successor(self, be_year: i32) -> LunarMonth {
        use LunarMonth::*;
        match self {
            Migasir => Pos,
            Pos => Meakh,
            Meakh => Phalkun,
            Phalkun => Chetr,
            Chetr => Pisakh,
            Pisakh => Chesth,
            Chesth => {
                if reckoning::is_leap_month(be_year) {
                    PathamAsath
                } else {
                    Asath
                }
            }
            Asath => Srapn,
            Srapn => Phatrabot,
            Phatrabot => Assoch,
            Assoch => Kakdek,
            Kakdek => Migasir,
            PathamAsath => TutiyAsath,
            TutiyAsath => Srapn,
        }
    }

    /// Number of days in this month for the given BE year.
    ///
    /// ```
    /// # use chhankitek::lunar::LunarMonth;
    /// assert_eq!(LunarMonth::Migasir.days(2566), 29);
    /// assert_eq!(LunarMonth::Pos.days(2566), 30);
    /// // ជេស្ឋ has 30 days only in a leap-day year (BE 2569).
    /// assert_eq!(LunarMonth::Chesth.days(2566), 29);
    /// assert_eq!(LunarMonth::Chesth.days(2569), 30);
    /// assert_eq!(LunarMonth::PathamAsath.days(2566), 30);
    /// ```
    pub fn days(self, be_year: i32) -> i64 {
        use LunarMonth::*;
        match self {
            Chesth if reckoning::is_leap_day(be_year) => 30,
            PathamAsath | TutiyAsath => 30,
            // មិគសិរ 29, បុស្ស 30, មាឃ 29, ... by parity of the slot.
            month => {
                if month.index() % 2 == 0 {
                    29
                } else {
                    30
                }
            }
        }
    }
}

/// The two halves of a lunar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoonPhase {
    /// កើត — the moon is waxing
    Waxing,
    /// រោច — the moon is waning
    Waning,
}

impl MoonPhase {
    /// Position of the phase in the locale tables, 0–1.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A day within a lunar month as it is spoken: a 1–15 count within the
/// waxing or the waning half.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDay {
    /// 1–15.
    pub count: u32,
    pub phase: MoonPhase,
}

impl LunarDay {
    /// Splits a 0–29 day offset into count and phase. Offsets 0–14 are the
    /// waxing days ១កើត–១៥កើត, offsets 15–29 the waning days ១រោច–១៥រោច.
    ///
    /// ```
    /// # use chhankitek::lunar::{LunarDay, MoonPhase};
    /// assert_eq!(LunarDay::from_offset(0), LunarDay { count: 1, phase: MoonPhase::Waxing });
    /// assert_eq!(LunarDay::from_offset(14), LunarDay { count: 15, phase: MoonPhase::Waxing });
    /// assert_eq!(LunarDay::from_offset(15), LunarDay { count: 1, phase: MoonPhase::Waning });
    /// assert_eq!(LunarDay::from_offset(29), LunarDay { count: 15, phase: MoonPhase::Waning });
    /// ```
    pub fn from_offset(day: u32) -> LunarDay {
        LunarDay {
            count: day % 15 + 1,
            phase: if day > 14 {
                MoonPhase::Waning
            } else {
                MoonPhase::Waxing
            },
        }
    }
}

/// A computed Khmer lunar date. Produced fresh per query by
/// [`crate::find_lunar_date`]; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LunarDate {
    /// Day offset within the month, 0–29.
    pub day: u32,
    pub month: LunarMonth,
    /// The solar date this lunar date was computed from.
    pub solar: NaiveDate,
}

impl LunarDate {
    /// The day as it is spoken, count plus phase.
    pub fn lunar_day(&self) -> LunarDay {
        LunarDay::from_offset(self.day)
    }
}

/// Number of days in the given Khmer year: 384 for a leap-month year, 355
/// for a leap-day year, 354 otherwise.
///
/// ```
/// # use chhankitek::lunar::days_in_khmer_year;
/// assert_eq!(days_in_khmer_year(2566), 354);
/// assert_eq!(days_in_khmer_year(2567), 384);
/// assert_eq!(days_in_khmer_year(2569), 355);
/// ```
pub fn days_in_khmer_year(be_year: i32) -> i64 {
    match reckoning::year_type(be_year) {
        YearType::LeapMonth => 384,
        YearType::LeapDay => 355,
        YearType::Regular => 354,
    }
}

/// Returns `true` if the given Gregorian year is a leap year.
///
/// ```
/// # use chhankitek::lunar::is_gregorian_leap;
/// assert!(is_gregorian_leap(2000));  // divisible by 400
/// assert!(!is_gregorian_leap(1900)); // divisible by 100 but not 400
/// assert!(is_gregorian_leap(2024));
/// assert!(!is_gregorian_leap(2023));
/// ```
pub fn is_gregorian_leap(ad_year: i32) -> bool {
    (ad_year % 4 == 0 && ad_year % 100 != 0) || ad_year % 400 == 0
}

/// Number of days in the given Gregorian year. Kept here because the
/// correlation search works in integer day counts, not date objects.
pub fn days_in_gregorian_year(ad_year: i32) -> i64 {
    if is_gregorian_leap(ad_year) {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Walks the successor chain for one fixed BE year, starting at មិគសិរ,
    /// until it wraps, returning (months visited, days summed).
    fn walk_year(be_year: i32) -> (usize, i64) {
        let mut month = LunarMonth::Migasir;
        let mut months = 0;
        let mut days = 0;
        loop {
            days += month.days(be_year);
            months += 1;
            month = month.successor(be_year);
            if month == LunarMonth::Migasir {
                return (months, days);
            }
        }
    }

    #[test]
    fn month_chain_matches_year_length() {
        // Regular year: 12 months, 354 days.
        assert_eq!(walk_year(2566), (12, 354));
        // Leap-month year: 13 months through the intercalary pair, 384 days.
        assert_eq!(walk_year(2567), (13, 384));
        // Leap-day year: 12 months with a 30-day ជេស្ឋ, 355 days.
        assert_eq!(walk_year(2569), (12, 355));
    }

    #[test]
    fn year_length_follows_the_effective_type() {
        for year in 2300..2700 {
            let expected = match crate::reckoning::year_type(year) {
                YearType::LeapMonth => 384,
                YearType::LeapDay => 355,
                YearType::Regular => 354,
            };
            assert_eq!(days_in_khmer_year(year), expected, "BE {}", year);
            // The successor chain always agrees with the table.
            assert_eq!(walk_year(year).1, expected, "chain BE {}", year);
        }
    }

    #[test]
    fn intercalary_pair_is_skipped_in_ordinary_years() {
        assert_eq!(LunarMonth::Chesth.successor(2566), LunarMonth::Asath);
        assert_eq!(LunarMonth::Chesth.successor(2567), LunarMonth::PathamAsath);
        assert_eq!(LunarMonth::PathamAsath.successor(2567), LunarMonth::TutiyAsath);
        // Both intercalary months rejoin the ordinary cycle at ស្រាពណ៍.
        assert_eq!(LunarMonth::TutiyAsath.successor(2567), LunarMonth::Srapn);
        assert_eq!(LunarMonth::Asath.successor(2566), LunarMonth::Srapn);
    }

    #[test]
    fn index_round_trips() {
        for (i, month) in LunarMonth::ALL.iter().enumerate() {
            assert_eq!(month.index(), i);
            assert_eq!(LunarMonth::from_index(i), Some(*month));
        }
        assert_eq!(LunarMonth::from_index(14), None);
    }

    #[test]
    fn gregorian_year_lengths() {
        assert_eq!(days_in_gregorian_year(1900), 365);
        assert_eq!(days_in_gregorian_year(2000), 366);
        assert_eq!(days_in_gregorian_year(2023), 365);
        assert_eq!(days_in_gregorian_year(2024), 366);
    }
}
