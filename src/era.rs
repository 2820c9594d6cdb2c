//! era.rs
//!
//! Year numbering. The calendar is anchored to the Buddhist Era (BE); the
//! Moha Sakaraj and Jolak Sakaraj eras, the 12-year animal cycle and the
//! 10-year ស័ក cycle are derived from it for display.

use chrono::{Datelike, NaiveDate};

/// The solar month (1-based, Gregorian numbering) in which the Khmer solar
/// new year falls: មេសា, April. Dates before it belong to the previous
/// Buddhist-Era year.
const NEW_YEAR_SOLAR_MONTH: u32 = 4;

/// Buddhist-Era year of a solar date: the Gregorian year plus 543 before
/// the មេសា boundary and plus 544 from it on.
///
/// ```
/// # use chhankitek::era::be_year;
/// use chrono::NaiveDate;
///
/// let before = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap();
/// let after = NaiveDate::from_ymd_opt(1900, 4, 20).unwrap();
/// assert_eq!(be_year(before), 2443);
/// assert_eq!(be_year(after), 2444);
/// ```
pub fn be_year(date: NaiveDate) -> i32 {
    if date.month() < NEW_YEAR_SOLAR_MONTH {
        date.year() + 543
    } else {
        date.year() + 544
    }
}

/// Moha Sakaraj year for a Gregorian year.
pub fn moha_sakaraj(ad_year: i32) -> i32 {
    ad_year - 77
}

/// Jolak Sakaraj year for a BE year.
///
/// ```
/// # use chhankitek::era::jolak_sakaraj;
/// assert_eq!(jolak_sakaraj(2540), 1358);
/// ```
pub fn jolak_sakaraj(be_year: i32) -> i32 {
    be_year - 1182
}

/// Index of the BE year in the 12-year animal cycle, 0–11.
///
/// Reduced with Euclidean remainder so the locale lookup stays in range for
/// pre-epoch years.
///
/// ```
/// # use chhankitek::era::animal_year_index;
/// assert_eq!(animal_year_index(2540), 0); // ជូត
/// assert_eq!(animal_year_index(2568), 4); // រោង
/// ```
pub fn animal_year_index(be_year: i32) -> usize {
    (be_year + 4).rem_euclid(12) as usize
}

/// Index of the BE year in the 10-year ស័ក cycle, 0–9, taken from the Jolak
/// Sakaraj year.
///
/// ```
/// # use chhankitek::era::era_year_index;
/// assert_eq!(era_year_index(2540), 8); // អដ្ឋស័ក
/// ```
pub fn era_year_index(be_year: i32) -> usize {
    jolak_sakaraj(be_year).rem_euclid(10) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn be_year_boundary_sits_at_april() {
        assert_eq!(be_year(date(2024, 3, 31)), 2567);
        assert_eq!(be_year(date(2024, 4, 1)), 2568);
        assert_eq!(be_year(date(2024, 12, 31)), 2568);
        assert_eq!(be_year(date(1900, 1, 1)), 2443);
    }

    #[test]
    fn secondary_eras() {
        assert_eq!(moha_sakaraj(1996), 1919);
        assert_eq!(jolak_sakaraj(2443), 1261);
        assert_eq!(jolak_sakaraj(2568), 1386);
    }

    #[test]
    fn cyclic_indices() {
        assert_eq!(animal_year_index(2443), 11);
        assert_eq!(era_year_index(2443), 1);
        assert_eq!(animal_year_index(2540), 0);
        assert_eq!(era_year_index(2540), 8);
        // In range even for pre-epoch years.
        for year in -100..100 {
            assert!(animal_year_index(year) < 12);
            assert!(era_year_index(year) < 10);
        }
    }
}
