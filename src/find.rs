//! find.rs
//!
//! The epoch-correlation search: maps an arbitrary solar date to its Khmer
//! lunar date by walking outward from a fixed reference correlation, first
//! in whole Khmer years, then in whole months, then days.
//!
//! The reference correlation — 1 January 1900 was ១កើត of បុស្ស — is a
//! historical constant asserted by the published tables, not derived here;
//! it is the sole ground truth tying the lunar cycle to the solar calendar.
//! Every conversion is a relative search from it, so each phase strictly
//! shrinks the remaining day gap and the loops are bounded by the temporal
//! distance of the query.

use chrono::{Days, Months, NaiveDate};

use crate::era;
use crate::error::Error;
use crate::lunar::{self, LunarDate, LunarMonth};

/// Lunar position of the reference date: day 0 of បុស្ស.
const EPOCH_MONTH: LunarMonth = LunarMonth::Pos;

const CURSOR_RANGE: &str = "correlation cursor left the supported date range";

/// The reference solar date, 1 January 1900.
pub fn reference_epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()
}

/// Signed whole-day difference `later - earlier`.
fn days_between(later: NaiveDate, earlier: NaiveDate) -> i64 {
    later.signed_duration_since(earlier).num_days()
}

/// Converts a solar date to its Khmer lunar date.
///
/// The cursor starts at the reference correlation and is advanced (or
/// retreated) by whole Khmer years while the target lies beyond the year
/// under the cursor, then by whole months along the cyclic successor
/// relation, including the intercalary pair in leap-month years. Whatever
/// whole days remain form the day offset.
///
/// The only failure mode is the cursor leaving the date range `chrono` can
/// represent, reported as [`Error::Inconsistency`]; for any representable
/// query the function is total and pure.
///
/// ```
/// # use chhankitek::find::{find_lunar_date, reference_epoch};
/// # use chhankitek::lunar::LunarMonth;
/// use chrono::NaiveDate;
///
/// // The reference date itself is the identity case.
/// let epoch = find_lunar_date(reference_epoch()).unwrap();
/// assert_eq!((epoch.day, epoch.month), (0, LunarMonth::Pos));
///
/// // Visak Bochea of BE 2568 is the full-moon day of ពិសាខ.
/// let visak = find_lunar_date(NaiveDate::from_ymd_opt(2024, 5, 22).unwrap()).unwrap();
/// assert_eq!((visak.day, visak.month), (14, LunarMonth::Pisakh));
/// ```
pub fn find_lunar_date(target: NaiveDate) -> Result<LunarDate, Error> {
    let mut cursor = reference_epoch();
    let mut month = EPOCH_MONTH;

    if days_between(target, cursor) > 0 {
        // Forward year walk. The span to the next ១កើត បុស្ស is the length
        // of the Khmer year named by the BE year twelve solar months ahead
        // of the cursor.
        loop {
            let ahead = cursor
                .checked_add_months(Months::new(12))
                .ok_or(Error::Inconsistency(CURSOR_RANGE))?;
            let len = lunar::days_in_khmer_year(era::be_year(ahead));
            if days_between(target, cursor) <= len {
                break;
            }
            cursor = cursor
                .checked_add_days(Days::new(len as u64))
                .ok_or(Error::Inconsistency(CURSOR_RANGE))?;
        }
    } else {
        // Backward year walk: retreat whole Khmer years until the cursor is
        // no longer after the target.
        loop {
            let len = lunar::days_in_khmer_year(era::be_year(cursor));
            cursor = cursor
                .checked_sub_days(Days::new(len as u64))
                .ok_or(Error::Inconsistency(CURSOR_RANGE))?;
            if cursor <= target {
                break;
            }
        }
    }

    // Month walk. A gap equal to the month length already belongs to the
    // next month, so the offset left for the day phase stays within 0-29.
    loop {
        let len = month.days(era::be_year(cursor));
        if days_between(target, cursor) < len {
            break;
        }
        cursor = cursor
            .checked_add_days(Days::new(len as u64))
            .ok_or(Error::Inconsistency(CURSOR_RANGE))?;
        // The successor is evaluated against the year the cursor has just
        // moved into.
        month = month.successor(era::be_year(cursor));
    }

    let day = days_between(target, cursor);
    debug_assert!((0..30).contains(&day));

    Ok(LunarDate {
        day: day as u32,
        month,
        solar: target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lunar::LunarMonth::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn lookup(y: i32, m: u32, d: u32) -> (u32, LunarMonth) {
        let lunar = find_lunar_date(date(y, m, d)).unwrap();
        (lunar.day, lunar.month)
    }

    #[test]
    fn identity_at_the_reference_epoch() {
        assert_eq!(lookup(1900, 1, 1), (0, Pos));
    }

    #[test]
    fn first_days_after_the_epoch() {
        assert_eq!(lookup(1900, 1, 2), (1, Pos));
        assert_eq!(lookup(1900, 1, 30), (29, Pos));
    }

    #[test]
    fn one_month_after_the_epoch_is_day_zero_of_the_successor() {
        // បុស្ស has 30 days, so 30 days past the epoch is ១កើត of មាឃ.
        assert_eq!(lookup(1900, 1, 31), (0, Meakh));
        assert_eq!(lookup(1900, 2, 1), (1, Meakh));
    }

    #[test]
    fn forward_searches() {
        let golden = [
            ((1900, 4, 20), (20, Chetr)),
            ((1903, 7, 15), (20, Asath)),
            ((1970, 1, 1), (22, Migasir)),
            ((1996, 9, 24), (11, Phatrabot)),
            ((2000, 1, 1), (24, Migasir)),
            ((2024, 4, 13), (4, Chetr)),
            ((2024, 4, 14), (5, Chetr)),
        ];
        for ((y, m, d), expected) in golden {
            assert_eq!(lookup(y, m, d), expected, "{:04}-{:02}-{:02}", y, m, d);
        }
    }

    #[test]
    fn backward_searches() {
        let golden = [
            ((1899, 12, 31), (28, Migasir)),
            ((1899, 12, 2), (29, Kakdek)),
            ((1899, 1, 1), (19, Pos)),
            ((1898, 6, 15), (25, Chesth)),
            ((1890, 3, 10), (19, Phalkun)),
        ];
        for ((y, m, d), expected) in golden {
            assert_eq!(lookup(y, m, d), expected, "{:04}-{:02}-{:02}", y, m, d);
        }
    }

    #[test]
    fn festival_days_match_published_calendars() {
        // Visak Bochea, the full moon of ពិសាខ.
        assert_eq!(lookup(2023, 5, 4), (14, Pisakh));
        assert_eq!(lookup(2024, 5, 22), (14, Pisakh));
        assert_eq!(lookup(2025, 5, 11), (14, Pisakh));
        // In leap-month BE 2562 the festival slides into ជេស្ឋ.
        assert_eq!(lookup(2018, 5, 29), (14, Chesth));
        // Pchum Ben, ១៥រោច of ភទ្របទ.
        assert_eq!(lookup(2024, 10, 2), (29, Phatrabot));
    }

    #[test]
    fn intercalary_months_are_reachable_in_leap_month_years() {
        // BE 2559 carries the intercalary pair.
        assert_eq!(lookup(2015, 7, 1), (15, PathamAsath));
        assert_eq!(lookup(2015, 7, 31), (15, TutiyAsath));
        assert_eq!(lookup(2015, 8, 1), (16, TutiyAsath));
    }

    #[test]
    fn conversion_is_pure() {
        let target = date(2024, 5, 22);
        assert_eq!(find_lunar_date(target), find_lunar_date(target));
    }

    #[test]
    fn result_carries_the_queried_solar_date() {
        for target in [date(1890, 3, 10), date(1900, 1, 1), date(2024, 10, 2)] {
            assert_eq!(find_lunar_date(target).unwrap().solar, target);
        }
    }

    #[test]
    fn day_offset_stays_in_range_across_a_long_span() {
        // Sweep a stretch of consecutive days crossing month and year
        // boundaries, including the intercalary months of BE 2559.
        let mut target = date(2014, 11, 1);
        let mut previous: Option<LunarDate> = None;
        while target < date(2016, 3, 1) {
            let lunar = find_lunar_date(target).unwrap();
            assert!(lunar.day < 30, "{} day {}", target, lunar.day);
            if let Some(prev) = previous {
                // Consecutive solar days either advance the day offset by
                // one or start a new month at offset zero.
                if lunar.month == prev.month {
                    assert_eq!(lunar.day, prev.day + 1, "{}", target);
                } else {
                    assert_eq!(lunar.day, 0, "{}", target);
                    assert_eq!(
                        lunar.month,
                        prev.month.successor(crate::era::be_year(target)),
                        "{}",
                        target
                    );
                }
            }
            previous = Some(lunar);
            target = target.succ_opt().unwrap();
        }
    }
}
