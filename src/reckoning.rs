//! reckoning.rs
//!
//! The historical Bodithey/Avoman reckoning that decides, for a given year
//! of the Buddhist Era, whether that year is a regular year, a leap-month
//! year (13 lunar months, អធិកមាស), or a leap-day year (one month gains a
//! 30th day, អធិកវារៈ). The arithmetic follows the tables published in
//! "Pratitin Soryakkatik-Chankatik 1900-1999" by Roath Kim Soeun.
//!
//! The module includes:
//!
//! - **[`aharkun`] (អាហារគុណ)**: the intermediate value feeding both of the
//!   following two.
//! - **[`bodithey`] (បូតិថី)**: a 0–29 value detecting leap-month years.
//! - **[`avoman`] (អាវមាន)**: a 0–691 value detecting leap-day years.
//! - **[`kromthupul`] / [`is_solar_leap`]**: solar-leap status within the
//!   Khmer reckoning.
//! - **[`YearConstants`]**: all of the above bundled, derived from a single
//!   aharkun evaluation.
//! - **[`raw_year_type`] / [`year_type`]**: the year classification before
//!   and after the mutual-exclusion rule.
//!
//! All functions are total over `i32` years. Floors use Euclidean division
//! and remainders are Euclidean, so the documented value ranges hold for
//! pre-epoch (negative) years as well.

/// Aharkun (អាហារគុណ), the intermediate value used by both the Bodithey and
/// the Avoman calculation.
///
/// ```
/// # use chhankitek::reckoning::aharkun;
/// assert_eq!(aharkun(2443), 892_331);
/// assert_eq!(aharkun(2471), 902_558);
/// ```
pub fn aharkun(be_year: i32) -> i64 {
    let t = be_year as i64 * 292_207 + 499;
    t.div_euclid(800) + 4
}

/// Remainder of the aharkun division, 0–799.
///
/// ```
/// # use chhankitek::reckoning::aharkun_mod;
/// assert_eq!(aharkun_mod(2443), 600);
/// ```
pub fn aharkun_mod(be_year: i32) -> i64 {
    let t = be_year as i64 * 292_207 + 499;
    t.rem_euclid(800)
}

/// Kromthupul, 1–800.
///
/// ```
/// # use chhankitek::reckoning::kromthupul;
/// assert_eq!(kromthupul(2443), 200);
/// assert_eq!(kromthupul(2471), 4);
/// ```
pub fn kromthupul(be_year: i32) -> i64 {
    800 - aharkun_mod(be_year)
}

/// Returns `true` if the given BE year is a solar leap year under the Khmer
/// reckoning (kromthupul at most 207).
///
/// ```
/// # use chhankitek::reckoning::is_solar_leap;
/// assert!(is_solar_leap(2443));
/// assert!(!is_solar_leap(2444));
/// ```
pub fn is_solar_leap(be_year: i32) -> bool {
    kromthupul(be_year) <= 207
}

/// Avoman (អាវមាន), 0–691. Years with a small avoman are candidates for an
/// extra day.
///
/// ```
/// # use chhankitek::reckoning::avoman;
/// assert_eq!(avoman(2443), 338);
/// assert_eq!(avoman(2471), 39);
/// ```
pub fn avoman(be_year: i32) -> i64 {
    (11 * aharkun(be_year) + 25).rem_euclid(692)
}

/// Bodithey (បូតិថី), 0–29. Years with a bodithey near the ends of the range
/// are candidates for an extra month.
///
/// ```
/// # use chhankitek::reckoning::bodithey;
/// assert_eq!(bodithey(2443), 4);
/// assert_eq!(bodithey(2471), 14);
/// ```
pub fn bodithey(be_year: i32) -> i64 {
    let ahk = aharkun(be_year);
    let avml = (11 * ahk + 25).div_euclid(692);
    (avml + ahk + 29).rem_euclid(30)
}

/// The per-year intermediate values, derived from a single aharkun
/// evaluation. Pure function of the year; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearConstants {
    pub aharkun: i64,
    /// 0–691.
    pub avoman: i64,
    /// 0–29.
    pub bodithey: i64,
    pub solar_leap: bool,
}

impl YearConstants {
    /// Computes the constants for one BE year.
    ///
    /// ```
    /// # use chhankitek::reckoning::YearConstants;
    /// let c = YearConstants::of(2471);
    /// assert_eq!((c.aharkun, c.avoman, c.bodithey, c.solar_leap), (902_558, 39, 14, true));
    /// ```
    pub fn of(be_year: i32) -> Self {
        let ahk = aharkun(be_year);
        let avml = (11 * ahk + 25).div_euclid(692);
        YearConstants {
            aharkun: ahk,
            avoman: (11 * ahk + 25).rem_euclid(692),
            bodithey: (avml + ahk + 29).rem_euclid(30),
            solar_leap: is_solar_leap(be_year),
        }
    }
}

/// Year classification before the mutual-exclusion rule is applied. A year
/// may mathematically qualify for both an extra month and an extra day at
/// once; see [`year_type`] for how that case is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawYearType {
    Regular,
    LeapMonth,
    LeapDay,
    LeapMonthAndDay,
}

/// The resolved classification. By calendrical rule a single year never
/// carries both an inserted month and an inserted day, so this enumeration
/// has no combined variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearType {
    Regular,
    LeapMonth,
    LeapDay,
}

/// Classifies a BE year from its bodithey and avoman values, before the
/// mutual-exclusion rule.
///
/// The plain thresholds (bodithey ≥ 25 or ≤ 5; avoman ≤ 126 in a solar-leap
/// year, ≤ 137 otherwise) carry three corrective exceptions that need a
/// lookahead to the following year:
///
/// - bodithey 25 followed by 5: only the 5 side registers as leap-month;
/// - bodithey 24 followed by 6: the 24 side must register as leap-month;
/// - avoman 137 followed by 0: the 137 side stays regular.
///
/// ```
/// # use chhankitek::reckoning::{raw_year_type, RawYearType};
/// assert_eq!(raw_year_type(2445), RawYearType::LeapMonthAndDay);
/// assert_eq!(raw_year_type(2443), RawYearType::LeapMonth);
/// assert_eq!(raw_year_type(2471), RawYearType::LeapDay);
/// assert_eq!(raw_year_type(2444), RawYearType::Regular);
/// ```
pub fn raw_year_type(be_year: i32) -> RawYearType {
    let this = YearConstants::of(be_year);
    let next = YearConstants::of(be_year + 1);

    let mut month_leap = this.bodithey >= 25 || this.bodithey <= 5;
    // The 25/5 pair may only register on the 5 side, and the 24/6 pair must
    // register on the 24 side.
    if this.bodithey == 25 && next.bodithey == 5 {
        month_leap = false;
    }
    if this.bodithey == 24 && next.bodithey == 6 {
        month_leap = true;
    }

    let day_leap = if this.solar_leap {
        this.avoman <= 126
    } else {
        // A year landing exactly on the 137/0 boundary stays regular.
        this.avoman <= 137 && next.avoman != 0
    };

    match (month_leap, day_leap) {
        (true, true) => RawYearType::LeapMonthAndDay,
        (true, false) => RawYearType::LeapMonth,
        (false, true) => RawYearType::LeapDay,
        (false, false) => RawYearType::Regular,
    }
}

/// Resolves the raw classification to the year's effective type.
///
/// A year that qualifies for both insertions keeps only the month; the day
/// is deferred to the following year, which absorbs it if (and only if) its
/// own raw classification is regular. The result depends on nothing but the
/// year's own raw type and the preceding year's raw type.
///
/// ```
/// # use chhankitek::reckoning::{year_type, YearType};
/// assert_eq!(year_type(2445), YearType::LeapMonth); // raw: both
/// assert_eq!(year_type(2446), YearType::LeapDay);   // absorbs the deferred day
/// assert_eq!(year_type(2447), YearType::Regular);
/// ```
pub fn year_type(be_year: i32) -> YearType {
    match raw_year_type(be_year) {
        RawYearType::LeapMonthAndDay => YearType::LeapMonth,
        RawYearType::LeapMonth => YearType::LeapMonth,
        RawYearType::LeapDay => YearType::LeapDay,
        RawYearType::Regular => {
            if raw_year_type(be_year - 1) == RawYearType::LeapMonthAndDay {
                YearType::LeapDay
            } else {
                YearType::Regular
            }
        }
    }
}

/// Returns `true` if the BE year effectively carries the intercalary month
/// pair (អធិកមាស, 384 days).
pub fn is_leap_month(be_year: i32) -> bool {
    year_type(be_year) == YearType::LeapMonth
}

/// Returns `true` if the BE year effectively carries the extra day in ជេស្ឋ
/// (អធិកវារៈ, 355 days).
pub fn is_leap_day(be_year: i32) -> bool {
    year_type(be_year) == YearType::LeapDay
}
