//! Conversion from the Gregorian calendar into the traditional Khmer lunar
//! calendar (chhankitek, ចន្ទគតិ), following the historical Bodithey/Avoman
//! reckoning.
//!
//! A conversion produces the lunar month, the day of the month with its
//! waxing/waning phase, and the Buddhist-Era year, and can render the
//! result as Khmer text. The reckoning also classifies any Buddhist-Era
//! year as a regular year (354 days), a leap-month year with the
//! intercalary month pair (384 days), or a leap-day year in which ជេស្ឋ
//! gains a 30th day (355 days).
//!
//! # Overview
//!
//! - **[`reckoning`]**: the per-year constants (aharkun, avoman, bodithey)
//!   and the year-type classification with its mutual-exclusion rule.
//! - **[`lunar`]**: the month enumeration, successor relation and length
//!   tables, plus the [`LunarDate`] value a conversion produces.
//! - **[`era`]**: Buddhist-Era, Moha Sakaraj and Jolak Sakaraj numbering
//!   and the animal/ស័ក display cycles.
//! - **[`find`]**: the correlation search outward from the reference date
//!   (1 January 1900 = ១កើត បុស្ស).
//! - **[`format`]**: the default sentence and the token mini-language.
//! - **[`locale`]**: display-name tables; the built-in Khmer table is
//!   [`locale::KHMER`].
//!
//! # Examples
//!
//! ```
//! use chhankitek::{to_lunar_date, LunarFormat};
//! use chhankitek::locale::KHMER;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(1996, 9, 24).unwrap();
//! let text = to_lunar_date(date, LunarFormat::Default, &KHMER).unwrap();
//! assert_eq!(text, "ថ្ងៃអង្គារ ១២កើត ខែភទ្របទ ឆ្នាំជូត អដ្ឋស័ក ពុទ្ធសករាជ ២៥៤០");
//! ```
//!
//! The same surface is available as methods on [`chrono::NaiveDate`]:
//!
//! ```
//! use chhankitek::{KhmerLunar, LunarMonth};
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2024, 5, 22).unwrap();
//! assert_eq!(date.kh_month().unwrap(), LunarMonth::Pisakh);
//! assert_eq!(date.kh_year(), 2568);
//! ```

pub mod era;
pub mod error;
pub mod find;
pub mod format;
pub mod locale;
pub mod lunar;
pub mod reckoning;

pub use error::Error;
pub use find::find_lunar_date;
pub use format::{format_lunar_date, LunarFormat};
pub use locale::Locale;
pub use lunar::{LunarDate, LunarDay, LunarMonth, MoonPhase};
pub use reckoning::{RawYearType, YearConstants, YearType};

use chrono::NaiveDate;

/// Converts a solar date and renders it in one step.
pub fn to_lunar_date(
    date: NaiveDate,
    format: LunarFormat<'_>,
    locale: &Locale,
) -> Result<String, Error> {
    let lunar = find::find_lunar_date(date)?;
    format::format_lunar_date(&lunar, format, locale)
}

/// Parses a textual Khmer lunar date back into a solar date.
///
/// The inverse conversion is part of the exposed contract but has no
/// implementation; calling it always fails with [`Error::Unsupported`].
pub fn read_lunar_date(_text: &str) -> Result<NaiveDate, Error> {
    Err(Error::Unsupported(
        "reading a Khmer lunar date back into a solar date",
    ))
}

/// Khmer-calendar accessors for [`chrono::NaiveDate`].
pub trait KhmerLunar {
    /// Day offset within the lunar month, as count and phase.
    fn kh_day(&self) -> Result<LunarDay, Error>;
    /// The lunar month containing this date.
    fn kh_month(&self) -> Result<LunarMonth, Error>;
    /// The Buddhist-Era year of this date.
    fn kh_year(&self) -> i32;
    /// Full conversion and rendering, as [`to_lunar_date`].
    fn to_lunar_date(&self, format: LunarFormat<'_>, locale: &Locale) -> Result<String, Error>;
}

impl KhmerLunar for NaiveDate {
    fn kh_day(&self) -> Result<LunarDay, Error> {
        Ok(find::find_lunar_date(*self)?.lunar_day())
    }

    fn kh_month(&self) -> Result<LunarMonth, Error> {
        Ok(find::find_lunar_date(*self)?.month)
    }

    fn kh_year(&self) -> i32 {
        era::be_year(*self)
    }

    fn to_lunar_date(&self, format: LunarFormat<'_>, locale: &Locale) -> Result<String, Error> {
        to_lunar_date(*self, format, locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::KHMER;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn conversion_and_rendering_in_one_step() {
        let text = to_lunar_date(date(1996, 9, 24), LunarFormat::Default, &KHMER).unwrap();
        assert_eq!(text, "ថ្ងៃអង្គារ ១២កើត ខែភទ្របទ ឆ្នាំជូត អដ្ឋស័ក ពុទ្ធសករាជ ២៥៤០");
    }

    #[test]
    fn extension_trait_mirrors_the_free_functions() {
        let d = date(1996, 9, 24);
        let day = d.kh_day().unwrap();
        assert_eq!((day.count, day.phase), (12, MoonPhase::Waxing));
        assert_eq!(d.kh_month().unwrap(), LunarMonth::Phatrabot);
        assert_eq!(d.kh_year(), 2540);
        assert_eq!(
            d.to_lunar_date(LunarFormat::Template("b"), &KHMER).unwrap(),
            "២៥៤០"
        );
    }

    #[test]
    fn reading_a_lunar_date_fails_loudly() {
        let err = read_lunar_date("ថ្ងៃអង្គារ ១២កើត ខែភទ្របទ").unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }
}
