//! locale.rs
//!
//! Display-name tables for rendered lunar dates. A [`Locale`] is plain data,
//! threaded explicitly into the formatter — there is no process-wide mutable
//! default. The crate ships one built-in table, [`KHMER`].
//!
//! Besides the name tables a locale carries the glyphs for its digit script;
//! [`Locale::postformat`] rewrites every Arabic digit in a rendered string
//! through that table, which is how ពុទ្ធសករាជ 2540 becomes ពុទ្ធសករាជ ២៥៤០.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::lunar::{LunarMonth, MoonPhase};

/// Matches a single Arabic digit. The post-formatter must not touch digits
/// already in a local script, so this is explicitly `[0-9]`, not `\d`.
static ARABIC_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new("[0-9]").unwrap());

/// Name tables consumed by the formatter.
#[derive(Debug, Clone, Copy)]
pub struct Locale {
    /// Weekday names, indexed 0 = Sunday through 6 = Saturday.
    pub weekdays: [&'static str; 7],
    pub weekdays_short: [&'static str; 7],
    /// Month names in [`LunarMonth`] table order.
    pub lunar_months: [&'static str; 14],
    /// Moon-phase labels, indexed by [`MoonPhase::index`].
    pub moon_phases: [&'static str; 2],
    pub moon_phases_short: [&'static str; 2],
    /// Full moon-day labels for the 30 day offsets, ១កើត through ១៥រោច.
    pub moon_days: [&'static str; 30],
    /// The 12-year animal cycle.
    pub animal_years: [&'static str; 12],
    /// The 10-year ស័ក cycle.
    pub era_years: [&'static str; 10],
    /// Digit glyphs for 0–9 in the locale's script.
    pub digits: [&'static str; 10],
}

impl Locale {
    /// Display name of a lunar month.
    ///
    /// ```
    /// # use chhankitek::locale::KHMER;
    /// # use chhankitek::lunar::LunarMonth;
    /// assert_eq!(KHMER.month_name(LunarMonth::Pos), "បុស្ស");
    /// ```
    pub fn month_name(&self, month: LunarMonth) -> &'static str {
        self.lunar_months[month.index()]
    }

    /// Long label of a moon phase.
    pub fn moon_phase_name(&self, phase: MoonPhase) -> &'static str {
        self.moon_phases[phase.index()]
    }

    /// Short label of a moon phase.
    pub fn moon_phase_short(&self, phase: MoonPhase) -> &'static str {
        self.moon_phases_short[phase.index()]
    }

    /// Rewrites every Arabic digit in `text` through the locale's digit
    /// table. Applied to all rendered output as the final step.
    ///
    /// ```
    /// # use chhankitek::locale::KHMER;
    /// assert_eq!(KHMER.postformat("ពុទ្ធសករាជ 2540"), "ពុទ្ធសករាជ ២៥៤០");
    /// assert_eq!(KHMER.postformat("no digits"), "no digits");
    /// ```
    pub fn postformat(&self, text: &str) -> String {
        ARABIC_DIGIT
            .replace_all(text, |caps: &regex::Captures<'_>| {
                self.digits[(caps[0].as_bytes()[0] - b'0') as usize]
            })
            .into_owned()
    }
}

/// The built-in Khmer locale table.
pub const KHMER: Locale = Locale {
    weekdays: [
        "អាទិត្យ",
        "ច័ន្ទ",
        "អង្គារ",
        "ពុធ",
        "ព្រហស្បតិ៍",
        "សុក្រ",
        "សៅរ៍",
    ],
    weekdays_short: ["អា", "ច", "អ", "ពុ", "ព្រ", "សុ", "ស"],
    lunar_months: [
        "មិគសិរ",
        "បុស្ស",
        "មាឃ",
        "ផល្គុន",
        "ចេត្រ",
        "ពិសាខ",
        "ជេស្ឋ",
        "អាសាឍ",
        "ស្រាពណ៍",
        "ភទ្របទ",
        "អស្សុជ",
        "កក្ដិក",
        "បឋមាសាឍ",
        "ទុតិយាសាឍ",
    ],
    moon_phases: ["កើត", "រោច"],
    moon_phases_short: ["ក", "រ"],
    moon_days: [
        "១កើត",
        "២កើត",
        "៣កើត",
        "៤កើត",
        "៥កើត",
        "៦កើត",
        "៧កើត",
        "៨កើត",
        "៩កើត",
        "១០កើត",
        "១១កើត",
        "១២កើត",
        "១៣កើត",
        "១៤កើត",
        "១៥កើត",
        "១រោច",
        "២រោច",
        "៣រោច",
        "៤រោច",
        "៥រោច",
        "៦រោច",
        "៧រោច",
        "៨រោច",
        "៩រោច",
        "១០រោច",
        "១១រោច",
        "១២រោច",
        "១៣រោច",
        "១៤រោច",
        "១៥រោច",
    ],
    animal_years: [
        "ជូត",
        "ឆ្លូវ",
        "ខាល",
        "ថោះ",
        "រោង",
        "ម្សាញ់",
        "មមី",
        "មមែ",
        "វក",
        "រកា",
        "ច",
        "កុរ",
    ],
    era_years: [
        "សំរឹទ្ធិស័ក",
        "ឯកស័ក",
        "ទោស័ក",
        "ត្រីស័ក",
        "ចត្វាស័ក",
        "បញ្ចស័ក",
        "ឆស័ក",
        "សប្តស័ក",
        "អដ្ឋស័ក",
        "នព្វស័ក",
    ],
    digits: ["០", "១", "២", "៣", "៤", "៥", "៦", "៧", "៨", "៩"],
};
