//! format.rs
//!
//! Renders a computed [`LunarDate`] into text. With no format given the
//! renderer produces one fixed sentence naming the weekday, the moon day,
//! the month, the animal year, the ស័ក year and the Buddhist-Era year. A
//! template string is treated as a sequence of single-character tokens;
//! every recognised token is substituted independently and every other
//! character passes through unchanged. There is no escaping mechanism.
//!
//! All output is passed through the locale's post-formatter as the final
//! step (digit-script substitution for the built-in Khmer table).

use chrono::Datelike;

use crate::era;
use crate::error::Error;
use crate::locale::Locale;
use crate::lunar::LunarDate;

/// The format argument accepted by the renderer.
#[derive(Debug, Clone, Copy)]
pub enum LunarFormat<'a> {
    /// No format: the fixed default sentence.
    Default,
    /// A token template, e.g. `"d N ខែm ឆ្នាំa"`.
    Template(&'a str),
    /// Named-field selection. The surface accepts it for compatibility but
    /// it is not a supported format; the renderer reports it as invalid.
    Fields(&'a [&'a str]),
}

/// One parsed template element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `W` — weekday name
    WeekdayFull,
    /// `w` — short weekday name
    WeekdayShort,
    /// `d` — moon-day count
    DayCount,
    /// `D` — moon-day count, zero-padded to two digits
    DayCountPadded,
    /// `N` — moon-phase label (កើត/រោច)
    PhaseFull,
    /// `n` — short moon-phase label
    PhaseShort,
    /// `o` — full moon-day label (១កើត … ១៥រោច)
    MoonDay,
    /// `m` — lunar month name
    MonthName,
    /// `a` — animal-year name
    AnimalYear,
    /// `e` — ស័ក-year label
    EraYear,
    /// `b` — Buddhist-Era year
    BuddhistEra,
    /// `c` — Gregorian year
    ChristianEra,
    /// `j` — Jolak Sakaraj year
    JolakSakaraj,
    /// Any other character, emitted verbatim.
    Literal(char),
}

/// Parses a template into tokens, one per character.
fn parse_template(template: &str) -> Vec<Token> {
    template
        .chars()
        .map(|c| match c {
            'W' => Token::WeekdayFull,
            'w' => Token::WeekdayShort,
            'd' => Token::DayCount,
            'D' => Token::DayCountPadded,
            'N' => Token::PhaseFull,
            'n' => Token::PhaseShort,
            'o' => Token::MoonDay,
            'm' => Token::MonthName,
            'a' => Token::AnimalYear,
            'e' => Token::EraYear,
            'b' => Token::BuddhistEra,
            'c' => Token::ChristianEra,
            'j' => Token::JolakSakaraj,
            other => Token::Literal(other),
        })
        .collect()
}

/// Weekday of the underlying solar date, 0 = Sunday through 6 = Saturday.
fn weekday_index(lunar: &LunarDate) -> usize {
    lunar.solar.weekday().num_days_from_sunday() as usize
}

/// Resolves one token against the computed date and the locale table.
fn render_token(token: Token, lunar: &LunarDate, locale: &Locale) -> String {
    let be = era::be_year(lunar.solar);
    match token {
        Token::WeekdayFull => locale.weekdays[weekday_index(lunar)].to_string(),
        Token::WeekdayShort => locale.weekdays_short[weekday_index(lunar)].to_string(),
        Token::DayCount => lunar.lunar_day().count.to_string(),
        Token::DayCountPadded => format!("{:02}", lunar.lunar_day().count),
        Token::PhaseFull => locale.moon_phase_name(lunar.lunar_day().phase).to_string(),
        Token::PhaseShort => locale.moon_phase_short(lunar.lunar_day().phase).to_string(),
        Token::MoonDay => locale.moon_days[lunar.day as usize % 30].to_string(),
        Token::MonthName => locale.month_name(lunar.month).to_string(),
        Token::AnimalYear => locale.animal_years[era::animal_year_index(be)].to_string(),
        Token::EraYear => locale.era_years[era::era_year_index(be)].to_string(),
        Token::BuddhistEra => be.to_string(),
        Token::ChristianEra => format!("{:04}", lunar.solar.year()),
        Token::JolakSakaraj => era::jolak_sakaraj(be).to_string(),
        Token::Literal(c) => c.to_string(),
    }
}

/// Renders a lunar date with the given format and locale.
///
/// ```
/// # use chhankitek::find::find_lunar_date;
/// # use chhankitek::format::{format_lunar_date, LunarFormat};
/// # use chhankitek::locale::KHMER;
/// use chrono::NaiveDate;
///
/// let lunar = find_lunar_date(NaiveDate::from_ymd_opt(1996, 9, 24).unwrap()).unwrap();
///
/// let sentence = format_lunar_date(&lunar, LunarFormat::Default, &KHMER).unwrap();
/// assert_eq!(sentence, "ថ្ងៃអង្គារ ១២កើត ខែភទ្របទ ឆ្នាំជូត អដ្ឋស័ក ពុទ្ធសករាជ ២៥៤០");
///
/// let brief = format_lunar_date(&lunar, LunarFormat::Template("d N ខែm"), &KHMER).unwrap();
/// assert_eq!(brief, "១២ កើត ខែភទ្របទ");
/// ```
pub fn format_lunar_date(
    lunar: &LunarDate,
    format: LunarFormat<'_>,
    locale: &Locale,
) -> Result<String, Error> {
    match format {
        LunarFormat::Default => {
            let day = lunar.lunar_day();
            let be = era::be_year(lunar.solar);
            let sentence = format!(
                "ថ្ងៃ{} {}{} ខែ{} ឆ្នាំ{} {} ពុទ្ធសករាជ {}",
                locale.weekdays[weekday_index(lunar)],
                day.count,
                locale.moon_phase_name(day.phase),
                locale.month_name(lunar.month),
                locale.animal_years[era::animal_year_index(be)],
                locale.era_years[era::era_year_index(be)],
                be,
            );
            Ok(locale.postformat(&sentence))
        }
        LunarFormat::Template(template) => {
            let rendered: String = parse_template(template)
                .into_iter()
                .map(|token| render_token(token, lunar, locale))
                .collect();
            Ok(locale.postformat(&rendered))
        }
        LunarFormat::Fields(fields) => {
            Err(Error::InvalidFormat(format!("[{}]", fields.join(", "))))
        }
    }
}
