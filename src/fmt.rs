//! Rendering decomposed dates as display strings.
//!
//! The fixed layouts mirror what chat and history views show; [`template`]
//! expands an arbitrary pattern.

use chrono::{NaiveTime, Timelike};

use crate::calendar::Calendar;
use crate::date::DateProperty;

/// A template token.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Token {
    Hour24,
    Hour12,
    Hour24Short,
    Hour12Short,
    Minute,
    MinuteShort,
    Second,
    SecondShort,
    Year,
    YearShort,
    DayName,
    MonthName,
    Day,
    Month,
}

impl Token {
    /// The pattern text this token replaces.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hour24 => "HH",
            Self::Hour12 => "hh",
            Self::Hour24Short => "H",
            Self::Hour12Short => "h",
            Self::Minute => "mm",
            Self::MinuteShort => "m",
            Self::Second => "ss",
            Self::SecondShort => "s",
            Self::Year => "yyyy",
            Self::YearShort => "yy",
            Self::DayName => "dddd",
            Self::MonthName => "MMMM",
            Self::Day => "dd",
            Self::Month => "MM",
        }
    }

    fn value(self, calendar: &dyn Calendar, date: &DateProperty, time: NaiveTime) -> String {
        match self {
            Self::Hour24 => format!("{:02}", time.hour()),
            Self::Hour12 => format!("{:02}", time.hour() % 12),
            Self::Hour24Short => time.hour().to_string(),
            Self::Hour12Short => (time.hour() % 12).to_string(),
            Self::Minute => format!("{:02}", time.minute()),
            Self::MinuteShort => time.minute().to_string(),
            Self::Second => format!("{:02}", time.second()),
            Self::SecondShort => time.second().to_string(),
            Self::Year => date.year.to_string(),
            Self::YearShort => last_chars(&date.year.to_string(), 2).to_owned(),
            Self::DayName => calendar.day_name(date.day_of_week).to_owned(),
            Self::MonthName => calendar.month_name(date.month).to_owned(),
            Self::Day => format!("{:02}", date.day),
            Self::Month => format!("{:02}", date.month),
        }
    }
}

/// Recognized template tokens, in substitution order.
///
/// Each token is replaced everywhere before the next one is looked at, so a
/// token must come before any shorter token it contains (`HH` before `H`,
/// `yyyy` before `yy`).
pub const TOKENS: [Token; 14] = [
    Token::Hour24,
    Token::Hour12,
    Token::Hour24Short,
    Token::Hour12Short,
    Token::Minute,
    Token::MinuteShort,
    Token::Second,
    Token::SecondShort,
    Token::Year,
    Token::YearShort,
    Token::DayName,
    Token::MonthName,
    Token::Day,
    Token::Month,
];

/// `"{weekday}, {day} {month} {year}, {HH:MM}"`, e.g.
/// `"Monday, 1 January 2024, 09:30"`.
pub fn paper(calendar: &dyn Calendar, date: &DateProperty, time: NaiveTime) -> String {
    format!(
        "{}, {} {} {}, {:02}:{:02}",
        calendar.day_name(date.day_of_week),
        date.day,
        calendar.month_name(date.month),
        date.year,
        time.hour(),
        time.minute(),
    )
}

/// `"{day} {month} {year}"`.
pub fn little(calendar: &dyn Calendar, date: &DateProperty) -> String {
    format!(
        "{} {} {}",
        date.day,
        calendar.month_name(date.month),
        date.year
    )
}

/// `"{year} {month} {day} - {weekday}"`.
pub fn history(calendar: &dyn Calendar, date: &DateProperty) -> String {
    format!(
        "{} {} {} - {}",
        date.year,
        calendar.month_name(date.month),
        date.day,
        calendar.day_name(date.day_of_week)
    )
}

/// `"{year} {month number} {day} - {weekday}"`.
pub fn number(calendar: &dyn Calendar, date: &DateProperty) -> String {
    format!(
        "{} {} {} - {}",
        date.year,
        date.month,
        date.day,
        calendar.day_name(date.day_of_week)
    )
}

/// Expands the [`TOKENS`] found in `pattern`.
///
/// | token  | value                           |
/// |--------|---------------------------------|
/// | `HH`   | hour `00..=23`                  |
/// | `hh`   | hour modulo 12, `00..=11`       |
/// | `H`    | hour, unpadded                  |
/// | `h`    | hour modulo 12, unpadded        |
/// | `mm`   | minute `00..=59`                |
/// | `m`    | minute, unpadded                |
/// | `ss`   | second `00..=59`                |
/// | `s`    | second, unpadded                |
/// | `yyyy` | full year                       |
/// | `yy`   | last two characters of the year |
/// | `dddd` | weekday name                    |
/// | `MMMM` | month name                      |
/// | `dd`   | day `01..=31`                   |
/// | `MM`   | month `01..=12`                 |
///
/// # Example
///
/// ```
/// use chrono::NaiveTime;
/// use tarikh::{DateProperty, calendar::Gregorian, fmt};
///
/// let date = DateProperty { year: 2024, month: 3, day: 9, day_of_week: 7 };
/// let time = NaiveTime::from_hms_opt(13, 5, 0).unwrap();
/// assert_eq!("2024-24 03/09", fmt::template(&Gregorian, &date, time, "yyyy-yy MM/dd"));
/// assert_eq!("13:05 01", fmt::template(&Gregorian, &date, time, "HH:mm hh"));
/// ```
pub fn template(
    calendar: &dyn Calendar,
    date: &DateProperty,
    time: NaiveTime,
    pattern: &str,
) -> String {
    TOKENS.into_iter().fold(pattern.to_owned(), |rendered, token| {
        let text = token.as_str();
        if rendered.contains(text) {
            rendered.replace(text, &token.value(calendar, date, time))
        } else {
            rendered
        }
    })
}

fn last_chars(s: &str, n: usize) -> &str {
    let start = s.char_indices().rev().nth(n - 1).map_or(0, |(i, _)| i);
    &s[start..]
}
