//! Persian (Jalali, Solar Hijri) calendar.
//!
//! Leap years follow the same 4/100/400-year rule as the Gregorian calendar
//! rather than the astronomical 33-year pattern, so dates drift from the
//! official Iranian calendar by a day around some equinoxes.

use super::{Calendar, CalendarKind, MonthTable, lookup, solar};
use crate::date::YearType;

pub const MONTHS_START: MonthTable = [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336, 365];
pub const LEAP_MONTHS_START: MonthTable =
    [0, 31, 62, 93, 124, 155, 186, 216, 246, 276, 306, 336, 366];

/// 1 Farvardin of year 0 on the common axis.
pub const EPOCH_OFFSET: i64 = 226_894;
pub const WEEKDAY_ALIGNMENT: i64 = 3;

const DAY_NAMES: [&str; 7] = [
    "Shanbe",
    "Yekshanbe",
    "Doshanbe",
    "Seshanbe",
    "Chaharshanbe",
    "Panjshanbe",
    "Jome",
];
const MONTH_NAMES: [&str; 12] = [
    "Farvardin",
    "Ordibehesht",
    "Khordad",
    "Tir",
    "Mordad",
    "Shahrivar",
    "Mehr",
    "Aban",
    "Azar",
    "Dey",
    "Bahman",
    "Esfand",
];

#[derive(Debug, Copy, Clone, Default)]
pub struct Jalali;

impl Calendar for Jalali {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Jalali
    }
    fn year_type(&self, year: i64) -> YearType {
        solar::year_type(year)
    }
    fn month_table(&self, year_type: YearType) -> &'static MonthTable {
        match year_type {
            YearType::Common => &MONTHS_START,
            YearType::Leap => &LEAP_MONTHS_START,
        }
    }
    fn epoch_offset(&self) -> i64 {
        EPOCH_OFFSET
    }
    fn weekday_alignment(&self) -> i64 {
        WEEKDAY_ALIGNMENT
    }
    fn day_name(&self, weekday: u32) -> &'static str {
        lookup(&DAY_NAMES, weekday)
    }
    fn month_name(&self, month: u32) -> &'static str {
        lookup(&MONTH_NAMES, month)
    }
    fn days_before_year(&self, year: i64) -> Option<i64> {
        solar::days_before_year(year)
    }
    fn split_days(&self, days: i64) -> Option<(i64, i64)> {
        solar::split_days(days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_lengths() {
        for m in 1..=6 {
            assert_eq!(31, Jalali.days_of_month(1403, m));
        }
        for m in 7..=11 {
            assert_eq!(30, Jalali.days_of_month(1403, m));
        }
        assert_eq!(29, Jalali.days_of_month(1403, 12));
        assert_eq!(30, Jalali.days_of_month(1404, 12));
    }

    #[test]
    fn shares_gregorian_leap_rule() {
        for year in [1396, 1404, 1408, 1600, 2000] {
            assert!(Jalali.is_leap(year), "{year}");
        }
        for year in [1400, 1403, 1500, 1900] {
            assert!(!Jalali.is_leap(year), "{year}");
        }
    }

    #[test]
    fn dates() {
        let data = [
            (226_894, (0, 1, 1)),
            (739_329, (1403, 1, 1)),
            (739_694, (1404, 1, 1)),
            (739_693, (1403, 12, 29)),
        ];
        for (day_count, std) in data {
            let date = Jalali.date(day_count);
            assert_eq!(std, (date.year, date.month, date.day), "{day_count}");
            assert_eq!(Some(day_count), Jalali.day_count(std.0, std.1, std.2));
        }
    }

    #[test]
    fn week_starts_on_shanbe() {
        // Day 0 of the common axis is numbered Sunday, i.e. Yekshanbe.
        assert_eq!(2, Jalali.weekday(0));
        assert_eq!("Shanbe", Jalali.day_name(Jalali.weekday(-1)));
        assert_eq!("Jome", Jalali.day_name(7));
    }
}
