//! Proleptic Gregorian calendar; its day counts define the common axis.

use super::{Calendar, CalendarKind, MonthTable, lookup, solar};
use crate::date::YearType;

pub const MONTHS_START: MonthTable = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334, 365];
pub const LEAP_MONTHS_START: MonthTable =
    [0, 31, 60, 91, 121, 152, 182, 213, 244, 274, 305, 335, 366];

pub const EPOCH_OFFSET: i64 = 0;
pub const WEEKDAY_ALIGNMENT: i64 = 0;

const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];
const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Rules of the Gregorian calendar, with astronomical year numbering (1 BC
/// is year `0`).
#[derive(Debug, Copy, Clone, Default)]
pub struct Gregorian;

impl Calendar for Gregorian {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Gregorian
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
    fn leap_years() {
        for (year, std) in [(2000, true), (2024, true), (1900, false), (2100, false)] {
            assert_eq!(std, Gregorian.is_leap(year), "{year}");
        }
    }

    #[test]
    fn days_of_february() {
        assert_eq!(29, Gregorian.days_of_month(2024, 2));
        assert_eq!(28, Gregorian.days_of_month(2023, 2));
        assert_eq!(28, Gregorian.days_of_month(1900, 2));
        assert_eq!(31, Gregorian.days_of_month(1900, 12));
    }

    #[test]
    fn day_counts() {
        let data = [
            ((0, 1, 1), 0),
            ((0, 12, 31), 365),
            ((1, 1, 1), 366),
            ((-1, 12, 31), -1),
            ((-1, 1, 1), -365),
            ((2024, 1, 1), 739_251),
            ((2025, 1, 1), 739_617),
        ];
        for ((y, m, d), std) in data {
            assert_eq!(Some(std), Gregorian.day_count(y, m, d), "{y:04}-{m:02}-{d:02}");
            let date = Gregorian.date(std);
            assert_eq!((y, m, d), (date.year, date.month, date.day), "{std}");
        }
    }

    #[test]
    fn weekdays() {
        for (day_count, std) in [(0, 1), (6, 7), (7, 1), (-1, 7), (-7, 1), (739_251, 3)] {
            assert_eq!(std, Gregorian.weekday(day_count), "{day_count}");
        }
    }

    #[test]
    fn names() {
        assert_eq!("Sunday", Gregorian.day_name(1));
        assert_eq!("Saturday", Gregorian.day_name(7));
        assert_eq!("", Gregorian.day_name(8));
        assert_eq!("January", Gregorian.month_name(1));
        assert_eq!("", Gregorian.month_name(0));
    }
}
