//! Tabular Islamic (Hijri) lunar calendar with a 30-year cycle of 11 leap
//! years.

use super::{Calendar, CalendarKind, MonthTable, lookup};
use crate::date::YearType;

pub const MONTHS_START: MonthTable = [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 354];
pub const LEAP_MONTHS_START: MonthTable =
    [0, 30, 59, 89, 118, 148, 177, 207, 236, 266, 295, 325, 355];

/// Positions of the leap years within a 30-year cycle.
pub const LEAP_YEARS: [i64; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];
pub const CYCLE_YEARS: i64 = 30;
pub const DAYS_PER_CYCLE: i64 = 10_631;
pub const DAYS_PER_YEAR: i64 = 354;

/// 1 Muharram of year 0 on the common axis.
pub const EPOCH_OFFSET: i64 = 227_026;
pub const WEEKDAY_ALIGNMENT: i64 = 4;

const DAY_NAMES: [&str; 7] = [
    "Saturday",
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
];
const MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// Index of `year` in [`LEAP_YEARS`], or `None` for a common year.
///
/// ```
/// use tarikh::calendar::hijri;
///
/// assert_eq!(Some(0), hijri::leap_index(1442));
/// assert_eq!(None, hijri::leap_index(1446));
/// ```
pub fn leap_index(year: i64) -> Option<usize> {
    let r = year.rem_euclid(CYCLE_YEARS);
    LEAP_YEARS.iter().position(|&y| y == r)
}

/// Leap years from the start of the cycle era up to and including `year`;
/// negative for years before 0.
pub fn leaps_number(year: i64) -> i64 {
    let r = year.rem_euclid(CYCLE_YEARS);
    let in_cycle = LEAP_YEARS.iter().take_while(|&&y| y <= r).count() as i64;
    LEAP_YEARS.len() as i64 * year.div_euclid(CYCLE_YEARS) + in_cycle
}

#[derive(Debug, Copy, Clone, Default)]
pub struct Hijri;

impl Calendar for Hijri {
    fn kind(&self) -> CalendarKind {
        CalendarKind::Hijri
    }
    fn year_type(&self, year: i64) -> YearType {
        match leap_index(year) {
            Some(_) => YearType::Leap,
            None => YearType::Common,
        }
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
        // `leaps_number` includes `year` itself.
        let days = year.checked_mul(DAYS_PER_YEAR)?.checked_add(leaps_number(year))?;
        if self.is_leap(year) {
            days.checked_sub(1)
        } else {
            Some(days)
        }
    }
    fn split_days(&self, days: i64) -> Option<(i64, i64)> {
        let mut year = days.div_euclid(DAYS_PER_CYCLE) * CYCLE_YEARS;
        let mut day = days.rem_euclid(DAYS_PER_CYCLE);

        for _ in 0..CYCLE_YEARS {
            let year_days = i64::from(self.days_in_year(year));
            if day < year_days {
                break;
            }
            year += 1;
            day -= year_days;
        }

        Some((year, day))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leap_set() {
        let leaps: Vec<_> = (0..30).filter(|&y| Hijri.is_leap(y)).collect();
        assert_eq!(LEAP_YEARS.to_vec(), leaps);
        let leaps: Vec<_> = (-30..0).filter(|&y| Hijri.is_leap(y)).collect();
        assert_eq!(LEAP_YEARS.map(|y| y - 30).to_vec(), leaps);
    }

    #[test]
    fn leap_counts() {
        let data = [
            (0, 0),
            (1, 0),
            (2, 1),
            (29, 11),
            (30, 11),
            (32, 12),
            (-1, 0),
            (-30, -11),
        ];
        for (year, std) in data {
            assert_eq!(std, leaps_number(year), "{year}");
        }
    }

    #[test]
    fn cycle_length() {
        assert_eq!(DAYS_PER_CYCLE, CYCLE_YEARS * DAYS_PER_YEAR + LEAP_YEARS.len() as i64);
        assert_eq!(Some(DAYS_PER_CYCLE), Hijri.days_before_year(30));
        assert_eq!(Some(-DAYS_PER_CYCLE), Hijri.days_before_year(-30));
        for year in -60..60 {
            let len =
                Hijri.days_before_year(year + 1).unwrap() - Hijri.days_before_year(year).unwrap();
            assert_eq!(i64::from(Hijri.days_in_year(year)), len, "{year}");
        }
    }

    #[test]
    fn dates() {
        let data = [
            (227_026, (0, 1, 1)),
            (227_025, (-1, 12, 30)),
            (739_440, (1446, 1, 1)),
            (739_439, (1445, 12, 30)),
        ];
        for (day_count, std) in data {
            let date = Hijri.date(day_count);
            assert_eq!(std, (date.year, date.month, date.day), "{day_count}");
            assert_eq!(Some(day_count), Hijri.day_count(std.0, std.1, std.2));
        }
    }

    #[test]
    fn leap_year_has_thirty_days_in_last_month() {
        assert_eq!(30, Hijri.days_of_month(1442, 12));
        assert_eq!(29, Hijri.days_of_month(1443, 12));
        assert_eq!(355, Hijri.days_in_year(1442));
    }
}
