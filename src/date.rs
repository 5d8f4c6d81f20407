//! Calendar-independent date and the per-calendar date values.

use std::fmt;
use std::ops::{Add, Sub};

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarKind;
use crate::error::{Error, Result};

/// A calendar-independent date: a day count on the axis shared by all
/// calendars, where day `0` is January 1 of Gregorian year 0.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Date {
    days: i64,
}

impl Date {
    /// Creates a `Date` from a day count.
    pub fn from_day_count(days: i64) -> Self {
        Self { days }
    }
    /// Returns the day count of the date.
    pub fn day_count(&self) -> i64 {
        self.days
    }

    /// Creates a `Date` from a date in calendar `kind`.
    ///
    /// Returns `None` if `month` is not in `1..=12`.
    ///
    /// # Example
    ///
    /// ```
    /// use tarikh::{CalendarKind, Date};
    ///
    /// let nowruz = Date::from_ymd(CalendarKind::Jalali, 1403, 1, 1).unwrap();
    /// assert_eq!(Date::from_gregorian(2024, 3, 19), Some(nowruz));
    /// ```
    pub fn from_ymd(kind: CalendarKind, year: i64, month: u32, day: u32) -> Option<Self> {
        kind.rules()
            .day_count(year, month, day)
            .map(Self::from_day_count)
    }
    /// Creates a `Date` with a Gregorian calendar date.
    ///
    /// `year` is an astronomical year number, i.e. 1 BC is `0`, 2 BC is `-1`,
    /// etc.
    pub fn from_gregorian(year: i64, month: u32, day: u32) -> Option<Self> {
        Self::from_ymd(CalendarKind::Gregorian, year, month, day)
    }

    /// Represents the date in calendar `kind`.
    ///
    /// # Example
    ///
    /// ```
    /// use tarikh::{CalendarKind, Date};
    ///
    /// let date = Date::from_gregorian(2024, 7, 8).unwrap();
    /// let hijri = date.ymd(CalendarKind::Hijri);
    /// assert_eq!((1446, 1, 1), (hijri.year, hijri.month, hijri.day));
    /// ```
    pub fn ymd(&self, kind: CalendarKind) -> DateProperty {
        kind.rules().date(self.days)
    }
    /// Represents the date in Gregorian calendar.
    pub fn gregorian(&self) -> CivilDate {
        self.ymd(CalendarKind::Gregorian).into()
    }

    /// Returns the weekday `1..=7` of the date, numbered from the first day
    /// of the week of calendar `kind`.
    ///
    /// # Example
    ///
    /// ```
    /// use tarikh::{CalendarKind, Date};
    ///
    /// let date = Date::from_day_count(0);
    /// assert_eq!(1, date.day_of_week(CalendarKind::Gregorian));
    /// ```
    pub fn day_of_week(&self, kind: CalendarKind) -> u32 {
        kind.rules().weekday(self.days)
    }
}

impl Add<i64> for Date {
    type Output = Date;
    fn add(self, rhs: i64) -> Self::Output {
        Date::from_day_count(self.days + rhs)
    }
}
impl Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> Self::Output {
        self.days - rhs.days
    }
}

/// Indicates whether a year is a leap year or common year.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum YearType {
    Common,
    Leap,
}

impl YearType {
    /// Returns `true` if `self` is `Leap`, otherwise `false`.
    pub fn is_leap(&self) -> bool {
        matches!(self, YearType::Leap)
    }
}

/// A `(year, month, day)` triple in some calendar.
///
/// The default value, all zeros, is what the total operations of
/// [`Converter`](crate::Converter) return when they cannot produce a date.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct CivilDate {
    pub year: i64,
    pub month: u32,
    pub day: u32,
}

impl CivilDate {
    /// Creates a date of calendar `kind`, checking the month and day.
    ///
    /// # Example
    ///
    /// ```
    /// use tarikh::{CalendarKind, CivilDate};
    ///
    /// assert!(CivilDate::new(CalendarKind::Jalali, 1404, 12, 30).is_ok());
    /// assert!(CivilDate::new(CalendarKind::Jalali, 1403, 12, 30).is_err());
    /// ```
    pub fn new(kind: CalendarKind, year: i64, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidMonth { month });
        }
        let max = kind.rules().days_of_month(year, month);
        if !(1..=max).contains(&day) {
            return Err(Error::InvalidDay {
                calendar: kind,
                year,
                month,
                day,
                max,
            });
        }
        Ok(Self { year, month, day })
    }

    /// Converts a Gregorian date into a [`NaiveDate`].
    pub fn to_naive_date(&self) -> Result<NaiveDate> {
        let year = i32::try_from(self.year).map_err(|_| Error::OutOfRange { year: self.year })?;
        NaiveDate::from_ymd_opt(year, self.month, self.day)
            .ok_or(Error::OutOfRange { year: self.year })
    }
}

/// Formats the date in ISO 8601 style, e.g. `2021-09-08`.
impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CivilDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: i64::from(date.year()),
            month: date.month(),
            day: date.day(),
        }
    }
}

impl From<DateProperty> for CivilDate {
    fn from(date: DateProperty) -> Self {
        Self {
            year: date.year,
            month: date.month,
            day: date.day,
        }
    }
}

/// A decomposed date of some calendar, with its weekday.
///
/// `day_of_week` runs `1..=7` from the first day of that calendar's week.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct DateProperty {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub day_of_week: u32,
}

impl DateProperty {
    pub fn civil(&self) -> CivilDate {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use CalendarKind::*;

    #[test]
    fn it_works() {
        let date = Date::from_day_count(739_251);
        assert_eq!(739_251, date.day_count());
    }

    #[test]
    fn from_gregorian() {
        let date = Date::from_gregorian(2024, 1, 1).unwrap();
        assert_eq!(739_251, date.day_count());
        assert_eq!(None, Date::from_gregorian(2024, 13, 1));
    }

    #[test]
    fn to_gregorian() {
        for (days, std) in [(0, "0000-01-01"), (739_251, "2024-01-01"), (730_544, "2000-02-29")] {
            assert_eq!(std, Date::from_day_count(days).gregorian().to_string());
        }
    }

    #[test]
    fn arithmetic() {
        let date = Date::from_gregorian(2024, 2, 28).unwrap();
        assert_eq!((2024, 2, 29), tuple((date + 1).gregorian()));
        assert_eq!((2024, 3, 1), tuple((date + 2).gregorian()));
        assert_eq!((2023, 12, 31), tuple((date + -59).gregorian()));
        let next_year = Date::from_gregorian(2025, 1, 1).unwrap();
        assert_eq!(366, next_year - Date::from_gregorian(2024, 1, 1).unwrap());
    }

    #[test]
    fn day_of_week_advances() {
        let date = Date::from_gregorian(2024, 1, 1).unwrap();
        for kind in [Gregorian, Jalali, Hijri] {
            let first = date.day_of_week(kind);
            assert_eq!(first % 7 + 1, (date + 1).day_of_week(kind));
            assert_eq!(first, (date + 7).day_of_week(kind));
        }
    }

    #[test]
    fn validation() {
        assert!(CivilDate::new(Gregorian, 2024, 2, 29).is_ok());
        assert!(matches!(
            CivilDate::new(Gregorian, 2023, 2, 29),
            Err(Error::InvalidDay { max: 28, .. })
        ));
        assert!(matches!(
            CivilDate::new(Hijri, 1445, 0, 1),
            Err(Error::InvalidMonth { month: 0 })
        ));
        assert!(CivilDate::new(Hijri, 1445, 1, 0).is_err());
    }

    #[test]
    fn naive_date_interop() {
        let naive = NaiveDate::from_ymd_opt(2021, 9, 8).unwrap();
        let civil = CivilDate::from(naive);
        assert_eq!("2021-09-08", civil.to_string());
        assert_eq!(naive, civil.to_naive_date().unwrap());

        let far = CivilDate { year: 1 << 40, month: 1, day: 1 };
        assert!(matches!(far.to_naive_date(), Err(Error::OutOfRange { .. })));
    }

    fn tuple(date: CivilDate) -> (i64, u32, u32) {
        (date.year, date.month, date.day)
    }
}
