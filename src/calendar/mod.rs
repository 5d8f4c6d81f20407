//! Per-calendar rules and the day-count conversions built on them.
//!
//! Every calendar maps its dates onto one shared axis of day counts, anchored
//! so that January 1 of Gregorian year 0 is day `0`. The calendars differ only
//! by a fixed epoch offset on that axis, so converting between any two of them
//! goes through a plain integer.
//!
//! # Examples
//!
//! ```
//! use tarikh::calendar::{self, CalendarKind::*};
//!
//! assert_eq!(Some(0), calendar::date_to_day_count(Gregorian, 0, 1, 1));
//! assert_eq!(Some(226894), calendar::date_to_day_count(Jalali, 0, 1, 1));
//! assert_eq!(Some(227026), calendar::date_to_day_count(Hijri, 0, 1, 1));
//!
//! let day = calendar::date_to_day_count(Gregorian, 2024, 7, 8).unwrap();
//! let hijri = calendar::day_count_to_date(Hijri, day);
//! assert_eq!((1446, 1, 1), (hijri.year, hijri.month, hijri.day));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::date::{DateProperty, YearType};
use crate::error::Error;

pub mod gregorian;
pub mod hijri;
pub mod jalali;
mod solar;

pub use gregorian::Gregorian;
pub use hijri::Hijri;
pub use jalali::Jalali;

/// Cumulative day offsets of month starts; `table[m] - table[m - 1]` is the
/// length of month `m` and `table[12]` the length of the year.
pub type MonthTable = [u16; 13];

/// Days in a week.
pub const DAYS_PER_WEEK: i64 = 7;

/// Selects one of the supported calendars.
///
/// The discriminants double as the stored preference indices accepted by
/// [`TryFrom<i32>`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarKind {
    #[default]
    Gregorian = 0,
    Jalali = 1,
    Hijri = 2,
}

impl CalendarKind {
    /// All supported calendars, in index order.
    pub const ALL: [CalendarKind; 3] = [Self::Gregorian, Self::Jalali, Self::Hijri];

    /// Returns the rule set implementing this calendar.
    pub fn rules(self) -> &'static dyn Calendar {
        match self {
            Self::Gregorian => &Gregorian,
            Self::Jalali => &Jalali,
            Self::Hijri => &Hijri,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Gregorian => "Gregorian",
            Self::Jalali => "Jalali",
            Self::Hijri => "Hijri",
        }
    }
}

impl fmt::Display for CalendarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarKind {
    type Err = Error;

    /// Parses a calendar name, ignoring case.
    ///
    /// ```
    /// use tarikh::CalendarKind;
    ///
    /// assert_eq!(Some(CalendarKind::Jalali), "Shamsi".parse::<CalendarKind>().ok());
    /// assert!("julian".parse::<CalendarKind>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gregorian" => Ok(Self::Gregorian),
            "jalali" | "persian" | "shamsi" => Ok(Self::Jalali),
            "hijri" | "islamic" | "lunar" => Ok(Self::Hijri),
            _ => Err(Error::UnknownCalendar(s.to_owned())),
        }
    }
}

impl TryFrom<i32> for CalendarKind {
    type Error = Error;

    fn try_from(index: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|&kind| kind as i32 == index)
            .ok_or_else(|| Error::UnknownCalendar(index.to_string()))
    }
}

/// Rules of one calendar.
///
/// Implementors supply the tables and the year arithmetic; conversion between
/// dates and day counts is shared by the provided methods.
pub trait Calendar: Sync {
    /// Which calendar this is.
    fn kind(&self) -> CalendarKind;

    /// Classifies `year` as leap or common.
    fn year_type(&self, year: i64) -> YearType;

    /// Month-start table for a year of the given type.
    fn month_table(&self, year_type: YearType) -> &'static MonthTable;

    /// Day count of day `0` (year 0, month 1, day 1) of this calendar on the
    /// common axis.
    fn epoch_offset(&self) -> i64;

    /// Shift applied to the epoch-relative day count before taking the weekday.
    fn weekday_alignment(&self) -> i64;

    /// Name of weekday `1..=7`, or `""` outside that range.
    fn day_name(&self, weekday: u32) -> &'static str;

    /// Name of month `1..=12`, or `""` outside that range.
    fn month_name(&self, month: u32) -> &'static str;

    /// Days from the epoch to the first day of `year`, `None` if that does
    /// not fit in an `i64`.
    fn days_before_year(&self, year: i64) -> Option<i64>;

    /// Splits days since the epoch into `(year, day_of_year)`, with
    /// `day_of_year` counted from `0`. `None` if `days` is too close to the
    /// ends of the `i64` range.
    fn split_days(&self, days: i64) -> Option<(i64, i64)>;

    fn is_leap(&self, year: i64) -> bool {
        self.year_type(year).is_leap()
    }

    fn days_in_year(&self, year: i64) -> u32 {
        u32::from(self.month_table(self.year_type(year))[12])
    }

    /// Length of `month` in `year`; `0` if `month` is not in `1..=12`.
    fn days_of_month(&self, year: i64, month: u32) -> u32 {
        if !(1..=12).contains(&month) {
            return 0;
        }
        let table = self.month_table(self.year_type(year));
        let m = month as usize;
        u32::from(table[m] - table[m - 1])
    }

    /// Day count of a date on the common axis.
    ///
    /// Returns `None` if `month` is not in `1..=12` or the day count does not
    /// fit in an `i64`. Days beyond the end of the month simply run into the
    /// following month.
    fn day_count(&self, year: i64, month: u32, day: u32) -> Option<i64> {
        if !(1..=12).contains(&month) {
            return None;
        }
        let table = self.month_table(self.year_type(year));
        let month_days = i64::from(table[month as usize - 1]);
        self.days_before_year(year)?
            .checked_add(month_days + i64::from(day) - 1 + self.epoch_offset())
    }

    /// Decomposes a day count on the common axis into a date of this
    /// calendar.
    ///
    /// Day counts at the very ends of the `i64` range, whose year would not
    /// be representable, give the default (all zero) date.
    fn date(&self, day_count: i64) -> DateProperty {
        let split = day_count
            .checked_sub(self.epoch_offset())
            .and_then(|days| self.split_days(days));
        let Some((year, day_of_year)) = split else {
            tracing::debug!(day_count, calendar = %self.kind(), "day count out of range");
            return DateProperty::default();
        };
        let table = self.month_table(self.year_type(year));

        let day = day_of_year + 1;
        let month = (1..=12)
            .rev()
            .find(|&m| day > i64::from(table[m - 1]))
            .unwrap_or(1);

        DateProperty {
            year,
            month: month as u32,
            day: (day - i64::from(table[month - 1])) as u32,
            day_of_week: self.weekday(day_count),
        }
    }

    /// Weekday `1..=7` of a day count on the common axis.
    fn weekday(&self, day_count: i64) -> u32 {
        let shift = (self.epoch_offset() + self.weekday_alignment()).rem_euclid(DAYS_PER_WEEK);
        (day_count.rem_euclid(DAYS_PER_WEEK) - shift).rem_euclid(DAYS_PER_WEEK) as u32 + 1
    }
}

/// Converts `(year, month, day)` of calendar `kind` into a day count.
///
/// Returns `None` if `month` is not in `1..=12`.
pub fn date_to_day_count(kind: CalendarKind, year: i64, month: u32, day: u32) -> Option<i64> {
    kind.rules().day_count(year, month, day)
}

/// Converts a day count into a date of calendar `kind`.
pub fn day_count_to_date(kind: CalendarKind, day_count: i64) -> DateProperty {
    kind.rules().date(day_count)
}

pub fn is_leap(kind: CalendarKind, year: i64) -> bool {
    kind.rules().is_leap(year)
}

/// Length of `month` in `year`, `0` if `month` is not in `1..=12`.
pub fn days_of_month(kind: CalendarKind, year: i64, month: u32) -> u32 {
    kind.rules().days_of_month(year, month)
}

pub fn days_in_year(kind: CalendarKind, year: i64) -> u32 {
    kind.rules().days_in_year(year)
}

/// Re-expresses a date of calendar `from` in calendar `to`.
///
/// ```
/// use tarikh::calendar::{self, CalendarKind::*};
///
/// let jalali = calendar::convert(Gregorian, Jalali, 2024, 3, 19).unwrap();
/// assert_eq!((1403, 1, 1), (jalali.year, jalali.month, jalali.day));
/// ```
pub fn convert(
    from: CalendarKind,
    to: CalendarKind,
    year: i64,
    month: u32,
    day: u32,
) -> Option<DateProperty> {
    let day_count = date_to_day_count(from, year, month, day)?;
    tracing::trace!(%from, %to, year, month, day, day_count, "converting date");
    Some(day_count_to_date(to, day_count))
}

/// Looks up a 1-based entry of a name table.
pub(crate) fn lookup(names: &[&'static str], index: u32) -> &'static str {
    (index as usize)
        .checked_sub(1)
        .and_then(|i| names.get(i))
        .copied()
        .unwrap_or_default()
}
