//! The converter: a selected calendar plus every operation dispatched to it.

use chrono::NaiveDateTime;

use crate::calendar::{Calendar, CalendarKind};
use crate::config::ConverterConfig;
use crate::date::{CivilDate, DateProperty};
use crate::error::{Error, Result};
use crate::fmt;

/// Converts Gregorian dates into the selected calendar and back, and renders
/// them.
///
/// All operations are total: when no calendar is selected (see
/// [`set_calendar_index`](Self::set_calendar_index)) or the input cannot be
/// converted they return zeros, default values or empty strings. The `try_*`
/// methods report those cases as errors instead.
///
/// A `Converter` is a small `Copy` value; give each thread its own.
///
/// # Example
///
/// ```
/// use tarikh::{CalendarKind, CivilDate, Converter};
///
/// let converter = Converter::new(CalendarKind::Jalali);
/// let nowruz = CivilDate { year: 2024, month: 3, day: 19 };
/// let date = converter.decompose(nowruz);
/// assert_eq!((1403, 1, 1), (date.year, date.month, date.day));
/// assert_eq!("1 Farvardin 1403", converter.little_string(nowruz));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Converter {
    calendar: Option<CalendarKind>,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(CalendarKind::default())
    }
}

impl Converter {
    pub fn new(calendar: CalendarKind) -> Self {
        Self {
            calendar: Some(calendar),
        }
    }

    pub fn from_config(config: &ConverterConfig) -> Self {
        Self::new(config.calendar)
    }

    pub fn set_calendar(&mut self, calendar: CalendarKind) {
        tracing::debug!(%calendar, "calendar selected");
        self.calendar = Some(calendar);
    }

    /// Selects a calendar by its stored preference index.
    ///
    /// An unknown index leaves the converter without a calendar; every total
    /// operation then returns its default value.
    pub fn set_calendar_index(&mut self, index: i32) {
        match CalendarKind::try_from(index) {
            Ok(calendar) => self.set_calendar(calendar),
            Err(err) => {
                tracing::warn!(index, %err, "unrecognized calendar, conversions disabled");
                self.calendar = None;
            }
        }
    }

    /// The selected calendar, `None` after an unrecognized index.
    pub fn calendar(&self) -> Option<CalendarKind> {
        self.calendar
    }

    fn rules(&self) -> Option<&'static dyn Calendar> {
        self.calendar.map(CalendarKind::rules)
    }

    /// Expresses a Gregorian date in the selected calendar.
    ///
    /// Returns the default (all zero) value if no calendar is selected or the
    /// Gregorian date is not valid.
    pub fn decompose(&self, gregorian: impl Into<CivilDate>) -> DateProperty {
        self.try_decompose(gregorian).unwrap_or_else(|err| {
            tracing::debug!(%err, "decompose fell back to default");
            DateProperty::default()
        })
    }

    /// Like [`decompose`](Self::decompose), but reports why a date could not
    /// be converted.
    pub fn try_decompose(&self, gregorian: impl Into<CivilDate>) -> Result<DateProperty> {
        let rules = self.rules().ok_or(Error::NoCalendar)?;
        let CivilDate { year, month, day } = gregorian.into();
        let date = CivilDate::new(CalendarKind::Gregorian, year, month, day)?;
        let day_count = CalendarKind::Gregorian
            .rules()
            .day_count(date.year, date.month, date.day)
            .ok_or(Error::OutOfRange { year })?;
        tracing::trace!(%date, day_count, calendar = %rules.kind(), "decompose");
        Ok(rules.date(day_count))
    }

    /// Converts a date of the selected calendar into a Gregorian date.
    ///
    /// Days past the end of the month run into the next month. Returns the
    /// default (all zero) value if no calendar is selected, the month is not
    /// in `1..=12`, or the year is too large to place on the day axis.
    pub fn compose_to_gregorian(&self, year: i64, month: u32, day: u32) -> CivilDate {
        let Some(rules) = self.rules() else {
            tracing::debug!("compose without a calendar");
            return CivilDate::default();
        };
        match rules.day_count(year, month, day) {
            Some(day_count) => CalendarKind::Gregorian.rules().date(day_count).civil(),
            None => {
                tracing::debug!(year, month, "compose with invalid month or year");
                CivilDate::default()
            }
        }
    }

    /// Like [`compose_to_gregorian`](Self::compose_to_gregorian), but checks
    /// the date against the selected calendar first.
    ///
    /// ```
    /// use tarikh::{CalendarKind, Converter};
    ///
    /// let converter = Converter::new(CalendarKind::Hijri);
    /// let date = converter.try_compose_to_gregorian(1446, 1, 1).unwrap();
    /// assert_eq!("2024-07-08", date.to_string());
    /// assert!(converter.try_compose_to_gregorian(1446, 1, 31).is_err());
    /// ```
    pub fn try_compose_to_gregorian(&self, year: i64, month: u32, day: u32) -> Result<CivilDate> {
        let calendar = self.calendar.ok_or(Error::NoCalendar)?;
        let date = CivilDate::new(calendar, year, month, day)?;
        let day_count = calendar
            .rules()
            .day_count(date.year, date.month, date.day)
            .ok_or(Error::OutOfRange { year })?;
        Ok(CalendarKind::Gregorian.rules().date(day_count).civil())
    }

    /// Name of weekday `1..=7` in the selected calendar.
    pub fn day_name(&self, weekday: u32) -> &'static str {
        self.rules().map_or("", |rules| rules.day_name(weekday))
    }

    /// Name of month `1..=12` in the selected calendar.
    pub fn month_name(&self, month: u32) -> &'static str {
        self.rules().map_or("", |rules| rules.month_name(month))
    }

    pub fn year_is_leap(&self, year: i64) -> bool {
        self.rules().is_some_and(|rules| rules.is_leap(year))
    }

    /// Length of `month` in `year`; `0` if `month` is not in `1..=12`.
    pub fn days_of_month(&self, year: i64, month: u32) -> u32 {
        self.rules()
            .map_or(0, |rules| rules.days_of_month(year, month))
    }

    /// See [`fmt::paper`].
    pub fn paper_string(&self, date_time: NaiveDateTime) -> String {
        self.render(date_time.date(), |rules, date| {
            fmt::paper(rules, date, date_time.time())
        })
    }

    /// See [`fmt::little`].
    pub fn little_string(&self, gregorian: impl Into<CivilDate>) -> String {
        self.render(gregorian, fmt::little)
    }

    /// See [`fmt::history`].
    pub fn history_string(&self, gregorian: impl Into<CivilDate>) -> String {
        self.render(gregorian, fmt::history)
    }

    /// See [`fmt::number`].
    pub fn number_string(&self, gregorian: impl Into<CivilDate>) -> String {
        self.render(gregorian, fmt::number)
    }

    /// Expands `pattern` with the tokens listed at [`fmt::template`].
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use tarikh::{CalendarKind, Converter};
    ///
    /// let dt = NaiveDate::from_ymd_opt(2024, 3, 19).unwrap().and_hms_opt(13, 5, 0).unwrap();
    /// let converter = Converter::new(CalendarKind::Jalali);
    /// assert_eq!("1403/01/01 13:05", converter.format(dt, "yyyy/MM/dd HH:mm"));
    /// ```
    pub fn format(&self, date_time: NaiveDateTime, pattern: &str) -> String {
        self.render(date_time.date(), |rules, date| {
            fmt::template(rules, date, date_time.time(), pattern)
        })
    }

    fn render(
        &self,
        gregorian: impl Into<CivilDate>,
        layout: impl FnOnce(&dyn Calendar, &DateProperty) -> String,
    ) -> String {
        match (self.rules(), self.try_decompose(gregorian)) {
            (Some(rules), Ok(date)) => layout(rules, &date),
            _ => String::new(),
        }
    }
}
