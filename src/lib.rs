//! Utilities for converting dates among the Gregorian, Persian (Jalali) and
//! Islamic (Hijri) calendars, and for rendering them as display strings.
//!
//! Every calendar maps its dates onto one shared axis of day counts (day `0`
//! is January 1 of Gregorian year 0), so a conversion is a trip through a
//! plain integer. Years are unbounded and proleptic; negative years work the
//! same as positive ones.
//!
//! # Examples
//!
//! Basic usage with [`Converter`]:
//!
//! ```
//! use tarikh::{CalendarKind, Converter};
//!
//! let mut converter = Converter::default();
//! converter.set_calendar(CalendarKind::Hijri);
//!
//! let date = converter.compose_to_gregorian(1446, 1, 1);
//! assert_eq!("2024-07-08", date.to_string());
//! assert_eq!("1 Muharram 1446", converter.little_string(date));
//! ```
//!
//! Calendar-independent [`Date`]:
//!
//! ```
//! use tarikh::{CalendarKind, Date};
//!
//! let date = Date::from_ymd(CalendarKind::Jalali, 1403, 1, 1).unwrap();
//! assert_eq!("2024-03-19", date.gregorian().to_string());
//! ```
//!
//! # Known deviations
//!
//! - Jalali leap years follow the Gregorian 4/100/400 rule, not the
//!   astronomical one.
//! - Hijri dates are tabular (arithmetic) and may differ by a day or two from
//!   observed lunar months.
//! - Name tables use standard transliterations: Jalali weekdays are
//!   `Shanbe`, `Yekshanbe`, ... `Jome` (not `1Shanbe`, `2Shanbe`, ...), and
//!   Hijri months are `Rabi al-Awwal`, `Jumada al-Ula`, `Dhu al-Hijjah` and
//!   so on (not `Rabiol Avval`, ...). Code matching on the older spellings
//!   has to be updated.
//! - Years so large that their day count does not fit in an `i64` convert to
//!   the all-zero default date.

pub mod calendar;
pub mod config;
pub mod converter;
pub mod date;
pub mod error;
pub mod fmt;

pub use calendar::CalendarKind;
pub use config::ConverterConfig;
pub use converter::Converter;
pub use date::{CivilDate, Date, DateProperty, YearType};
pub use error::{Error, Result};
