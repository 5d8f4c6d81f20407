//! Error type for the validating entry points of this crate.
//!
//! The conversion core itself is total and never returns these; see
//! [`CivilDate::new`](crate::CivilDate::new) and the `try_*` methods of
//! [`Converter`](crate::Converter).

use crate::calendar::CalendarKind;

/// Error type for all fallible operations in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Month number outside `1..=12`.
    #[error("month {month} not in 1..=12")]
    InvalidMonth {
        /// The rejected month.
        month: u32,
    },

    /// Day number larger than the month allows (or zero).
    #[error("day {day} not in 1..={max} for {calendar} {year}-{month:02}")]
    InvalidDay {
        calendar: CalendarKind,
        year: i64,
        month: u32,
        day: u32,
        /// Length of that month in that year.
        max: u32,
    },

    /// Calendar name or index that does not name a supported calendar.
    #[error("unknown calendar `{0}`")]
    UnknownCalendar(String),

    /// The facade is in the unrecognized-calendar state.
    #[error("no calendar selected")]
    NoCalendar,

    /// Year too large to place on the day axis, or a Gregorian date outside
    /// the range `chrono` can represent.
    #[error("year {year} out of range")]
    OutOfRange { year: i64 },

    /// Malformed TOML configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
