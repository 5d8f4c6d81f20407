//! Year arithmetic shared by the solar calendars (Gregorian and Jalali), both
//! of which follow the 4/100/400-year leap cycle.

use crate::date::YearType;

pub const DAYS_PER_400_YEARS: i64 = 146_097;
pub const DAYS_PER_100_YEARS: i64 = 36_524;
pub const DAYS_PER_4_YEARS: i64 = 1_461;
pub const DAYS_PER_YEAR: i64 = 365;
/// Year 0 is a leap year.
const DAYS_IN_YEAR_ZERO: i64 = 366;

/// Leap rule of the 400-year cycle.
pub fn year_type(year: i64) -> YearType {
    if year % 4 == 0 && year % 100 != 0 || year % 400 == 0 {
        YearType::Leap
    } else {
        YearType::Common
    }
}

/// Days from January 1 of year 0 to January 1 of `year`, `None` if that
/// does not fit in an `i64`.
pub fn days_before_year(year: i64) -> Option<i64> {
    // Truncating division counts the leap years in `1..=year` (or
    // `year..=-1`), while the axis counts those in `0..year`.
    let leap_days = year / 4 - year / 100 + year / 400;
    let mut days = year.checked_mul(DAYS_PER_YEAR)?.checked_add(leap_days)?;
    if year > 0 && !year_type(year).is_leap() {
        days = days.checked_add(1)?;
    }
    Some(days)
}

/// Inverse of [`days_before_year`]: `(year, day_of_year)`.
pub fn split_days(days: i64) -> Option<(i64, i64)> {
    // Cycles are laid out from year 1 so that each block ends in its leap year.
    let days = days.checked_sub(DAYS_IN_YEAR_ZERO)?;

    let mut year = 1 + days.div_euclid(DAYS_PER_400_YEARS) * 400;
    let mut day = days.rem_euclid(DAYS_PER_400_YEARS);

    if day < DAYS_PER_100_YEARS * 3 {
        year += day / DAYS_PER_100_YEARS * 100;
        day %= DAYS_PER_100_YEARS;
    } else {
        year += 400 - 100;
        day -= DAYS_PER_100_YEARS * 3;
    }

    if day < DAYS_PER_4_YEARS * 24 {
        year += day / DAYS_PER_4_YEARS * 4;
        day %= DAYS_PER_4_YEARS;
    } else {
        year += 100 - 4;
        day -= DAYS_PER_4_YEARS * 24;
    }

    if day < DAYS_PER_YEAR * 3 {
        year += day / DAYS_PER_YEAR;
        day %= DAYS_PER_YEAR;
    } else {
        year += 4 - 1;
        day -= DAYS_PER_YEAR * 3;
    }

    Some((year, day))
}
