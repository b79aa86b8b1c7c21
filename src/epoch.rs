//! Conversion between signed day counts and civil dates.
//!
//! A day count is the number of days since Jan 1 of an epoch year. Both
//! directions walk one year at a time, so each is the exact inverse of the
//! other for any epoch year.

use serde::{Deserialize, Serialize};

use crate::consts::{CALENDAR_EPOCH_YEAR, UNIX_EPOCH_YEAR};
use crate::types::{Day, Month, Weekday, days_in_month, days_in_year};
use crate::{CalendarError, CivilDate};

/// An epoch year together with the weekday of its Jan 1.
///
/// Calendar grids and timestamps use different references; keep them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EpochReference {
    pub year:    i32,
    pub weekday: Weekday,
}

impl EpochReference {
    /// Jan 1, 1800 was a Wednesday. Used for month grids.
    pub const CALENDAR: Self = Self::new(CALENDAR_EPOCH_YEAR, Weekday::Wednesday);
    /// Jan 1, 1970 was a Thursday. Used for millisecond timestamps.
    pub const UNIX: Self = Self::new(UNIX_EPOCH_YEAR, Weekday::Thursday);

    /// Reference where Jan 1 of `year` falls on `weekday`.
    pub const fn new(year: i32, weekday: Weekday) -> Self {
        Self { year, weekday }
    }

    /// Builds a reference from raw config values.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if `weekday` is not in 0..=6.
    pub fn from_raw(year: i32, weekday: u8) -> Result<Self, CalendarError> {
        Ok(Self::new(year, Weekday::new(weekday)?))
    }

    /// Days from Jan 1 of the reference year to `date`.
    pub fn day_count(&self, date: CivilDate) -> i64 {
        to_day_count(date, self.year)
    }

    /// Date `day_count` days after Jan 1 of the reference year.
    pub fn civil_date(&self, day_count: i64) -> CivilDate {
        to_civil_date(day_count, self.year)
    }

    /// Day of the week `date` falls on.
    pub fn weekday_of(&self, date: CivilDate) -> Weekday {
        weekday_of(date, self.year, self.weekday)
    }

    /// The equivalent reference anchored at Jan 1 of `year`.
    pub fn rebased(&self, year: i32) -> Self {
        Self::new(year, self.weekday_of(CivilDate::first_of_month(year, Month::January)))
    }
}

impl Default for EpochReference {
    fn default() -> Self {
        Self::CALENDAR
    }
}

/// Days from Jan 1 of `epoch_year` to `date`; negative for earlier dates.
pub fn to_day_count(date: CivilDate, epoch_year: i32) -> i64 {
    let year = date.year();

    let mut total: i64 = if year >= epoch_year {
        (epoch_year..year).map(days_in_year).sum()
    } else {
        -(year..epoch_year).map(days_in_year).sum::<i64>()
    };

    total += Month::ALL
        .iter()
        .take_while(|&&m| m < date.month())
        .map(|&m| i64::from(days_in_month(year, m)))
        .sum::<i64>();

    total + i64::from(date.day() - 1)
}

/// Civil date `day_count` days after Jan 1 of `epoch_year`.
pub fn to_civil_date(day_count: i64, epoch_year: i32) -> CivilDate {
    let mut year = epoch_year;
    let mut remaining = day_count;

    while remaining < 0 {
        year -= 1;
        remaining += days_in_year(year);
    }
    while remaining >= days_in_year(year) {
        remaining -= days_in_year(year);
        year += 1;
    }

    // remaining is now in [0, days_in_year(year))
    let mut month = Month::January;
    for &candidate in &Month::ALL {
        month = candidate;
        let length = i64::from(days_in_month(year, candidate));
        if remaining < length {
            break;
        }
        remaining -= length;
    }

    CivilDate::from_parts(year, month, day_from_offset(remaining))
}

/// Weekday of `date`, given the weekday of Jan 1 of `epoch_year`.
pub fn weekday_of(date: CivilDate, epoch_year: i32, epoch_weekday: Weekday) -> Weekday {
    epoch_weekday.add_days(to_day_count(date, epoch_year))
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn day_from_offset(offset: i64) -> Day {
    // offset < month length <= 31
    Day::from_offset(offset as u8)
}
