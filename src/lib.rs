mod consts;
mod epoch;
mod grid;
mod prelude;
mod relative;
mod time;
mod types;

pub use consts::*;
pub use epoch::{EpochReference, to_civil_date, to_day_count, weekday_of};
pub use grid::{GridLayout, MonthGrid, render_month_grid};
pub use relative::{RelativeTime, describe_elapsed};
pub use time::{CivilTime, DecomposedMillis, Timestamp, decompose_millis, format_iso8601};
pub use types::{Day, Month, Weekday, days_in_month, days_in_year, is_leap_year};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Errors raised when an argument falls outside the calendar's valid ranges.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u8),

    #[error("Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: i32, month: u8, day: u8 },

    #[error("Invalid weekday index: {0} (must be 0-6)")]
    InvalidWeekday(u8),

    #[error("Invalid time of day {hours:02}:{minutes:02}:{seconds:02}.{milliseconds:03}")]
    InvalidTime {
        hours:        u8,
        minutes:      u8,
        seconds:      u8,
        milliseconds: u16,
    },

    /// Grid too narrow, or cells too narrow for a day number.
    #[error("Invalid grid layout: grid width {grid_width}, cell width {cell_width}")]
    InvalidLayout { grid_width: usize, cell_width: usize },

    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// The moment does not fit in `i64` milliseconds since the Unix epoch.
    #[error("Timestamp out of range: {date}T{time}Z")]
    TimestampOutOfRange { date: CivilDate, time: CivilTime },
}

/// A proleptic Gregorian calendar date.
///
/// The day is always valid for its year and month: values are built either by
/// [`CivilDate::new`], which validates, or by the epoch converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilDate {
    year:  i32,
    month: Month,
    day:   Day,
}

impl CivilDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay` if a
    /// component is out of range for the given year.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from already-validated parts
    pub(crate) const fn from_parts(year: i32, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// First day of the given month
    pub const fn first_of_month(year: i32, month: Month) -> Self {
        Self::from_parts(year, month, types::FIRST_DAY)
    }

    #[inline]
    pub const fn year(&self) -> i32 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the day of month as u8
    #[inline]
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Day type
    #[inline]
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Days since Jan 1 of the epoch year (negative before it).
    pub fn day_count(&self, epoch: EpochReference) -> i64 {
        to_day_count(*self, epoch.year)
    }

    /// Day of the week, counted from `epoch`'s known weekday.
    pub fn weekday(&self, epoch: EpochReference) -> Weekday {
        weekday_of(*self, epoch.year, epoch.weekday)
    }

    /// Whole years elapsed from this date (a birth date, say) until `today`.
    ///
    /// The count goes up on the anniversary's month and day, so a Feb 29 date
    /// ages on Mar 1 in common years. Negative when `today` is earlier.
    pub fn age_on(&self, today: Self) -> i32 {
        let years = today.year - self.year;
        let anniversary_reached = (today.month, today.day) >= (self.month, self.day);
        if anniversary_reached { years } else { years - 1 }
    }

    fn parse_component<T: FromStr>(s: &str, width: usize, input: &str) -> Result<T, CalendarError> {
        if s.len() < width || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CalendarError::InvalidFormat(input.to_owned()));
        }
        s.parse::<T>()
            .map_err(|_| CalendarError::InvalidFormat(input.to_owned()))
    }
}

/// Writes a year as 4 zero-padded digits, or in the ISO 8601 expanded
/// `±YYYYYY` form when it falls outside 0..=9999.
pub(crate) fn write_year(f: &mut impl fmt::Write, year: i32) -> fmt::Result {
    if (0..=9999).contains(&year) {
        write!(f, "{year:04}")
    } else {
        let sign = if year < 0 { '-' } else { '+' };
        write!(f, "{sign}{:06}", year.unsigned_abs())
    }
}

impl fmt::Display for CivilDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_year(f, self.year)?;
        write!(f, "-{:02}-{:02}", self.month.number(), self.day.get())
    }
}

/// Strict `YYYY-MM-DD` (or `±YYYYYY-MM-DD`) parsing; this is the inverse of
/// `Display`, not a general date parser.
impl FromStr for CivilDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            Some(_) => (false, trimmed),
            None => return Err(CalendarError::InvalidFormat(s.to_owned())),
        };

        let parts: Vec<&str> = unsigned.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(CalendarError::InvalidFormat(s.to_owned()));
        };
        if month.len() != 2 || day.len() != 2 {
            return Err(CalendarError::InvalidFormat(s.to_owned()));
        }

        let year: i32 = Self::parse_component(year, 4, s)?;
        let month: u8 = Self::parse_component(month, 2, s)?;
        let day: u8 = Self::parse_component(day, 2, s)?;

        Self::new(if negative { -year } else { year }, month, day)
    }
}

impl PartialOrd for CivilDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CivilDate {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month, self.day).cmp(&(other.year, other.month, other.day))
    }
}

impl serde::Serialize for CivilDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CivilDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
