//! Millisecond timestamps relative to 1970-01-01T00:00:00.000Z.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MINUTES_PER_HOUR,
    SECONDS_PER_MINUTE, UNIX_EPOCH_YEAR,
};
use crate::epoch::{to_civil_date, to_day_count};
use crate::prelude::*;
use crate::types::{Month, Weekday};
use crate::{CalendarError, CivilDate, write_year};

/// Time of day. Every field is within its range regardless of the sign of the
/// millisecond count it came from.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[display(fmt = "{hours:02}:{minutes:02}:{seconds:02}.{milliseconds:03}")]
#[serde(try_from = "RawCivilTime", into = "RawCivilTime")]
pub struct CivilTime {
    hours:        u8,
    minutes:      u8,
    seconds:      u8,
    milliseconds: u16,
}

/// Unvalidated field layout used for (de)serialization.
#[derive(Serialize, Deserialize)]
struct RawCivilTime {
    hours:        u8,
    minutes:      u8,
    seconds:      u8,
    milliseconds: u16,
}

impl CivilTime {
    pub const MIDNIGHT: Self = Self {
        hours:        0,
        minutes:      0,
        seconds:      0,
        milliseconds: 0,
    };

    /// Creates a time of day from its fields.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidTime` if any field is out of range.
    pub fn new(hours: u8, minutes: u8, seconds: u8, milliseconds: u16) -> Result<Self, CalendarError> {
        if hours > 23 || minutes > 59 || seconds > 59 || milliseconds > 999 {
            tracing::debug!(hours, minutes, seconds, milliseconds, "rejected time of day");
            return Err(CalendarError::InvalidTime {
                hours,
                minutes,
                seconds,
                milliseconds,
            });
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
            milliseconds,
        })
    }

    /// Splits a millisecond offset into the day. `ms` must be in `[0, MILLIS_PER_DAY)`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    const fn from_millis_of_day(ms: i64) -> Self {
        Self {
            hours:        (ms / MILLIS_PER_HOUR) as u8,
            minutes:      ((ms / MILLIS_PER_MINUTE) % MINUTES_PER_HOUR) as u8,
            seconds:      ((ms / MILLIS_PER_SECOND) % SECONDS_PER_MINUTE) as u8,
            milliseconds: (ms % MILLIS_PER_SECOND) as u16,
        }
    }

    /// Milliseconds elapsed since midnight
    pub fn millis_of_day(&self) -> i64 {
        i64::from(self.hours) * MILLIS_PER_HOUR
            + i64::from(self.minutes) * MILLIS_PER_MINUTE
            + i64::from(self.seconds) * MILLIS_PER_SECOND
            + i64::from(self.milliseconds)
    }

    #[inline]
    pub const fn hours(&self) -> u8 {
        self.hours
    }

    #[inline]
    pub const fn minutes(&self) -> u8 {
        self.minutes
    }

    #[inline]
    pub const fn seconds(&self) -> u8 {
        self.seconds
    }

    #[inline]
    pub const fn milliseconds(&self) -> u16 {
        self.milliseconds
    }
}

impl TryFrom<RawCivilTime> for CivilTime {
    type Error = CalendarError;

    fn try_from(raw: RawCivilTime) -> Result<Self, Self::Error> {
        Self::new(raw.hours, raw.minutes, raw.seconds, raw.milliseconds)
    }
}

impl From<CivilTime> for RawCivilTime {
    fn from(time: CivilTime) -> Self {
        Self {
            hours:        time.hours,
            minutes:      time.minutes,
            seconds:      time.seconds,
            milliseconds: time.milliseconds,
        }
    }
}

/// A signed millisecond count split into whole days and the time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DecomposedMillis {
    /// Days since 1970-01-01, rounded toward negative infinity
    pub day_count: i64,
    pub time:      CivilTime,
}

/// Splits `millis` (relative to the Unix epoch) into a day count and time of day.
///
/// Uses floor division, so `-1` is the last millisecond of the previous day.
pub const fn decompose_millis(millis: i64) -> DecomposedMillis {
    DecomposedMillis {
        day_count: millis.div_euclid(MILLIS_PER_DAY),
        time:      CivilTime::from_millis_of_day(millis.rem_euclid(MILLIS_PER_DAY)),
    }
}

/// Formats `YYYY-MM-DDTHH:mm:ss.sssZ`.
pub fn format_iso8601(date: CivilDate, time: CivilTime) -> String {
    Iso8601(date, time).to_string()
}

struct Iso8601(CivilDate, CivilTime);

impl fmt::Display for Iso8601 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iso8601(f, self.0, self.1)
    }
}

fn write_iso8601(out: &mut impl fmt::Write, date: CivilDate, time: CivilTime) -> fmt::Result {
    write_year(out, date.year())?;
    write!(
        out,
        "-{:02}-{:02}T{time}Z",
        date.month().number(),
        date.day()
    )
}

/// A millisecond timestamp together with its civil date and time (UTC).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub struct Timestamp {
    millis: i64,
    date:   CivilDate,
    time:   CivilTime,
}

impl Timestamp {
    /// Decomposes milliseconds since the Unix epoch into a civil date and time.
    pub fn from_millis(millis: i64) -> Self {
        let DecomposedMillis { day_count, time } = decompose_millis(millis);
        Self {
            millis,
            date: to_civil_date(day_count, UNIX_EPOCH_YEAR),
            time,
        }
    }

    /// Builds the timestamp for a civil date and time.
    ///
    /// # Errors
    /// Returns `CalendarError::TimestampOutOfRange` if the moment does not fit
    /// in an `i64` millisecond count (roughly beyond year 292,000,000).
    pub fn from_civil(date: CivilDate, time: CivilTime) -> Result<Self, CalendarError> {
        let millis = to_day_count(date, UNIX_EPOCH_YEAR)
            .checked_mul(MILLIS_PER_DAY)
            .and_then(|day_millis| day_millis.checked_add(time.millis_of_day()))
            .ok_or_else(|| {
                tracing::debug!(%date, %time, "rejected timestamp outside i64 milliseconds");
                CalendarError::TimestampOutOfRange { date, time }
            })?;
        Ok(Self { millis, date, time })
    }

    /// Milliseconds since 1970-01-01T00:00:00.000Z
    #[inline]
    pub const fn millis(&self) -> i64 {
        self.millis
    }

    /// Civil date (UTC)
    #[inline]
    pub const fn date(&self) -> CivilDate {
        self.date
    }

    /// Time of day (UTC)
    #[inline]
    pub const fn time(&self) -> CivilTime {
        self.time
    }

    /// Calendar year
    pub const fn year(&self) -> i32 {
        self.date.year()
    }

    /// Calendar month
    pub const fn month(&self) -> Month {
        self.date.month()
    }

    /// Day of month
    pub const fn day(&self) -> u8 {
        self.date.day()
    }

    /// Hour of day, 0-23
    pub const fn hours(&self) -> u8 {
        self.time.hours
    }

    /// Minute of hour, 0-59
    pub const fn minutes(&self) -> u8 {
        self.time.minutes
    }

    /// Second of minute, 0-59
    pub const fn seconds(&self) -> u8 {
        self.time.seconds
    }

    /// Millisecond of second, 0-999
    pub const fn milliseconds(&self) -> u16 {
        self.time.milliseconds
    }

    /// Day of the week (UTC)
    pub fn weekday(&self) -> Weekday {
        self.date.weekday(crate::EpochReference::UNIX)
    }
}

impl From<i64> for Timestamp {
    fn from(millis: i64) -> Self {
        Self::from_millis(millis)
    }
}

impl From<Timestamp> for i64 {
    fn from(timestamp: Timestamp) -> Self {
        timestamp.millis
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_iso8601(f, self.date, self.time)
    }
}
