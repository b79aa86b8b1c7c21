use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{
    MILLIS_PER_APPROX_YEAR, MILLIS_PER_DAY, MILLIS_PER_HOUR, MILLIS_PER_MINUTE, MILLIS_PER_WEEK,
};
use crate::time::Timestamp;
use crate::types::Month;

/// How long ago a moment was, coarsened for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RelativeTime {
    /// Less than a minute ago, or in the future
    JustNow,
    Minutes { count: i64 },
    Hours { count: i64 },
    Days { count: i64 },
    /// Within roughly a year: shown as month and day
    MonthDay { month: Month, day: u8 },
    MonthDayYear { month: Month, day: u8, year: i32 },
}

/// Describes `then` relative to `now`, both in milliseconds since the Unix epoch.
pub fn describe_elapsed(now_millis: i64, then_millis: i64) -> RelativeTime {
    let elapsed = now_millis.saturating_sub(then_millis);

    if elapsed < MILLIS_PER_MINUTE {
        return RelativeTime::JustNow;
    }
    if elapsed < MILLIS_PER_HOUR {
        return RelativeTime::Minutes {
            count: elapsed / MILLIS_PER_MINUTE,
        };
    }
    if elapsed < MILLIS_PER_DAY {
        return RelativeTime::Hours {
            count: elapsed / MILLIS_PER_HOUR,
        };
    }
    if elapsed < MILLIS_PER_WEEK {
        return RelativeTime::Days {
            count: elapsed / MILLIS_PER_DAY,
        };
    }

    let then = Timestamp::from_millis(then_millis);
    if elapsed < MILLIS_PER_APPROX_YEAR {
        RelativeTime::MonthDay {
            month: then.month(),
            day:   then.day(),
        }
    } else {
        RelativeTime::MonthDayYear {
            month: then.month(),
            day:   then.day(),
            year:  then.year(),
        }
    }
}

fn write_ago(f: &mut fmt::Formatter<'_>, count: i64, unit: &str) -> fmt::Result {
    let plural = if count == 1 { "" } else { "s" };
    write!(f, "{count} {unit}{plural} ago")
}

impl fmt::Display for RelativeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::JustNow => f.write_str("just now"),
            Self::Minutes { count } => write_ago(f, count, "minute"),
            Self::Hours { count } => write_ago(f, count, "hour"),
            Self::Days { count } => write_ago(f, count, "day"),
            Self::MonthDay { month, day } => write!(f, "{} {day}", month.name()),
            Self::MonthDayYear { month, day, year } => write!(f, "{} {day} {year}", month.name()),
        }
    }
}
