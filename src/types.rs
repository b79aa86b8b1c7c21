use crate::CalendarError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, DAYS_IN_WEEK,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH, MIN_DAY, MONTH_NAMES,
    WEEKDAY_LABELS,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A calendar month. The discriminant is the 1-based month number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Month {
    January = 1,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// All months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::January,
        Self::February,
        Self::March,
        Self::April,
        Self::May,
        Self::June,
        Self::July,
        Self::August,
        Self::September,
        Self::October,
        Self::November,
        Self::December,
    ];

    /// Creates a Month from its 1-based number
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        if value == 0 || value > MAX_MONTH {
            tracing::debug!(month = value, "rejected month outside 1..=12");
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self::ALL[usize::from(value - 1)])
    }

    /// Returns the 1-based month number
    #[inline]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// English month name, e.g. "February"
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self as usize]
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.number()
    }
}

/// A day-of-month value guaranteed to be valid for the year and month it was
/// created against. Uses `NonZeroU8` internally, so 0 is not a valid day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: i32, month: Month) -> Result<Self, CalendarError> {
        let invalid = || {
            tracing::debug!(year, month = month.number(), day = value, "rejected day outside month");
            CalendarError::InvalidDay {
                year,
                month: month.number(),
                day: value,
            }
        };

        let non_zero = NonZeroU8::new(value).ok_or_else(invalid)?;
        if value > days_in_month(year, month) {
            return Err(invalid());
        }
        Ok(Self(non_zero))
    }

    /// Day for a 0-based offset into a month. Callers keep `offset` below
    /// the month length.
    pub(crate) const fn from_offset(offset: u8) -> Self {
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // No month context here, so only the absolute bounds can be checked
        NonZeroU8::new(value)
            .filter(|_| value <= DAYS_IN_MONTH[usize::from(MAX_MONTH)])
            .map(Self)
            .ok_or(CalendarError::InvalidDay {
                year: 0,
                month: 0,
                day: value,
            })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Day of the week, Sunday first. The discriminant is the column index used by
/// month grids.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Creates a Weekday from its index (0 = Sunday)
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekday` if the index is greater than 6.
    pub fn new(index: u8) -> Result<Self, CalendarError> {
        Self::ALL
            .get(usize::from(index))
            .copied()
            .ok_or(CalendarError::InvalidWeekday(index))
    }

    /// Weekday for any signed index, wrapping cyclically.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_index(index: i64) -> Self {
        // rem_euclid keeps the result in 0..7 even for negative indices
        Self::ALL[index.rem_euclid(DAYS_IN_WEEK) as usize]
    }

    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Three-letter column label, e.g. "Thu"
    pub const fn label(self) -> &'static str {
        WEEKDAY_LABELS[self as usize]
    }

    /// Weekday `days` after this one (negative goes backwards).
    pub const fn add_days(self, days: i64) -> Self {
        Self::from_index(self as i64 + days.rem_euclid(DAYS_IN_WEEK))
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.index()
    }
}

// Helper functions

/// Proleptic Gregorian leap-year rule; valid for zero and negative years.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: Month) -> u8 {
    if matches!(month, Month::February) && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

pub const fn days_in_year(year: i32) -> i64 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

pub(crate) const FIRST_DAY: Day = Day::from_offset(MIN_DAY - 1);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            let month = Month::new(m).unwrap();
            assert_eq!(month.number(), m, "Month {m} should round-trip its number");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(CalendarError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(CalendarError::InvalidMonth(13))));
        assert!(matches!(Month::new(255), Err(CalendarError::InvalidMonth(255))));
    }

    #[test]
    fn test_month_names_and_display() {
        assert_eq!(Month::January.name(), "January");
        assert_eq!(Month::February.name(), "February");
        assert_eq!(Month::December.name(), "December");
        assert_eq!(Month::September.to_string(), "September");
    }

    #[test]
    fn test_month_ordering() {
        assert!(Month::March < Month::August);
        assert_eq!(Month::ALL.len(), 12);
        assert!(Month::ALL.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_month_serde() {
        let json = serde_json::to_string(&Month::August).unwrap();
        assert_eq!(json, "8");

        let parsed: Month = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Month::August);

        let result: Result<Month, _> = serde_json::from_str("13");
        assert!(result.is_err());
    }

    #[test]
    fn test_day_new_valid() {
        // January - 31 days
        assert!(Day::new(1, 2024, Month::January).is_ok());
        assert!(Day::new(31, 2024, Month::January).is_ok());

        // February non-leap - 28 days
        assert!(Day::new(28, 2023, Month::February).is_ok());
        assert!(Day::new(29, 2023, Month::February).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, Month::February).is_ok());
        assert!(Day::new(30, 2024, Month::February).is_err());

        // April - 30 days
        assert!(Day::new(30, 2024, Month::April).is_ok());
        assert!(Day::new(31, 2024, Month::April).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(
            Day::new(0, 2024, Month::January),
            Err(CalendarError::InvalidDay { day: 0, .. })
        ));
        assert!(matches!(
            Day::new(32, 2024, Month::January),
            Err(CalendarError::InvalidDay {
                year: 2024,
                month: 1,
                day: 32
            })
        ));
    }

    #[test]
    fn test_day_try_from_u8() {
        let day: Day = 15.try_into().unwrap();
        assert_eq!(day.get(), 15);

        let result: Result<Day, _> = 0.try_into();
        assert!(result.is_err());

        let result: Result<Day, _> = 32.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_day_from_offset() {
        assert_eq!(Day::from_offset(0).get(), 1);
        assert_eq!(Day::from_offset(30).get(), 31);
        assert_eq!(FIRST_DAY.get(), 1);
    }

    #[test]
    fn test_weekday_from_index_wraps() {
        assert_eq!(Weekday::from_index(0), Weekday::Sunday);
        assert_eq!(Weekday::from_index(6), Weekday::Saturday);
        assert_eq!(Weekday::from_index(7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(-1), Weekday::Saturday);
        assert_eq!(Weekday::from_index(-7), Weekday::Sunday);
        assert_eq!(Weekday::from_index(-8), Weekday::Saturday);
        // 2^63 is 1 mod 7
        assert_eq!(Weekday::from_index(i64::MAX), Weekday::Sunday);
        assert_eq!(Weekday::from_index(i64::MIN), Weekday::Saturday);
    }

    #[test]
    fn test_weekday_new_and_labels() {
        assert_eq!(Weekday::new(3).unwrap(), Weekday::Wednesday);
        assert!(matches!(Weekday::new(7), Err(CalendarError::InvalidWeekday(7))));
        assert_eq!(Weekday::Thursday.label(), "Thu");
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
        assert_eq!(Weekday::Saturday.index(), 6);
    }

    #[test]
    fn test_weekday_add_days() {
        assert_eq!(Weekday::Saturday.add_days(1), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.add_days(-1), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.add_days(14), Weekday::Wednesday);
        assert_eq!(Weekday::Thursday.add_days(-29), Weekday::Wednesday);
    }

    #[test]
    fn test_weekday_serde() {
        let json = serde_json::to_string(&Weekday::Friday).unwrap();
        assert_eq!(json, "5");
        let parsed: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Weekday::Friday);
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase { year: 2020, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2024, is_leap: true, description: "divisible by 4" },
            TestCase { year: 2021, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 2023, is_leap: false, description: "not divisible by 4" },
            TestCase { year: 1900, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2100, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 1800, is_leap: false, description: "century not divisible by 400" },
            TestCase { year: 2000, is_leap: true, description: "divisible by 400" },
            TestCase { year: 1600, is_leap: true, description: "divisible by 400" },
            TestCase { year: 0, is_leap: true, description: "year zero is divisible by 400" },
            TestCase { year: -4, is_leap: true, description: "negative, divisible by 4" },
            TestCase { year: -1, is_leap: false, description: "negative, not divisible by 4" },
            TestCase { year: -100, is_leap: false, description: "negative century" },
            TestCase { year: -400, is_leap: true, description: "negative, divisible by 400" },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in [1, 3, 5, 7, 8, 10, 12] {
            let month = Month::new(month).unwrap();
            assert_eq!(days_in_month(2024, month), 31, "{month} should have 31 days");
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for year in [-401, 1800, 1900, 2000, 2023, 2024] {
            for month in [Month::April, Month::June, Month::September, Month::November] {
                assert_eq!(days_in_month(year, month), 30, "{month} {year} should have 30 days");
            }
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2024, Month::February), 29);
        assert_eq!(days_in_month(2023, Month::February), 28);
        assert_eq!(days_in_month(2000, Month::February), 29, "Century year divisible by 400");
        assert_eq!(days_in_month(1900, Month::February), 28, "Century year not divisible by 400");
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(2023), 365);
        assert_eq!(days_in_year(2024), 366);
        let total: i64 = Month::ALL.iter().map(|&m| i64::from(days_in_month(2024, m))).sum();
        assert_eq!(total, days_in_year(2024));
    }
}
