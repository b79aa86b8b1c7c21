/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Display names for each month (index 0 is unused, months are 1-indexed)
pub const MONTH_NAMES: [&str; 13] = [
    "",
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Weekday column labels, Sunday first
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Number of weekdays in a cycle
pub const DAYS_IN_WEEK: i64 = 7;

pub const DAYS_IN_COMMON_YEAR: i64 = 365;
pub const DAYS_IN_LEAP_YEAR: i64 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Year whose Jan 1 is day 0 for calendar grids (a Wednesday)
pub const CALENDAR_EPOCH_YEAR: i32 = 1800;
/// Year whose Jan 1 is millisecond 0 for timestamps (a Thursday)
pub const UNIX_EPOCH_YEAR: i32 = 1970;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;
pub const MILLIS_PER_WEEK: i64 = 604_800_000;
/// Approximate year used for relative-time cutoffs (365.05 days)
pub const MILLIS_PER_APPROX_YEAR: i64 = 31_540_000_000;

pub const MINUTES_PER_HOUR: i64 = 60;
pub const SECONDS_PER_MINUTE: i64 = 60;

/// Default total width of a rendered month grid
pub const DEFAULT_GRID_WIDTH: usize = 33;
/// Default width of a single day cell
pub const DEFAULT_CELL_WIDTH: usize = 5;
/// Width of the right-aligned day number inside a cell
pub const DAY_NUMBER_WIDTH: usize = 3;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
