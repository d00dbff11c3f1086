/// Number of months in a year
pub const MONTHS_PER_YEAR: u8 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Largest day number either text grammar accepts before normalization
pub const MAX_PARSED_DAY: u8 = 31;

/// Smallest year the U.S. grammar accepts when the year is spelled out.
/// Anything below is treated as two-digit shorthand and rejected.
pub const MIN_EXPLICIT_US_YEAR: i64 = 100;

/// Month number for February
pub const FEBRUARY: u8 = 2;

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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

/// Days in one full 400-year Gregorian cycle
pub(crate) const DAYS_PER_CYCLE: i128 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const UNIX_EPOCH_SHIFT: i128 = 719_468;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
/// Month-first format separator (U.S. format)
pub const MONTH_FIRST_SEPARATOR: char = '/';
