//! Proleptic Gregorian calendar arithmetic.
//!
//! Dates are converted to a count of days relative to 1970-01-01 and back,
//! using the era-based algorithms from Howard Hinnant's `chrono`-compatible
//! date paper. Working in day counts means month and day overflow, in either
//! direction, falls out of plain integer addition.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_CYCLE, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MONTHS_PER_YEAR, UNIX_EPOCH_SHIFT,
};

const CYCLE_YEARS: i128 = GREGORIAN_CYCLE as i128;
const MONTHS: i128 = MONTHS_PER_YEAR as i128;

/// Reports whether `year` has 366 days.
pub const fn is_leap_year(year: i64) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Number of days in `month` (1-12) of `year`.
pub const fn days_in_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Days since 1970-01-01 of `year`-`month`-`day`.
///
/// `month` must be in `1..=12`; `day` may be any value and is counted
/// linearly from the first of the month.
pub(crate) fn days_from_civil(year: i128, month: u8, day: i128) -> i128 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    // Years start on March 1 so the leap day is the last day of the year.
    let y = if month <= FEBRUARY { year - 1 } else { year };
    let era = y.div_euclid(CYCLE_YEARS);
    let yoe = y - era * CYCLE_YEARS; // [0, 399]
    let mp = (i128::from(month) + 9) % MONTHS; // March == 0
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_CYCLE + doe - UNIX_EPOCH_SHIFT
}

/// Inverse of [`days_from_civil`]: the (year, month, day) falling `days`
/// days after 1970-01-01.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn civil_from_days(days: i128) -> (i128, u8, u8) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_CYCLE);
    let doe = z - era * DAYS_PER_CYCLE; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146_096) / 365; // [0, 399]
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let day = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let month = (if mp < 10 { mp + 3 } else { mp - 9 }) as u8;
    let year = yoe + era * CYCLE_YEARS;
    let year = if month <= FEBRUARY { year + 1 } else { year };
    (year, month, day)
}

/// Folds an arbitrary (year, month, day) triple into the unique valid date
/// it denotes. Months carry into years first, then days carry across
/// months using the true month lengths.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn normalize(year: i128, month: i128, day: i128) -> (i128, u8, u8) {
    let month0 = month - 1;
    let year = year + month0.div_euclid(MONTHS);
    let month = (month0.rem_euclid(MONTHS) + 1) as u8;
    civil_from_days(days_from_civil(year, month, 1) + (day - 1))
}
