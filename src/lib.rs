//! A Gregorian calendar date that normalizes out-of-range components and
//! parses ISO 8601 (`2006-01-02`) and U.S. (`1/2/2006`, `1/2`) text.
//!
//! ```
//! use gregorian_date::{Date, FixedYear};
//!
//! let date = Date::new(2019, 13, 1);
//! assert_eq!(date, Date::new(2020, 1, 1));
//! assert_eq!(date.to_string(), "2020-01-01");
//!
//! let parsed = Date::parse_with("2/6", &FixedYear(2020)).unwrap();
//! assert_eq!(parsed, Date::new(2020, 2, 6));
//! ```

mod civil;
mod clock;
mod consts;
mod error;
mod parse;
mod prelude;

pub use civil::{days_in_month, is_leap_year};
pub use clock::{FixedYear, SystemClock, YearSource};
pub use consts::*;
pub use error::{DateFormat, Field, ParseError, ParseErrorKind};

use std::fmt;
use std::str::FromStr;

/// A day in the proleptic Gregorian calendar.
///
/// Every `Date` is a valid calendar day: [`Date::new`] folds any
/// out-of-range month or day into the date it denotes, so there is no
/// fallible constructor.
///
/// Components are stored one less than their public values, which makes the
/// derived `Default` (and [`Date::ZERO`]) January 1 of year 1. The derived
/// ordering is therefore chronological.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: i64,
    month: u8,
    day: u8,
}

impl Date {
    /// January 1 of year 1, the default value.
    pub const ZERO: Self = Self {
        year: 0,
        month: 0,
        day: 0,
    };

    /// Earliest representable date. Normalization saturates here.
    pub const MIN: Self = Self {
        year: i64::MIN,
        month: 0,
        day: 0,
    };

    /// Latest representable date, December 31 of year `i64::MAX`.
    /// Normalization saturates here.
    pub const MAX: Self = Self {
        year: i64::MAX - 1,
        month: MAX_MONTH - 1,
        day: DAYS_IN_MONTH[MAX_MONTH as usize] - 1,
    };

    /// Returns the date for `year`, `month` and `day`.
    ///
    /// Month and day may be outside their usual ranges, including zero or
    /// negative; they are normalized the way a calendar would count them.
    /// Month 13 is January of the next year and day 0 is the last day of the
    /// previous month.
    ///
    /// ```
    /// use gregorian_date::Date;
    ///
    /// assert_eq!(Date::new(2019, 2, 29), Date::new(2019, 3, 1));
    /// assert_eq!(Date::new(2020, 3, 0), Date::new(2020, 2, 29));
    /// ```
    pub fn new(year: i64, month: i64, day: i64) -> Self {
        Self::normalized(i128::from(year), i128::from(month), i128::from(day))
    }

    fn normalized(year: i128, month: i128, day: i128) -> Self {
        let (year, month, day) = civil::normalize(year, month, day);
        match i64::try_from(year - 1) {
            Ok(year) if year <= Self::MAX.year => Self {
                year,
                month: month - 1,
                day: day - 1,
            },
            _ if year > 0 => Self::MAX,
            _ => Self::MIN,
        }
    }

    /// Parses ISO (`2006-01-02`) or U.S. (`1/2/2006`, `1/2`) text. A U.S.
    /// date without a year takes it from `clock`.
    ///
    /// A `/` anywhere selects the U.S. grammar, otherwise a `-` selects ISO.
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    /// Returns [`ParseError`] if the text is empty, matches neither grammar,
    /// has a non-integer component, a month outside `1..=12`, a day outside
    /// `1..=31`, or a U.S. year below 100.
    pub fn parse_with<C>(s: &str, clock: &C) -> Result<Self, ParseError>
    where
        C: YearSource + ?Sized,
    {
        parse::parse_date(s, clock)
    }

    /// Parses `month/day` or `month/day/year` only.
    ///
    /// # Errors
    /// See [`Date::parse_with`].
    pub fn parse_us<C>(s: &str, clock: &C) -> Result<Self, ParseError>
    where
        C: YearSource + ?Sized,
    {
        parse::parse_us(s, clock)
    }

    /// Parses `year-month-day` only.
    ///
    /// A leading `-` is read as the sign of the year, so the negative years
    /// that [`Display`](fmt::Display) writes (`-044-03-15`) parse back.
    ///
    /// ```
    /// use gregorian_date::Date;
    ///
    /// assert_eq!(Date::parse_iso("-044-03-15"), Ok(Date::new(-44, 3, 15)));
    /// ```
    ///
    /// # Errors
    /// See [`Date::parse_with`].
    pub fn parse_iso(s: &str) -> Result<Self, ParseError> {
        parse::parse_iso(s)
    }

    /// Returns the year.
    pub const fn year(&self) -> i64 {
        self.year + 1
    }

    /// Returns the month of the year, 1-12.
    pub const fn month(&self) -> u8 {
        self.month + 1
    }

    /// Returns the day of the month, starting at 1.
    pub const fn day(&self) -> u8 {
        self.day + 1
    }

    /// Reports whether `self` falls strictly before `other`.
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Returns the date `years`, `months` and `days` after `self`.
    ///
    /// The offsets are added to the public components and the result is
    /// normalized, so adding one month to January 31 gives March 3 (or
    /// March 2 in a leap year).
    ///
    /// ```
    /// use gregorian_date::Date;
    ///
    /// let date = Date::new(2019, 1, 31);
    /// assert_eq!(date.add(0, 1, 0), Date::new(2019, 3, 3));
    /// assert_eq!(date.add(0, 0, -31), Date::new(2018, 12, 31));
    /// ```
    #[must_use]
    pub fn add(&self, years: i64, months: i64, days: i64) -> Self {
        Self::normalized(
            i128::from(self.year()) + i128::from(years),
            i128::from(self.month()) + i128::from(months),
            i128::from(self.day()) + i128::from(days),
        )
    }

    /// Reports whether `self` is [`Date::ZERO`].
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Reports whether this date's year has a February 29.
    pub const fn is_leap_year(&self) -> bool {
        is_leap_year(self.year())
    }

    /// Number of days in this date's month.
    pub const fn days_in_month(&self) -> u8 {
        days_in_month(self.year(), self.month())
    }

    /// ISO 8601 text, the same as [`Display`](fmt::Display).
    pub fn to_text(&self) -> Vec<u8> {
        self.to_string().into_bytes()
    }

    /// Reads text produced by [`Date::to_text`]. Only the ISO grammar is
    /// accepted.
    ///
    /// # Errors
    /// Returns [`ParseError`] if the bytes are not UTF-8 or not an ISO date.
    pub fn from_text(bytes: &[u8]) -> Result<Self, ParseError> {
        let s = std::str::from_utf8(bytes).map_err(|_| {
            ParseError::new(
                &String::from_utf8_lossy(bytes),
                Some(DateFormat::Iso),
                ParseErrorKind::NotUtf8,
            )
        })?;
        Self::parse_iso(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }
}

/// Parses with the year taken from the [`SystemClock`].
impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &SystemClock)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}


#[cfg(test)]
mod proptest_tests {
    use super::*;
    use proptest::prelude::*;

    const RANGE: std::ops::RangeInclusive<i64> = -1_000_000..=1_000_000;

    fn any_date() -> impl Strategy<Value = Date> {
        (-10_000_i64..=10_000, -50_i64..=50, -1_000_i64..=1_000)
            .prop_map(|(y, m, d)| Date::new(y, m, d))
    }

    proptest! {
        #[test]
        fn normalization_closure(y in RANGE, m in RANGE, d in RANGE) {
            let date = Date::new(y, m, d);
            prop_assert!((1..=12).contains(&date.month()));
            prop_assert!(date.day() >= 1);
            prop_assert!(date.day() <= days_in_month(date.year(), date.month()));
        }

        #[test]
        fn normalization_is_idempotent(date in any_date()) {
            let again = Date::new(
                date.year(),
                i64::from(date.month()),
                i64::from(date.day()),
            );
            prop_assert_eq!(again, date);
        }

        #[test]
        fn text_round_trip(date in any_date()) {
            prop_assert_eq!(Date::from_text(&date.to_text()), Ok(date));
        }

        #[test]
        fn serde_round_trip(date in any_date()) {
            let json = serde_json::to_string(&date).unwrap();
            let back: Date = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, date);
        }

        #[test]
        fn ordering_is_total(a in any_date(), b in any_date()) {
            let outcomes = [a.is_before(&b), a == b, b.is_before(&a)];
            prop_assert_eq!(outcomes.iter().filter(|&&held| held).count(), 1);
        }

        #[test]
        fn add_matches_construction(
            date in any_date(),
            years in -500_i64..=500,
            months in -500_i64..=500,
            days in -5_000_i64..=5_000,
        ) {
            let expected = Date::new(
                date.year() + years,
                i64::from(date.month()) + months,
                i64::from(date.day()) + days,
            );
            prop_assert_eq!(date.add(years, months, days), expected);
        }

        #[test]
        fn adding_days_moves_by_day_count(date in any_date(), days in -5_000_i64..=5_000) {
            let later = date.add(0, 0, days);
            prop_assert_eq!(later.add(0, 0, -days), date);
            prop_assert_eq!(days > 0, date.is_before(&later));
        }

        #[test]
        fn iso_parse_of_display(date in any_date()) {
            let clock = FixedYear(2020);
            prop_assert_eq!(Date::parse_with(&date.to_string(), &clock), Ok(date));
        }
    }
}
