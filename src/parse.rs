//! Text grammars for [`Date`].
//!
//! Both grammars only check that each component is plausible on its own
//! (month in `1..=12`, day in `1..=31`). Whether the day exists in that
//! month is left to [`Date::new`], so `2019-04-31` is accepted and lands on
//! May 1.

use tracing::{debug, trace};

use crate::clock::YearSource;
use crate::consts::{
    DATE_SEPARATOR, MAX_MONTH, MAX_PARSED_DAY, MIN_DAY, MIN_EXPLICIT_US_YEAR, MONTH_FIRST_SEPARATOR,
};
use crate::error::{DateFormat, Field, ParseError, ParseErrorKind};
use crate::Date;

/// Parses either grammar, choosing by separator. Surrounding whitespace is
/// ignored.
pub(crate) fn parse_date<C>(s: &str, clock: &C) -> Result<Date, ParseError>
where
    C: YearSource + ?Sized,
{
    let trimmed = s.trim();
    let result = if trimmed.is_empty() {
        Err(ParseError::empty())
    } else if trimmed.contains(MONTH_FIRST_SEPARATOR) {
        Grammar::US.parse_us(trimmed, clock)
    } else if trimmed.contains(DATE_SEPARATOR) {
        Grammar::ISO.parse_iso(trimmed)
    } else {
        Err(ParseError::new(
            trimmed,
            None,
            ParseErrorKind::UnknownFormat,
        ))
    };
    result.inspect_err(|err| debug!(input = s, error = %err, "rejected date"))
}

/// Parses `month/day` or `month/day/year`.
pub(crate) fn parse_us<C>(s: &str, clock: &C) -> Result<Date, ParseError>
where
    C: YearSource + ?Sized,
{
    Grammar::US
        .parse_us(s, clock)
        .inspect_err(|err| debug!(input = s, error = %err, "rejected US date"))
}

/// Parses `year-month-day`. Used on its own for deserialization, where the
/// U.S. grammar is not accepted.
pub(crate) fn parse_iso(s: &str) -> Result<Date, ParseError> {
    Grammar::ISO
        .parse_iso(s)
        .inspect_err(|err| debug!(input = s, error = %err, "rejected ISO date"))
}

struct Grammar {
    format: DateFormat,
}

impl Grammar {
    const US: Self = Self {
        format: DateFormat::Us,
    };
    const ISO: Self = Self {
        format: DateFormat::Iso,
    };

    fn parse_us<C>(&self, s: &str, clock: &C) -> Result<Date, ParseError>
    where
        C: YearSource + ?Sized,
    {
        let parts: Vec<&str> = s.split(MONTH_FIRST_SEPARATOR).collect();
        let (month, day, year) = match parts.as_slice() {
            [month, day] => (*month, *day, None),
            [month, day, year] => (*month, *day, Some(*year)),
            _ => return Err(self.error(s, ParseErrorKind::UnknownFormat)),
        };

        let month = self.month(s, month)?;
        let day = self.day(s, day)?;
        let year = match year {
            Some(year) => {
                let year = self.integer(s, Field::Year, year)?;
                if year < MIN_EXPLICIT_US_YEAR {
                    return Err(self.error(s, ParseErrorKind::ShortYear));
                }
                year
            }
            None => {
                let year = clock.current_year();
                trace!(input = s, year, "defaulted year from clock");
                year
            }
        };
        Ok(Date::new(year, month, day))
    }

    fn parse_iso(&self, s: &str) -> Result<Date, ParseError> {
        // A leading separator is the sign of a negative year, as rendered by
        // `Display`, so keep it attached to the year field.
        let sign_len = usize::from(s.starts_with(DATE_SEPARATOR));
        let parts: Vec<&str> = s[sign_len..].split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(self.error(s, ParseErrorKind::UnknownFormat));
        };

        let year = self.integer(s, Field::Year, &s[..sign_len + year.len()])?;
        let month = self.month(s, month)?;
        let day = self.day(s, day)?;
        Ok(Date::new(year, month, day))
    }

    fn error(&self, s: &str, kind: ParseErrorKind) -> ParseError {
        ParseError::new(s, Some(self.format), kind)
    }

    fn integer(&self, s: &str, field: Field, part: &str) -> Result<i64, ParseError> {
        part.parse::<i64>().map_err(|source| {
            self.error(s, ParseErrorKind::InvalidInteger { field, source })
        })
    }

    fn month(&self, s: &str, part: &str) -> Result<i64, ParseError> {
        let month = self.integer(s, Field::Month, part)?;
        if !(1..=i64::from(MAX_MONTH)).contains(&month) {
            return Err(self.error(s, ParseErrorKind::InvalidMonth(month)));
        }
        Ok(month)
    }

    fn day(&self, s: &str, part: &str) -> Result<i64, ParseError> {
        let day = self.integer(s, Field::Day, part)?;
        if !(i64::from(MIN_DAY)..=i64::from(MAX_PARSED_DAY)).contains(&day) {
            return Err(self.error(s, ParseErrorKind::InvalidDay(day)));
        }
        Ok(day)
    }
}
