use std::fmt;
use std::num::ParseIntError;

use crate::prelude::*;

/// The text grammar a parser was applying when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum DateFormat {
    /// `month/day` or `month/day/year`
    #[display(fmt = "US")]
    Us,
    /// `year-month-day`
    #[display(fmt = "ISO")]
    Iso,
}

/// A numeric component of a textual date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
}

/// Why a piece of text was not accepted as a date.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// Input was empty or only whitespace.
    #[error("empty date")]
    Empty,

    /// Separator or field count matches neither grammar.
    #[error("unknown format")]
    UnknownFormat,

    /// A component is not an integer.
    #[error("{field}: {source}")]
    InvalidInteger {
        field: Field,
        #[source]
        source: ParseIntError,
    },

    /// Month outside `1..=12`.
    #[error("invalid month {0}")]
    InvalidMonth(i64),

    /// Day outside `1..=31`.
    #[error("invalid day {0}")]
    InvalidDay(i64),

    /// A U.S. date spelled its year with fewer than three digits.
    #[error("short years not allowed")]
    ShortYear,

    /// Serialized bytes are not UTF-8.
    #[error("not valid UTF-8")]
    NotUtf8,
}

/// Error returned when text cannot be parsed into a [`Date`](crate::Date).
///
/// Carries the original input, the grammar being applied (if one had been
/// selected) and the cause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
    format: Option<DateFormat>,
    kind: ParseErrorKind,
}

impl ParseError {
    pub(crate) fn new(input: &str, format: Option<DateFormat>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.to_owned(),
            format,
            kind,
        }
    }

    pub(crate) fn empty() -> Self {
        Self::new("", None, ParseErrorKind::Empty)
    }

    /// The text that failed to parse, after trimming.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The grammar in effect, or `None` if dispatch failed before one was chosen.
    pub const fn format(&self) -> Option<DateFormat> {
        self.format
    }

    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// The component that was malformed or out of range, if the failure
    /// concerns a single component.
    pub const fn field(&self) -> Option<Field> {
        match self.kind {
            ParseErrorKind::InvalidInteger { field, .. } => Some(field),
            ParseErrorKind::InvalidMonth(_) => Some(Field::Month),
            ParseErrorKind::InvalidDay(_) => Some(Field::Day),
            ParseErrorKind::ShortYear => Some(Field::Year),
            ParseErrorKind::Empty | ParseErrorKind::UnknownFormat | ParseErrorKind::NotUtf8 => {
                None
            }
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, self.format) {
            (ParseErrorKind::Empty, _) => write!(f, "{}", self.kind),
            (kind, Some(format)) => write!(f, "parse {format} date {:?}: {kind}", self.input),
            (kind, None) => write!(f, "parse date {:?}: {kind}", self.input),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}
