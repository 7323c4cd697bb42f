use chrono::format::{parse, Parsed, StrftimeItems};
use chrono::NaiveDate;
use serde::{Serialize, Serializer};
use std::fmt;

/// First day of month, used when only year and month are known
pub const MIN_DAY: u32 = 1;

/// Date component separator
pub const DATE_SEPARATOR: char = '-';
/// Years are always written with exactly four digits
pub const YEAR_DIGITS: usize = 4;
/// Month and day may be written unpadded
pub const MAX_FIELD_DIGITS: usize = 2;

/// Formats accepted for the actual publication date, tried in order.
pub const ACTUAL_DATE_FORMATS: [DateFormat; 2] = [DateFormat::Day, DateFormat::Month];

/// Formats accepted for a player's guess.
pub const GUESS_DATE_FORMATS: [DateFormat; 1] = [DateFormat::Day];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    Day,
    Month,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    Day,
    /// `YYYY-MM`, resolved to the first day of the month
    Month,
}

impl DateFormat {
    pub fn pattern(self) -> &'static str {
        match self {
            Self::Day => "%Y-%m-%d",
            Self::Month => "%Y-%m",
        }
    }

    pub fn precision(self) -> Precision {
        match self {
            Self::Day => Precision::Day,
            Self::Month => Precision::Month,
        }
    }

    fn field_count(self) -> usize {
        match self {
            Self::Day => 3,
            Self::Month => 2,
        }
    }

    /// Strict layout check: a four-digit year, then one or two digits per
    /// remaining field, separated by single hyphens and nothing else.
    pub fn matches_shape(self, input: &str) -> bool {
        let parts: Vec<&str> = input.split(DATE_SEPARATOR).collect();
        if parts.len() != self.field_count() {
            return false;
        }
        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        parts.iter().copied().enumerate().all(|(index, part)| {
            let width_ok = if index == 0 {
                part.len() == YEAR_DIGITS
            } else {
                (1..=MAX_FIELD_DIGITS).contains(&part.len())
            };
            width_ok && all_digits(part)
        })
    }

    /// Attempts this single format. `None` means the input does not match.
    pub fn parse(self, input: &str) -> Option<ParsedDate> {
        if !self.matches_shape(input) {
            return None;
        }
        let mut parsed = Parsed::new();
        parse(&mut parsed, input, StrftimeItems::new(self.pattern())).ok()?;
        if matches!(self, Self::Month) {
            parsed.set_day(i64::from(MIN_DAY)).ok()?;
        }
        let date = parsed.to_naive_date().ok()?;
        Some(ParsedDate {
            date,
            precision: self.precision(),
        })
    }
}

/// A calendar date together with the precision it was written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParsedDate {
    pub date: NaiveDate,
    pub precision: Precision,
}

impl fmt::Display for ParsedDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            Precision::Day => write!(f, "{}", self.date.format("%Y-%m-%d")),
            Precision::Month => write!(f, "{}", self.date.format("%Y-%m")),
        }
    }
}

impl Serialize for ParsedDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateMatch {
    Parsed(ParsedDate),
    NoMatch,
}

impl DateMatch {
    pub fn into_option(self) -> Option<ParsedDate> {
        match self {
            Self::Parsed(date) => Some(date),
            Self::NoMatch => None,
        }
    }
}

/// Tries each format in order and returns the first match.
pub fn parse_with(input: &str, formats: &[DateFormat]) -> DateMatch {
    formats
        .iter()
        .find_map(|format| format.parse(input))
        .map_or(DateMatch::NoMatch, DateMatch::Parsed)
}
