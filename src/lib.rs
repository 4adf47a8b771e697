mod consts;
mod epoch;
mod gregorian;
mod names;
mod prelude;
mod republican;
mod roman;
mod types;

pub use consts::*;
pub use epoch::{CALENDAR_EPOCH, DayDelta, UPPER_BOUND, day_delta, validate};
pub use gregorian::GregorianDate;
pub use names::{DateNames, LookupError, NameResolver, StaticNames};
pub use republican::{Ordinals, complementary_days, days_in_year, decompose, is_leap_year};
pub use roman::year_to_roman;
pub use types::{Day, Month, RepublicanDay, RepublicanMonth, RepublicanYear, Year};

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A date of the French Republican calendar with its display names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepublicanDate {
    pub year:       RepublicanYear,
    /// Roman rendering of `year`, or `"-"` from year 4000 on
    pub year_roman: String,
    pub month:      String,
    pub month_of:   String,
    pub month_ord:  RepublicanMonth,
    pub day:        String,
    pub day_ord:    RepublicanDay,
    pub dedication: String,
}

impl RepublicanDate {
    /// The ordinals without the names
    pub const fn ordinals(&self) -> Ordinals {
        Ordinals {
            year:      self.year,
            month_ord: self.month_ord,
            day_ord:   self.day_ord,
        }
    }
}

/// Formats as `12 Nivôse an CCXXXIII`; years without a Roman rendering use digits.
impl fmt::Display for RepublicanDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} an ", self.day_ord, self.month)?;
        if self.year_roman == ROMAN_SENTINEL {
            write!(f, "{}", self.year)
        } else {
            f.write_str(&self.year_roman)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be at least 1)", "_0")]
    InvalidYear(u16),
    #[display(fmt = "Year {} is past {}", "_0", u16::MAX)]
    YearTooLarge(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { month: u8, day: u8, year: u16 },
    #[display(fmt = "Invalid republican month: {} (must be 1-{})", "_0", COMPLEMENTARY_MONTH)]
    InvalidRepublicanMonth(u8),
    #[display(fmt = "Invalid republican day: {} (must be 1-{})", "_0", DAYS_PER_MONTH)]
    InvalidRepublicanDay(u8),
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

/// Error type for conversions to the Republican calendar.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// The date precedes 1 Vendémiaire an I (1792-09-22).
    #[error("date is before year one of the republic")]
    BeforeEpoch,

    /// The date is past 9999-12-31.
    #[error("date is after the year 9999")]
    DateTooHigh,

    /// The input string is not a valid `YYYY-MM-DD` date.
    #[error(transparent)]
    InvalidDateFormat(ParseError),

    /// The name resolver has no entry for ordinals the conversion produced.
    #[error(transparent)]
    NameLookup(#[from] LookupError),
}

/// A well-formed date whose year does not fit `Year` is simply too high.
impl From<ParseError> for ConversionError {
    fn from(err: ParseError) -> Self {
        match err {
            ParseError::YearTooLarge(_) => Self::DateTooHigh,
            other => Self::InvalidDateFormat(other),
        }
    }
}

impl ConversionError {
    /// True when the caller supplied a bad date, false for internal failures
    pub const fn is_client_error(&self) -> bool {
        match self {
            Self::BeforeEpoch | Self::DateTooHigh | Self::InvalidDateFormat(_) => true,
            Self::NameLookup(_) => false,
        }
    }

    /// Message safe to show to whoever asked for the conversion.
    ///
    /// Internal failures get a generic message so reference-data details stay private.
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::BeforeEpoch => "date is before the adoption of the republican calendar",
            Self::DateTooHigh => "date must be 9999-12-31 or lower",
            Self::InvalidDateFormat(_) => "date must be in YYYY-MM-DD format",
            Self::NameLookup(_) => {
                "the server encountered a problem and could not process your request"
            },
        }
    }
}

/// Converts a Gregorian date to the Republican calendar.
///
/// # Errors
/// `BeforeEpoch` / `DateTooHigh` for dates outside 1792-09-22..=9999-12-31,
/// `NameLookup` if `names` has no entry for the resulting day.
pub fn to_republican<R>(date: GregorianDate, names: &R) -> Result<RepublicanDate, ConversionError>
where
    R: NameResolver + ?Sized,
{
    let ordinals = decompose(day_delta(date)?);

    let resolved = names
        .lookup(ordinals.day_ord, ordinals.month_ord)
        .inspect_err(|err| log::warn!("name lookup failed for {date}: {err}"))?;

    Ok(RepublicanDate {
        year:       ordinals.year,
        year_roman: year_to_roman(u32::from(ordinals.year.get())),
        month:      resolved.month,
        month_of:   resolved.month_of,
        month_ord:  ordinals.month_ord,
        day:        resolved.day,
        day_ord:    ordinals.day_ord,
        dedication: resolved.dedication,
    })
}

/// Parses a `YYYY-MM-DD` string and converts it.
///
/// # Errors
/// `InvalidDateFormat` for malformed input, otherwise as [`to_republican`].
pub fn convert_str<R>(input: &str, names: &R) -> Result<RepublicanDate, ConversionError>
where
    R: NameResolver + ?Sized,
{
    let date = input.parse::<GregorianDate>()?;
    to_republican(date, names)
}

/// Converts the current UTC date.
///
/// # Errors
/// As [`to_republican`]; a system clock outside the supported range is a `DateTooHigh`
/// or `InvalidDateFormat` error.
pub fn today<R>(names: &R) -> Result<RepublicanDate, ConversionError>
where
    R: NameResolver + ?Sized,
{
    to_republican(GregorianDate::today_utc()?, names)
}

#[cfg(test)]
pub(crate) mod test_utils {
    use crate::{DayDelta, GregorianDate, RepublicanDay, RepublicanMonth};

    pub fn gregorian(year: u16, month: u8, day: u8) -> GregorianDate {
        GregorianDate::new(year, month, day).expect("valid gregorian date in test")
    }

    pub fn delta(count: u32) -> DayDelta {
        DayDelta::new(count).expect("day count within range in test")
    }

    pub fn republican_day(value: u8) -> RepublicanDay {
        RepublicanDay::new(value).expect("valid republican day in test")
    }

    pub fn republican_month(value: u8) -> RepublicanMonth {
        RepublicanMonth::new(value).expect("valid republican month in test")
    }
}
