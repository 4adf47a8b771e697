use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::consts::{DATE_SEPARATOR, DAYS_BEFORE_MONTH, FEBRUARY};
use crate::types::{Day, Month, Year, days_in_month, is_leap_year};
use crate::{ParseError, prelude::*};

const SECONDS_PER_DAY: i64 = 86_400;

/// Years `10000..` repeat the leap pattern of their last four digits
const LEAP_PATTERN_PERIOD: u16 = 10_000;

/// A calendar date in the proleptic Gregorian calendar.
///
/// Ordering is chronological: fields compare year, then month, then day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}-{month}-{day}")]
pub struct GregorianDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl GregorianDate {
    /// Creates a date from raw components.
    ///
    /// # Errors
    /// Returns `ParseError` if any component is out of range, including a day
    /// past the end of its month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        Ok(Self {
            year:  Year::new(year)?,
            month: Month::new(month)?,
            day:   Day::new(day, year, month)?,
        })
    }

    /// Creates a date from components that were validated together
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    pub const fn year(&self) -> Year {
        self.year
    }

    pub const fn month(&self) -> Month {
        self.month
    }

    pub const fn day(&self) -> Day {
        self.day
    }

    /// Returns the (year, month, day) components as plain integers
    pub const fn to_tuple(&self) -> (u16, u8, u8) {
        (self.year.get(), self.month.get(), self.day.get())
    }

    /// Ordinal day within the Gregorian year, starting at 1 on January 1st
    pub fn day_of_year(&self) -> u16 {
        let (year, month, day) = self.to_tuple();
        let leap_day = u16::from(month > FEBRUARY && is_leap_year(year));
        DAYS_BEFORE_MONTH[usize::from(month)] + leap_day + u16::from(day)
    }

    /// Signed count of days since 1970-01-01.
    pub fn epoch_days(&self) -> i64 {
        epoch_day_number_for_year(i64::from(self.year.get())) + i64::from(self.day_of_year()) - 1
    }

    /// Inverse of [`GregorianDate::epoch_days`].
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the day falls outside years `1..=65535`.
    pub fn from_epoch_days(days: i64) -> Result<Self, ParseError> {
        // Shift to 0000-03-01 so the leap day closes each 400-year era.
        let z = days + 719_468;
        let era = z.div_euclid(146_097);
        let doe = z - era * 146_097;
        let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
        let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
        let mp = (5 * doy + 2) / 153;
        let day = doy - (153 * mp + 2) / 5 + 1;
        let month = if mp < 10 { mp + 3 } else { mp - 9 };
        let year = yoe + era * 400 + i64::from(month <= i64::from(FEBRUARY));

        let year = u16::try_from(year).map_err(|_| ParseError::InvalidYear(0))?;
        let month = u8::try_from(month).map_err(|_| ParseError::InvalidMonth(0))?;
        let day = u8::try_from(day).map_err(|_| ParseError::InvalidDay { year, month, day: 0 })?;
        Self::new(year, month, day)
    }

    /// The current date in UTC according to the system clock.
    ///
    /// A clock set before 1970 reads as 1970-01-01.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the clock is past year 65535.
    pub fn today_utc() -> Result<Self, ParseError> {
        let seconds = match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX),
            Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
        };
        Self::from_unix_seconds(seconds)
    }

    /// The UTC date at `seconds` since 1970-01-01T00:00:00Z; earlier instants clamp to 1970-01-01.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the instant is past year 65535.
    pub fn from_unix_seconds(seconds: i64) -> Result<Self, ParseError> {
        Self::from_epoch_days(seconds.max(0) / SECONDS_PER_DAY)
    }
}

/// Days from 1970-01-01 to January 1st of `year`.
fn epoch_day_number_for_year(year: i64) -> i64 {
    365 * (year - 1970) + (year - 1969).div_euclid(4) - (year - 1901).div_euclid(100)
        + (year - 1601).div_euclid(400)
}

impl FromStr for GregorianDate {
    type Err = ParseError;

    /// Parses a strict ISO 8601 calendar date, `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} components: {trimmed}",
                parts.len()
            )));
        };

        // years past 9999 are written without padding
        let padded_long_year = year.len() > 4 && year.starts_with('0');
        if year.len() < 4 || padded_long_year || month.len() != 2 || day.len() != 2 {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        }

        let (month, day) = (parse_digits(month)?, parse_digits(day)?);
        match parse_digits::<u16>(year) {
            Ok(year) => Self::new(year, month, day),
            Err(_) if year.bytes().all(|b| b.is_ascii_digit()) => Err(year_too_large(year, month, day)),
            Err(err) => Err(err),
        }
    }
}

/// Checks month and day of a well-formed year beyond `u16` before reporting it.
fn year_too_large(year: &str, month: u8, day: u8) -> ParseError {
    if let Err(err) = Month::new(month) {
        return err;
    }
    // 10_000 is a multiple of the 400-year cycle
    let tail = year.get(year.len() - 4..).and_then(|t| t.parse::<u16>().ok()).unwrap_or(0);
    let leap_proxy = LEAP_PATTERN_PERIOD + tail;
    if day == 0 || day > days_in_month(leap_proxy, month) {
        return ParseError::InvalidDay { month, day, year: u16::MAX };
    }
    ParseError::YearTooLarge(year.to_owned())
}

/// Parses an unsigned decimal component, rejecting signs and whitespace
fn parse_digits<T: FromStr>(s: &str) -> Result<T, ParseError> {
    if !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(s.to_owned()));
    }
    s.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
}

impl Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
