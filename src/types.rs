use crate::consts::{
    CENTURY_CYCLE, COMPLEMENTARY_MONTH, DAYS_IN_MONTH, DAYS_PER_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH,
};
use crate::ParseError;
use crate::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A proleptic Gregorian year, guaranteed non-zero.
/// Years past the convertible range are still representable so they can be
/// rejected by the boundary check rather than by parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    /// Builds a year from a compile-time constant; 0 fails const evaluation
    pub(crate) const fn from_const(value: u16) -> Self {
        Self(NonZeroU16::MIN.saturating_add(value - 1))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

/// A Gregorian month guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        debug_assert!(value <= MAX_MONTH);
        Self(NonZeroU8::MIN.saturating_add(value - 1))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A Gregorian day of month, validated against its year and month on construction.
///
/// There is no context-free conversion from `u8`: a day only exists as part of
/// a [`GregorianDate`](crate::GregorianDate) or through [`Day::new`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating that it's non-zero and valid for the given year and month
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDay` if the value is 0 or invalid for the given year and month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, ParseError> {
        let invalid = ParseError::InvalidDay {
            month,
            day: value,
            year,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if month == 0 || month > MAX_MONTH || value > days_in_month(year, month) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        Self(NonZeroU8::MIN.saturating_add(value - 1))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// A year of the Republic, counted from 1 at the epoch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct RepublicanYear(NonZeroU16);

impl RepublicanYear {
    /// Year I of the Republic
    pub const FIRST: Self = Self(NonZeroU16::MIN);

    /// # Errors
    /// Returns `ParseError::InvalidYear` if the value is 0.
    pub fn new(value: u16) -> Result<Self, ParseError> {
        NonZeroU16::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidYear(value))
    }

    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// The following year, saturating at `u16::MAX`
    #[inline]
    pub(crate) const fn succ(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl TryFrom<u16> for RepublicanYear {
    type Error = ParseError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepublicanYear> for u16 {
    fn from(year: RepublicanYear) -> Self {
        year.0.get()
    }
}

/// A Republican month ordinal in `1..=13`, where 13 holds the complementary days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RepublicanMonth(NonZeroU8);

impl RepublicanMonth {
    /// The Sansculottides
    pub const COMPLEMENTARY: Self = Self(NonZeroU8::MIN.saturating_add(COMPLEMENTARY_MONTH - 1));

    /// # Errors
    /// Returns `ParseError::InvalidRepublicanMonth` if the value is 0 or > 13.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidRepublicanMonth(value))?;
        if value > COMPLEMENTARY_MONTH {
            return Err(ParseError::InvalidRepublicanMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Builds the ordinal following `offset` whole months, i.e. `offset + 1`.
    /// Callers keep `offset` below 13.
    #[inline]
    pub(crate) const fn from_offset(offset: u8) -> Self {
        debug_assert!(offset < COMPLEMENTARY_MONTH);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// True for the complementary days at the end of the year
    #[inline]
    pub const fn is_complementary(self) -> bool {
        self.0.get() == COMPLEMENTARY_MONTH
    }
}

impl TryFrom<u8> for RepublicanMonth {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepublicanMonth> for u8 {
    fn from(month: RepublicanMonth) -> Self {
        month.0.get()
    }
}

/// A Republican day ordinal in `1..=30`.
/// Only 1..=6 occur in the complementary month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct RepublicanDay(NonZeroU8);

impl RepublicanDay {
    /// # Errors
    /// Returns `ParseError::InvalidRepublicanDay` if the value is 0 or > 30.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidRepublicanDay(value))?;
        if u16::from(value) > DAYS_PER_MONTH {
            return Err(ParseError::InvalidRepublicanDay(value));
        }
        Ok(Self(non_zero))
    }

    #[inline]
    pub(crate) const fn from_offset(offset: u8) -> Self {
        debug_assert!((offset as u16) < DAYS_PER_MONTH);
        Self(NonZeroU8::MIN.saturating_add(offset))
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for RepublicanDay {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RepublicanDay> for u8 {
    fn from(day: RepublicanDay) -> Self {
        day.0.get()
    }
}

// Helper functions

/// Gregorian leap rule, applied proleptically
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_new_valid() {
        assert!(Year::new(1).is_ok());
        assert!(Year::new(1792).is_ok());
        assert!(Year::new(9999).is_ok());
        assert!(Year::new(10000).is_ok(), "out-of-range years are rejected at conversion");
    }

    #[test]
    fn test_year_new_invalid_zero() {
        let result = Year::new(0);
        assert!(matches!(result, Err(ParseError::InvalidYear(0))));
    }

    #[test]
    fn test_year_display_is_padded() {
        assert_eq!(Year::new(2024).unwrap().to_string(), "2024");
        assert_eq!(Year::new(476).unwrap().to_string(), "0476");
    }

    #[test]
    fn test_year_serde() {
        let year = Year::new(1792).unwrap();
        let json = serde_json::to_string(&year).unwrap();
        assert_eq!(json, "1792");

        let parsed: Year = serde_json::from_str(&json).unwrap();
        assert_eq!(year, parsed);

        assert!(serde_json::from_str::<Year>("0").is_err());
    }

    #[test]
    fn test_month_new_valid() {
        for m in 1..=12 {
            assert!(Month::new(m).is_ok(), "Month {m} should be valid");
        }
    }

    #[test]
    fn test_month_new_invalid() {
        assert!(matches!(Month::new(0), Err(ParseError::InvalidMonth(0))));
        assert!(matches!(Month::new(13), Err(ParseError::InvalidMonth(13))));
    }

    #[test]
    fn test_month_display_is_padded() {
        assert_eq!(Month::new(9).unwrap().to_string(), "09");
        assert_eq!(Month::new(12).unwrap().to_string(), "12");
    }

    #[test]
    fn test_day_new_valid() {
        // February non-leap - 28 days
        assert!(Day::new(28, 2023, 2).is_ok());
        assert!(Day::new(29, 2023, 2).is_err());

        // February leap year - 29 days
        assert!(Day::new(29, 2024, 2).is_ok());
        assert!(Day::new(30, 2024, 2).is_err());

        // September - 30 days
        assert!(Day::new(30, 1792, 9).is_ok());
        assert!(Day::new(31, 1792, 9).is_err());
    }

    #[test]
    fn test_day_new_invalid() {
        assert!(matches!(Day::new(0, 2024, 1), Err(ParseError::InvalidDay { .. })));
        assert!(matches!(
            Day::new(32, 2024, 1),
            Err(ParseError::InvalidDay {
                month: 1,
                day: 32,
                year: 2024
            })
        ));
        assert!(matches!(Day::new(1, 2024, 13), Err(ParseError::InvalidDay { .. })));
    }

    #[test]
    fn test_republican_month_bounds() {
        assert!(RepublicanMonth::new(1).is_ok());
        assert!(RepublicanMonth::new(13).is_ok());
        assert!(matches!(
            RepublicanMonth::new(0),
            Err(ParseError::InvalidRepublicanMonth(0))
        ));
        assert!(matches!(
            RepublicanMonth::new(14),
            Err(ParseError::InvalidRepublicanMonth(14))
        ));
        assert_eq!(RepublicanMonth::COMPLEMENTARY.get(), 13);
        assert!(RepublicanMonth::COMPLEMENTARY.is_complementary());
        assert!(!RepublicanMonth::from_offset(11).is_complementary());
    }

    #[test]
    fn test_republican_day_bounds() {
        assert!(RepublicanDay::new(1).is_ok());
        assert!(RepublicanDay::new(30).is_ok());
        assert!(matches!(
            RepublicanDay::new(31),
            Err(ParseError::InvalidRepublicanDay(31))
        ));
        assert_eq!(RepublicanDay::from_offset(0).get(), 1);
        assert_eq!(RepublicanDay::from_offset(29).get(), 30);
    }

    #[test]
    fn test_republican_year_succ() {
        assert_eq!(RepublicanYear::FIRST.get(), 1);
        assert_eq!(RepublicanYear::FIRST.succ().get(), 2);
        assert!(RepublicanYear::new(0).is_err());
    }

    #[test]
    fn test_republican_ordinals_serialize_as_integers() {
        let json = serde_json::to_string(&RepublicanMonth::COMPLEMENTARY).unwrap();
        assert_eq!(json, "13");
        assert!(serde_json::from_str::<RepublicanMonth>("14").is_err());
        assert_eq!(RepublicanDay::new(7).unwrap().to_string(), "7");
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1800,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }
}
