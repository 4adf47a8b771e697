//! Range checks and day counting relative to 1 Vendémiaire an I.

use std::num::NonZeroU32;

use crate::consts::{
    EPOCH_DAY, EPOCH_MONTH, EPOCH_YEAR, MAX_DAY_DELTA, MAX_YEAR, MAX_YEAR_DAY, MAX_YEAR_MONTH,
};
use crate::prelude::*;
use crate::types::{Day, Month, Year};
use crate::{ConversionError, GregorianDate};

/// 1792-09-22, year 1 day 1 of the Republican calendar
pub const CALENDAR_EPOCH: GregorianDate = GregorianDate::from_parts(
    Year::from_const(EPOCH_YEAR),
    Month::from_const(EPOCH_MONTH),
    Day::from_const(EPOCH_DAY),
);

/// 9999-12-31, the last convertible date
pub const UPPER_BOUND: GregorianDate = GregorianDate::from_parts(
    Year::from_const(MAX_YEAR),
    Month::from_const(MAX_YEAR_MONTH),
    Day::from_const(MAX_YEAR_DAY),
);

/// Passes `date` through if it lies within `CALENDAR_EPOCH..=UPPER_BOUND`.
///
/// # Errors
/// `ConversionError::BeforeEpoch` or `ConversionError::DateTooHigh` when out of range.
pub fn validate(date: GregorianDate) -> Result<GregorianDate, ConversionError> {
    if date < CALENDAR_EPOCH {
        log::debug!("rejecting {date}: before the republican epoch");
        return Err(ConversionError::BeforeEpoch);
    }
    if date > UPPER_BOUND {
        log::debug!("rejecting {date}: after {UPPER_BOUND}");
        return Err(ConversionError::DateTooHigh);
    }
    Ok(date)
}

/// Days from the epoch to a convertible date, counting the epoch itself as day 1.
///
/// Always within `1..=MAX_DAY_DELTA`; outside the crate only [`day_delta`]
/// creates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub struct DayDelta(NonZeroU32);

impl DayDelta {
    pub(crate) fn new(count: u32) -> Option<Self> {
        if count > MAX_DAY_DELTA {
            return None;
        }
        NonZeroU32::new(count).map(Self)
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl From<DayDelta> for u32 {
    fn from(delta: DayDelta) -> Self {
        delta.0.get()
    }
}

/// Counts the days from the epoch to `date`, the epoch itself being day 1.
///
/// # Errors
/// As [`validate`]: `BeforeEpoch` or `DateTooHigh` when `date` is out of range.
pub fn day_delta(date: GregorianDate) -> Result<DayDelta, ConversionError> {
    let date = validate(date)?;
    let elapsed = date.epoch_days() - CALENDAR_EPOCH.epoch_days();
    u32::try_from(elapsed + 1)
        .ok()
        .and_then(DayDelta::new)
        .ok_or(ConversionError::DateTooHigh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gregorian;

    #[test]
    fn test_bounds() {
        assert_eq!(CALENDAR_EPOCH.to_tuple(), (1792, 9, 22));
        assert_eq!(UPPER_BOUND.to_tuple(), (9999, 12, 31));
    }

    #[test]
    fn test_validate_accepts_inclusive_range() {
        for date in [CALENDAR_EPOCH, gregorian(2000, 1, 1), UPPER_BOUND] {
            assert_eq!(validate(date), Ok(date));
        }
    }

    #[test]
    fn test_validate_before_epoch() {
        assert_eq!(
            validate(gregorian(1792, 9, 21)),
            Err(ConversionError::BeforeEpoch)
        );
        assert_eq!(validate(gregorian(1, 1, 1)), Err(ConversionError::BeforeEpoch));
    }

    #[test]
    fn test_validate_too_high() {
        assert_eq!(
            validate(gregorian(10000, 1, 1)),
            Err(ConversionError::DateTooHigh)
        );
    }

    #[test]
    fn test_day_delta() {
        struct TestCase {
            date:     GregorianDate,
            expected: u32,
        }

        let cases = [
            TestCase {
                date:     gregorian(1792, 9, 22),
                expected: 1,
            },
            TestCase {
                date:     gregorian(1792, 9, 23),
                expected: 2,
            },
            // crosses 1793-02 (common) and into 1796-02-29 (leap)
            TestCase {
                date:     gregorian(1796, 3, 1),
                expected: 1257,
            },
            TestCase {
                date:     gregorian(2024, 9, 18),
                expected: 84_733,
            },
            TestCase {
                date:     gregorian(2025, 1, 1),
                expected: 84_838,
            },
            TestCase {
                date:     gregorian(9999, 12, 31),
                expected: 2_997_645,
            },
        ];

        for case in &cases {
            assert_eq!(
                day_delta(case.date).map(DayDelta::get),
                Ok(case.expected),
                "wrong day count for {}",
                case.date
            );
        }
    }

    #[test]
    fn test_day_delta_rejects_out_of_range_dates() {
        assert_eq!(
            day_delta(gregorian(1792, 9, 21)),
            Err(ConversionError::BeforeEpoch)
        );
        assert_eq!(day_delta(gregorian(1700, 1, 1)), Err(ConversionError::BeforeEpoch));
        assert_eq!(
            day_delta(gregorian(10000, 1, 1)),
            Err(ConversionError::DateTooHigh)
        );
        assert_eq!(
            day_delta(gregorian(65535, 12, 31)),
            Err(ConversionError::DateTooHigh)
        );
    }

    #[test]
    fn test_day_delta_upper_bound_is_max() {
        let last = day_delta(UPPER_BOUND).unwrap();
        assert_eq!(last.get(), MAX_DAY_DELTA);
        assert_eq!(u32::from(last), MAX_DAY_DELTA);
        assert_eq!(last.to_string(), "2997645");
    }

    #[test]
    fn test_day_delta_new_bounds() {
        assert_eq!(DayDelta::new(0), None);
        assert_eq!(DayDelta::new(1).map(DayDelta::get), Some(1));
        assert_eq!(DayDelta::new(MAX_DAY_DELTA).map(DayDelta::get), Some(MAX_DAY_DELTA));
        assert_eq!(DayDelta::new(MAX_DAY_DELTA + 1), None);
        assert_eq!(DayDelta::new(30_000_000), None);
        assert_eq!(DayDelta::new(u32::MAX), None);
    }
}
