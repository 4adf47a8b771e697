//! Leap years of the Republic and the split of a day count into year, month and day.

use serde::{Deserialize, Serialize};

use crate::consts::{
    COMPLEMENTARY_DAYS, COMPLEMENTARY_DAYS_LEAP, DAYS_IN_LEAP_YEAR, DAYS_IN_YEAR, DAYS_PER_MONTH,
    LAST_OBSERVED_YEAR, OBSERVED_LEAP_YEARS,
};
use crate::epoch::DayDelta;
use crate::types::{self, RepublicanDay, RepublicanMonth, RepublicanYear};

/// Whether `year` of the Republic has six complementary days.
///
/// Up to year 16 only the observed years 3, 7, 11 and 15 were leap years.
/// Later years were never fixed by law; they follow the Gregorian rule as
/// proposed in Romme's reform.
pub const fn is_leap_year(year: u16) -> bool {
    if year <= LAST_OBSERVED_YEAR {
        let mut i = 0;
        while i < OBSERVED_LEAP_YEARS.len() {
            if OBSERVED_LEAP_YEARS[i] == year {
                return true;
            }
            i += 1;
        }
        return false;
    }
    types::is_leap_year(year)
}

/// Length of `year` in days
pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    }
}

/// Number of complementary days closing `year`
pub const fn complementary_days(year: u16) -> u8 {
    if is_leap_year(year) {
        COMPLEMENTARY_DAYS_LEAP
    } else {
        COMPLEMENTARY_DAYS
    }
}

/// Year, month and day ordinals of a Republican date, without names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ordinals {
    pub year:      RepublicanYear,
    pub month_ord: RepublicanMonth,
    pub day_ord:   RepublicanDay,
}

/// Resolves a day count (1 = 1 Vendémiaire an I) to its year, month and day.
///
/// Walks forward one year at a time until the year containing `day_delta` is
/// found. The count never exceeds `MAX_DAY_DELTA`, so the walk stops by year 8208.
pub fn decompose(day_delta: DayDelta) -> Ordinals {
    let target = day_delta.get();
    let mut year = RepublicanYear::FIRST;
    let mut start: u32 = 1;

    loop {
        let end = start + u32::from(days_in_year(year.get())) - 1;
        if end >= target {
            break;
        }
        year = year.succ();
        start = end + 1;
    }

    let day_in_year = target - start;
    let per_month = u32::from(DAYS_PER_MONTH);
    // day_in_year < 366, so both offsets fit in u8
    let month_offset = u8::try_from(day_in_year / per_month).unwrap_or(u8::MAX);
    let day_offset = u8::try_from(day_in_year % per_month).unwrap_or(u8::MAX);

    let ordinals = Ordinals {
        year,
        month_ord: RepublicanMonth::from_offset(month_offset),
        day_ord: RepublicanDay::from_offset(day_offset),
    };
    log::trace!(
        "day {day_delta} is {}/{}/{}",
        ordinals.day_ord,
        ordinals.month_ord,
        ordinals.year
    );
    ordinals
}
