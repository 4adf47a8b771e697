/// Gregorian year of the first day of the Republican calendar
pub const EPOCH_YEAR: u16 = 1792;
/// Gregorian month of the first day of the Republican calendar (September)
pub const EPOCH_MONTH: u8 = 9;
/// Gregorian day of the first day of the Republican calendar
pub const EPOCH_DAY: u8 = 22;

/// Latest convertible Gregorian year (inclusive)
pub const MAX_YEAR: u16 = 9999;
/// Latest convertible Gregorian month in `MAX_YEAR`
pub const MAX_YEAR_MONTH: u8 = 12;
/// Latest convertible Gregorian day in `MAX_YEAR_MONTH`
pub const MAX_YEAR_DAY: u8 = 31;

/// Day count of 9999-12-31, with 1792-09-22 as day 1
pub const MAX_DAY_DELTA: u32 = 2_997_645;

/// Maximum valid Gregorian month (December)
pub const MAX_MONTH: u8 = 12;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Days elapsed before the first of each month in a common year
pub(crate) const DAYS_BEFORE_MONTH: [u16; 13] = [0, 0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';

/// Every Republican month 1-12 has exactly this many days
pub const DAYS_PER_MONTH: u16 = 30;
/// Ordinal of the complementary days (Sansculottides)
pub const COMPLEMENTARY_MONTH: u8 = 13;
/// Complementary days in a common year
pub const COMPLEMENTARY_DAYS: u8 = 5;
/// Complementary days in a leap year
pub const COMPLEMENTARY_DAYS_LEAP: u8 = 6;

/// Days in a common Republican year
pub const DAYS_IN_YEAR: u16 = 365;
/// Days in a leap Republican year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Last year whose leap status was fixed by the calendar's own authorities
pub const LAST_OBSERVED_YEAR: u16 = 16;
/// Leap years actually observed before the calendar was abolished
pub const OBSERVED_LEAP_YEARS: [u16; 4] = [3, 7, 11, 15];

/// Roman numeral symbols, largest first, including the subtractive pairs
pub const ROMAN_NUMERALS: [(u32, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// First year with no Roman rendering
pub const ROMAN_LIMIT: u32 = 4000;
/// Rendering used for years at or above `ROMAN_LIMIT`
pub const ROMAN_SENTINEL: &str = "-";
