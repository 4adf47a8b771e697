use crate::consts::{ROMAN_LIMIT, ROMAN_NUMERALS, ROMAN_SENTINEL};

/// Renders `year` in subtractive Roman notation.
///
/// Years of `ROMAN_LIMIT` (4000) and above have no standard rendering and come
/// back as `ROMAN_SENTINEL`. Zero renders as the empty string.
pub fn year_to_roman(year: u32) -> String {
    if year >= ROMAN_LIMIT {
        return ROMAN_SENTINEL.to_owned();
    }

    let mut remaining = year;
    let mut result = String::new();
    for &(value, symbol) in &ROMAN_NUMERALS {
        while remaining >= value {
            result.push_str(symbol);
            remaining -= value;
        }
    }
    result
}
