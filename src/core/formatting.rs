//! Formatting and parsing helpers
//!
//! # Examples
//!
//! ```
//! use quickfns::core::formatting::{format_phone_number, generate_slug, rgb_to_hex};
//!
//! assert_eq!(format_phone_number("15554454545"), "+1 (555) 445-4545");
//! assert_eq!(rgb_to_hex("rgb(255, 99, 71)"), "#ff6347");
//! assert_eq!(generate_slug("Hello World!"), "hello%20world");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Runs of decimal digits
static DIGIT_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+").expect("Valid regex pattern"));

/// Anything that is neither an ASCII letter, an ASCII digit nor whitespace
static NON_SLUG_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9\s]").expect("Valid regex pattern"));

static WHITESPACE_RUN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("Valid regex pattern"));

/// Char-indexed slice that clamps both ends to the string length
fn char_slice(s: &str, start: usize, end: usize) -> String {
    s.chars()
        .skip(start)
        .take(end.saturating_sub(start))
        .collect()
}

/// Pure: Format an 11-digit string as `+C (AAA) EEE-SSSS`
///
/// The digit count is not checked. Short input produces short groups rather
/// than a panic.
pub fn format_phone_number(digits: &str) -> String {
    format!(
        "+{} ({}) {}-{}",
        char_slice(digits, 0, 1),
        char_slice(digits, 1, 4),
        char_slice(digits, 4, 7),
        char_slice(digits, 7, 11)
    )
}

fn roman_value(symbol: char) -> Option<u32> {
    match symbol {
        'I' => Some(1),
        'V' => Some(5),
        'X' => Some(10),
        'L' => Some(50),
        'C' => Some(100),
        'D' => Some(500),
        'M' => Some(1000),
        _ => None,
    }
}

/// Pure: Parse a Roman numeral
///
/// A symbol immediately followed by a larger one is subtracted, every other
/// symbol is added. Returns `None` if any character is not one of `IVXLCDM`.
///
/// # Examples
///
/// ```
/// use quickfns::core::formatting::roman_to_int;
///
/// assert_eq!(roman_to_int("MCMXCIV"), Some(1994));
/// assert_eq!(roman_to_int("XIZ"), None);
/// ```
pub fn roman_to_int(numeral: &str) -> Option<u32> {
    let values = numeral
        .chars()
        .map(roman_value)
        .collect::<Option<Vec<u32>>>()?;

    let total = values
        .iter()
        .enumerate()
        .fold(0i64, |acc, (i, &value)| match values.get(i + 1) {
            Some(&next) if value < next => acc - i64::from(value),
            _ => acc + i64::from(value),
        });

    u32::try_from(total).ok()
}

/// Pure: Convert an `rgb(r, g, b)` string to `#rrggbb`
///
/// Every run of digits is converted in order, so whitespace and punctuation
/// are irrelevant. Components are not clamped: 300 becomes `12c`. A run too
/// large for `u64` saturates to `u64::MAX` so it still occupies its position.
pub fn rgb_to_hex(rgb: &str) -> String {
    let hex: String = DIGIT_RUN_REGEX
        .find_iter(rgb)
        // a digit-only run can only fail to parse by overflowing
        .map(|m| m.as_str().parse::<u64>().unwrap_or(u64::MAX))
        .map(|component| format!("{:02x}", component))
        .collect();

    format!("#{}", hex)
}

/// Pure: Build a URL slug
///
/// Strips everything except ASCII letters, digits and whitespace, collapses
/// whitespace runs, trims, lowercases and encodes the remaining spaces as `%20`.
pub fn generate_slug(input: &str) -> String {
    let cleaned = NON_SLUG_REGEX.replace_all(input, "");
    let collapsed = WHITESPACE_RUN_REGEX.replace_all(&cleaned, " ");

    collapsed.trim().to_lowercase().replace(' ', "%20")
}

/// Pure: Split a CSV header line into trimmed, non-empty field names
pub fn csv_header_fields(header: &str) -> Vec<String> {
    header
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(str::to_string)
        .collect()
}
