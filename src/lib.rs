//! # quickfns
//!
//! Small, independent, pure utility functions with table-driven tests.
//!
//! ## Usage
//!
//! ```
//! use quickfns::{generate_slug, is_spam, too_much_screen_time};
//!
//! assert_eq!(generate_slug("  ?H^3-1*1]0! W[0%R#1]D  "), "h3110%20w0r1d");
//! assert!(is_spam("+1 (555) 435-4792"));
//! assert!(too_much_screen_time(&[1.0, 2.0, 3.0, 11.0, 1.0, 3.0, 4.0]));
//! ```
//!
//! ## Modules
//!
//! - `core` - The pure functions, grouped by what they compute
//! - `config` - Tunable thresholds for the spam and screen-time classifiers
//! - `error` - Typed errors for the few operations that can fail
//! - `logging` - Opt-in tracing subscriber setup
pub mod config;
pub mod core;
pub mod error;
pub mod logging;


pub use crate::config::{ScreenTimeLimits, SpamRules, UtilConfig};
pub use crate::core::formatting::{
    csv_header_fields, format_phone_number, generate_slug, rgb_to_hex, roman_to_int,
};
pub use crate::core::matrix::{rotate_clockwise, rotate_counter_clockwise, rotate_half_turn};
pub use crate::core::sequences::{is_perfect_square, missing_numbers, second_largest, tribonacci};
pub use crate::core::text::{
    all_unique, build_acronym, capitalize_sentences, digits_or_letters, is_mirror, is_pangram,
    longest_word, repeat_vowels, reverse_sentence, symmetric_difference, top_three_words,
    Majority,
};
pub use crate::core::units::{
    fuel_cost, items_that_fit, number_of_files, number_of_photos, number_of_videos, ByteUnit,
};
pub use crate::core::validation::{
    is_spam, is_spam_with, is_valid_ipv4, speeding, thermostat_action, too_much_screen_time,
    too_much_screen_time_with, SpeedingSummary, ThermostatAction,
};
pub use crate::error::{ErrorCode, UnitRole, UtilError};
