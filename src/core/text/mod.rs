//! Text analysis and transformation
//!
//! - `analysis`: predicates and statistics over strings and slices
//! - `transform`: functions that rewrite text
//!
//! # Examples
//!
//! ```
//! use quickfns::core::text::{build_acronym, repeat_vowels, Majority, digits_or_letters};
//!
//! assert_eq!(build_acronym("Frequently Asked Questions"), "FAQ");
//! assert_eq!(repeat_vowels("hello world"), "helloo wooorld");
//! assert_eq!(digits_or_letters("abc123"), Majority::Tie);
//! ```

pub mod analysis;
pub mod transform;

pub use analysis::{
    all_unique, digits_or_letters, is_mirror, is_pangram, longest_word, symmetric_difference,
    top_three_words, Majority,
};
pub use transform::{build_acronym, capitalize_sentences, repeat_vowels, reverse_sentence};
