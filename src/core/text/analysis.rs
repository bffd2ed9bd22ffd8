//! Predicates and statistics over text

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

/// Which character class occurs more often in a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Majority {
    Letters,
    Digits,
    Tie,
}

impl Majority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Majority::Letters => "letters",
            Majority::Digits => "digits",
            Majority::Tie => "tie",
        }
    }
}

impl fmt::Display for Majority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure: First longest word of a sentence
///
/// Words are separated by single spaces and periods are not counted.
/// Ties go to the earliest word.
pub fn longest_word(sentence: &str) -> String {
    let mut longest = String::new();
    let mut longest_len = 0;

    for token in sentence.split(' ') {
        let word: String = token.chars().filter(|&c| c != '.').collect();
        let len = word.chars().count();
        if len > longest_len {
            longest_len = len;
            longest = word;
        }
    }

    longest
}

/// Pure: Whether the letters used in `sentence` are exactly the characters of `letters`
///
/// `sentence` is lowercased and reduced to `a-z`; `letters` is compared as-is.
/// Using extra letters makes the result false just like missing one does.
pub fn is_pangram(sentence: &str, letters: &str) -> bool {
    let used: HashSet<char> = sentence
        .chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(char::is_ascii_lowercase)
        .collect();
    let required: HashSet<char> = letters.chars().collect();

    used == required
}

/// Pure: Compare the number of ASCII letters with the number of ASCII digits
pub fn digits_or_letters(s: &str) -> Majority {
    let letters = s.chars().filter(char::is_ascii_alphabetic).count();
    let digits = s.chars().filter(char::is_ascii_digit).count();

    match letters.cmp(&digits) {
        std::cmp::Ordering::Greater => Majority::Letters,
        std::cmp::Ordering::Less => Majority::Digits,
        std::cmp::Ordering::Equal => Majority::Tie,
    }
}

/// Pure: Whether the letters of `second`, reversed, spell the letters of `first`
///
/// Only ASCII letters take part and case matters.
pub fn is_mirror(first: &str, second: &str) -> bool {
    let forward = first.chars().filter(char::is_ascii_alphabetic);
    let backward = second.chars().rev().filter(char::is_ascii_alphabetic);

    forward.eq(backward)
}

/// Pure: The three most frequent words, most frequent first
///
/// Text is ASCII-lowercased and stripped of ASCII punctuation before splitting on
/// whitespace. Words with equal counts keep the order they first appeared in.
pub fn top_three_words(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_ascii_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for word in cleaned.split_whitespace() {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // sort_by is stable, first-seen order survives among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(3)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Pure: Whether no character occurs twice (case-sensitive)
pub fn all_unique(s: &str) -> bool {
    let mut seen = HashSet::new();
    s.chars().all(|c| seen.insert(c))
}

/// Pure: Values present in exactly one of the two slices
///
/// The result is deduplicated and ordered by each value's `Display` string,
/// so `10` sorts before `9`.
pub fn symmetric_difference<T>(first: &[T], second: &[T]) -> Vec<T>
where
    T: Clone + Eq + Hash + fmt::Display,
{
    let in_first: HashSet<&T> = first.iter().collect();
    let in_second: HashSet<&T> = second.iter().collect();

    let mut seen = HashSet::new();
    let mut result: Vec<T> = first
        .iter()
        .filter(|v| !in_second.contains(v))
        .chain(second.iter().filter(|v| !in_first.contains(v)))
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect();

    result.sort_by_cached_key(|v| v.to_string());
    result
}
