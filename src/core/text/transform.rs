//! Text rewriting functions

/// Connector words left out of acronyms unless they lead the phrase
const ACRONYM_STOP_WORDS: [&str; 7] = ["a", "an", "and", "the", "of", "for", "by"];

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_vowel(c: char) -> bool {
    matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u')
}

/// Pure: Uppercase the first letter of every sentence
///
/// A sentence starts at the beginning of the text and after each `.`, `!` or
/// `?`. Runs of terminators such as `...` or `?!` start a single sentence.
/// Nothing besides that first letter is changed.
pub fn capitalize_sentences(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut at_sentence_start = true;

    for c in text.chars() {
        if is_sentence_end(c) {
            at_sentence_start = true;
            result.push(c);
        } else if at_sentence_start && c.is_alphabetic() {
            at_sentence_start = false;
            result.extend(c.to_uppercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Pure: Acronym from the first letter of each word
///
/// `a`, `an`, `and`, `the`, `of`, `for` and `by` are skipped (in any case)
/// except as the first word.
///
/// # Examples
///
/// ```
/// use quickfns::core::text::build_acronym;
///
/// assert_eq!(build_acronym("For your information"), "FYI");
/// assert_eq!(build_acronym("The Lord of the Rings"), "TLR");
/// ```
pub fn build_acronym(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .enumerate()
        .filter(|(i, word)| {
            *i == 0 || !ACRONYM_STOP_WORDS.contains(&word.to_lowercase().as_str())
        })
        .filter_map(|(_, word)| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Pure: Reverse word order, normalising whitespace to single spaces
pub fn reverse_sentence(sentence: &str) -> String {
    sentence
        .split_whitespace()
        .rev()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pure: Follow the Nth vowel with N-1 extra lowercase copies of it
///
/// The count runs across the whole string. The original vowel keeps its case.
pub fn repeat_vowels(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 2);
    let mut vowels_seen = 0;

    for c in s.chars() {
        result.push(c);
        if is_vowel(c) {
            let lower = c.to_ascii_lowercase();
            result.extend(std::iter::repeat(lower).take(vowels_seen));
            vowels_seen += 1;
        }
    }

    result
}
