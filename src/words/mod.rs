//! Word frequency counting

use crate::input::Rejection;
use std::collections::HashMap;
use std::fmt;

/// Characters stripped from both ends of every token
pub const PUNCTUATION: &str = ".,;:!?\"'()[]{}<>";

/// Lowercase a token and strip surrounding whitespace and punctuation
///
/// May return an empty string when the token was punctuation only.
pub fn normalize_word(token: &str) -> String {
    token
        .trim()
        .to_lowercase()
        .trim_matches(|c: char| PUNCTUATION.contains(c))
        .to_string()
}

/// Split a line on whitespace into normalized, non-empty words
///
/// Never rejects; the signature matches the reader's parse callbacks.
pub fn tokenize_line(line: &str) -> Result<Vec<String>, Rejection> {
    Ok(line
        .split_whitespace()
        .map(normalize_word)
        .filter(|word| !word.is_empty())
        .collect())
}

/// A distinct word, how often it occurs, and where it first appeared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
    /// 0-based index of the first occurrence in the word stream
    pub first_seen: usize,
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.word, self.count)
    }
}

/// Count each distinct word
///
/// Ordered by count, highest first; equal counts keep the order in which
/// the words first appeared.
pub fn count_frequencies<I, S>(words: I) -> Vec<WordCount>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<WordCount> = Vec::new();

    for (index, word) in words.into_iter().enumerate() {
        let word = word.as_ref();
        match slots.get(word) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(word.to_string(), counts.len());
                counts.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                    first_seen: index,
                });
            }
        }
    }

    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.first_seen.cmp(&b.first_seen))
    });
    counts
}
