// Vocabulary: a word-frequency profile of some body of text.
//
// Every document, or collection of documents, has a vocabulary that sets it
// apart: a snowboarding site uses different words than a site about brain
// surgery. A running vocabulary per reader (pages visited, posts engaged
// with) can then be compared against new content to estimate how relevant
// that content is to them.
//
// The accumulator only ever grows. `max` and `max_length` are running maxima
// that stay equal to the largest count and the longest word, which is what
// lets `rank` normalize in O(1).

pub mod input;
pub mod rank;
pub mod relevance;
pub mod tokenize;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, VocabularyError};
use crate::output::truncate_chars;

pub use input::Input;
pub use rank::TieBreak;

/// How much of an offending input to keep in error messages.
const PREVIEW_CHARS: usize = 40;

/// A word-frequency profile.
///
/// Keys are lower-cased, non-empty words; counts are strictly positive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<WordCount>", from = "Vec<WordCount>")]
pub struct Vocabulary {
    counts: HashMap<String, u64>,
    /// Largest value in `counts` (0 when empty)
    max: u64,
    /// Length in chars of the longest key (0 when empty)
    max_length: usize,
}

/// One exported `(word, count)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: u64,
}

impl Vocabulary {
    /// Create an empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a vocabulary seeded with the words of `text`.
    pub fn from_text(text: &str) -> Self {
        let mut vocabulary = Self::new();
        vocabulary.add(text);
        vocabulary
    }

    /// Create a vocabulary from `(word, count)` pairs, e.g. a previous
    /// [`export`](Self::export). Words are lower-cased and repeated words
    /// have their counts summed.
    pub fn from_counts<I, W>(counts: I) -> Self
    where
        I: IntoIterator<Item = (W, u64)>,
        W: AsRef<str>,
    {
        let mut vocabulary = Self::new();
        for (word, count) in counts {
            vocabulary.add_word_count(word.as_ref(), count);
        }
        vocabulary
    }

    /// Add words to this vocabulary.
    ///
    /// Text (or the textual form of a scalar) is split into word tokens,
    /// lower-cased and counted. Another vocabulary is merged. Absent or
    /// empty input, and text without a single word character, are no-ops.
    pub fn add<'a>(&mut self, input: impl Into<Input<'a>>) -> &mut Self {
        let input: Input<'a> = input.into();
        match input {
            Input::Absent => {}
            Input::Vocabulary(other) => {
                self.merge_from(other);
            }
            Input::Text(text) => self.add_text(&text),
            Input::Other(text) => self.add_text(&text),
        }
        self
    }

    /// Like [`add`](Self::add), but text that is non-empty yet contains no
    /// word tokens is an error. The vocabulary is left untouched on error.
    pub fn try_add<'a>(&mut self, input: impl Into<Input<'a>>) -> Result<&mut Self> {
        let input: Input<'a> = input.into();
        if let Some(text) = input.as_text() {
            if text.is_empty() {
                return Ok(self);
            }
            let words: Vec<String> = tokenize::lowercase_tokens(text).collect();
            if words.is_empty() {
                return Err(VocabularyError::NoTokens {
                    preview: truncate_chars(text, PREVIEW_CHARS),
                });
            }
            for word in &words {
                self.add_word_count(word, 1);
            }
            debug!(tokens = words.len(), words = self.len(), "Added text to vocabulary");
            return Ok(self);
        }
        Ok(self.add(input))
    }

    fn add_text(&mut self, text: &str) {
        let mut added = 0usize;
        for word in tokenize::lowercase_tokens(text) {
            self.add_word_count(&word, 1);
            added += 1;
        }
        debug!(tokens = added, words = self.len(), "Added text to vocabulary");
    }

    /// Count one occurrence of a word or phrase, without tokenizing it.
    pub fn add_word(&mut self, word: &str) -> &mut Self {
        self.add_word_count(word, 1)
    }

    /// Add `count` occurrences of a word or phrase, without tokenizing it.
    ///
    /// Useful for seeding a word with a high count. A count of 0 counts once.
    pub fn add_word_count(&mut self, word: &str, count: u64) -> &mut Self {
        if word.is_empty() {
            return self;
        }

        let word = word.to_lowercase();
        let length = word.chars().count();
        let total = self.counts.entry(word).or_insert(0);
        *total = total.saturating_add(count.max(1));

        self.max = self.max.max(*total);
        self.max_length = self.max_length.max(length);
        self
    }

    /// Fold every word of `other` into this vocabulary, summing counts.
    /// `other` is not modified.
    pub fn merge_from(&mut self, other: &Vocabulary) -> &mut Self {
        for (word, &count) in &other.counts {
            self.add_word_count(word, count);
        }
        debug!(
            merged = other.len(),
            words = self.len(),
            max = self.max,
            "Merged vocabulary"
        );
        self
    }

    /// How many times `word` (case-insensitive) has been counted.
    pub fn count(&self, word: &str) -> u64 {
        if word.is_empty() {
            return 0;
        }
        self.counts
            .get(word)
            .or_else(|| self.counts.get(&word.to_lowercase()))
            .copied()
            .unwrap_or(0)
    }

    /// Whether `word` (case-insensitive) is in this vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.count(word) > 0
    }

    /// The largest count of any word (0 when empty).
    pub fn max(&self) -> u64 {
        self.max
    }

    /// The length, in chars, of the longest word (0 when empty).
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(word, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, &count)| (word.as_str(), count))
    }

    /// Export the counts, most frequent first (ties by word).
    ///
    /// `max` and `max_length` are derivable from the counts, so this is all
    /// that is needed to rebuild an identical vocabulary via
    /// [`from_counts`](Self::from_counts).
    pub fn export(&self) -> Vec<WordCount> {
        let mut pairs: Vec<WordCount> = self
            .iter()
            .map(|(word, count)| WordCount {
                word: word.to_string(),
                count,
            })
            .collect();
        pairs.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        pairs
    }
}

impl From<&str> for Vocabulary {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<Vec<WordCount>> for Vocabulary {
    fn from(pairs: Vec<WordCount>) -> Self {
        pairs.into_iter().map(|p| (p.word, p.count)).collect()
    }
}

impl From<Vocabulary> for Vec<WordCount> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.export()
    }
}

impl<W: AsRef<str>> Extend<(W, u64)> for Vocabulary {
    fn extend<I: IntoIterator<Item = (W, u64)>>(&mut self, iter: I) {
        for (word, count) in iter {
            self.add_word_count(word.as_ref(), count);
        }
    }
}

impl<W: AsRef<str>> FromIterator<(W, u64)> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = (W, u64)>>(iter: I) -> Self {
        Self::from_counts(iter)
    }
}
