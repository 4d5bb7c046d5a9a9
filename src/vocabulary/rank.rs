// Word ranking within a single vocabulary.
//
// Raw frequency alone over-weights short, common words ("a", "the", "x").
// The rank multiplies normalized frequency by normalized word length:
//
//   rank = (len(word) / max_length) * (count(word) / max)
//
// so a word that is both the longest and the most frequent scores exactly
// 1.0, and every other known word lands in (0, 1). This is a heuristic, not
// a statistical model.

use std::cmp::Ordering;

use super::tokenize;
use super::Vocabulary;

/// How `order` arranges words whose ranks are equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Equal ranks keep the order they had in the input text
    #[default]
    InputOrder,
    /// Equal ranks are ordered alphabetically (case-insensitive)
    Lexical,
}

impl Vocabulary {
    /// The rank of `word` (case-insensitive) in this vocabulary.
    ///
    /// Returns 0.0 for empty words, unknown words, and empty vocabularies.
    pub fn rank(&self, word: &str) -> f64 {
        if word.is_empty() || self.max == 0 || self.max_length == 0 {
            return 0.0;
        }

        self.rank_key(&word.to_lowercase())
    }

    /// Rank of a word that is already lower-case, as every key is.
    pub(crate) fn rank_key(&self, key: &str) -> f64 {
        if self.max == 0 || self.max_length == 0 {
            return 0.0;
        }
        let Some(&count) = self.counts.get(key) else {
            return 0.0;
        };

        // Normalize word length weighting
        let weight = key.chars().count() as f64 / self.max_length as f64;
        weight * (count as f64 / self.max as f64)
    }

    /// Split `text` into words and sort them by descending rank in this
    /// vocabulary. Words keep their original spelling; duplicates are kept.
    ///
    /// Equal ranks (including unknown words at 0.0) keep their input order.
    pub fn order(&self, text: &str) -> Vec<String> {
        self.order_by(text, TieBreak::InputOrder)
    }

    /// Like [`order`](Self::order), with an explicit tie-break policy.
    pub fn order_by(&self, text: &str, tie_break: TieBreak) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        let mut ranked: Vec<(f64, &str)> = tokenize::tokens(text)
            .map(|word| (self.rank(word), word))
            .collect();

        // `sort_by` is stable, so InputOrder needs no secondary key.
        ranked.sort_by(|a, b| {
            let by_rank = b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal);
            match tie_break {
                TieBreak::InputOrder => by_rank,
                TieBreak::Lexical => by_rank
                    .then_with(|| a.1.to_lowercase().cmp(&b.1.to_lowercase()))
                    .then_with(|| a.1.cmp(b.1)),
            }
        });

        ranked.into_iter().map(|(_, word)| word.to_string()).collect()
    }

    /// The `n` highest-ranked words in this vocabulary, with their ranks.
    /// Ties are ordered alphabetically.
    pub fn top(&self, n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .iter()
            .map(|(word, _)| (word.to_string(), self.rank_key(word)))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        ranked.truncate(n);
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pets() -> Vocabulary {
        // It takes 7 small x's to outrank 2 dogs
        Vocabulary::from_text("x dog x cat x fish x dog x elephant x eel x")
    }

    #[test]
    fn test_rank_single_word_is_one() {
        let v = Vocabulary::from_text("dog");
        assert_eq!(v.rank("dog"), 1.0);
        assert_eq!(v.rank("cat"), 0.0);
    }

    #[test]
    fn test_rank_empty_vocabulary() {
        assert_eq!(Vocabulary::new().rank("dog"), 0.0);
        assert_eq!(Vocabulary::from_text("dog").rank(""), 0.0);
    }

    #[test]
    fn test_rank_is_case_insensitive() {
        let v = Vocabulary::from_text("dog cat");
        assert_eq!(v.rank("Dog"), v.rank("dog"));
        assert_eq!(v.rank("DOG"), 1.0);
    }

    #[test]
    fn test_rank_formula() {
        let v = pets();
        // max = 7, max_length = 8
        assert!((v.rank("x") - 1.0 / 8.0).abs() < 1e-12);
        assert!((v.rank("dog") - (3.0 / 8.0) * (2.0 / 7.0)).abs() < 1e-12);
        assert!((v.rank("elephant") - 1.0 / 7.0).abs() < 1e-12);
    }

    #[test]
    fn test_rank_key_matches_rank_for_stored_words() {
        let v = pets();
        for (word, _) in v.iter() {
            assert_eq!(v.rank_key(word), v.rank(word));
        }
        // Keys are lower-case, so an upper-case key is simply unknown
        assert_eq!(v.rank_key("DOG"), 0.0);
        assert_eq!(Vocabulary::new().rank_key("dog"), 0.0);
    }

    #[test]
    fn test_order_empty() {
        assert!(pets().order("").is_empty());
        assert!(pets().order("?!").is_empty());
    }

    #[test]
    fn test_order_by_rank() {
        let v = pets();
        assert_eq!(v.order("cat x dog fish"), vec!["x", "dog", "fish", "cat"]);
        assert_eq!(
            v.order("cat x dog fish elephant"),
            vec!["elephant", "x", "dog", "fish", "cat"]
        );
        assert_eq!(
            v.order("dog fish cat bird"),
            vec!["dog", "fish", "cat", "bird"]
        );
    }

    #[test]
    fn test_order_unknown_ties_keep_input_order() {
        let v = pets();
        assert_eq!(v.order("zebra dog aardvark"), vec!["dog", "zebra", "aardvark"]);
    }

    #[test]
    fn test_order_lexical_ties() {
        let v = pets();
        assert_eq!(
            v.order_by("zebra dog Aardvark", TieBreak::Lexical),
            vec!["dog", "Aardvark", "zebra"]
        );
    }

    #[test]
    fn test_order_does_not_mutate() {
        let v = pets();
        let before = v.clone();
        v.order("zebra dog");
        assert_eq!(v, before);
    }

    #[test]
    fn test_top() {
        let v = pets();
        let top = v.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].0, "elephant");
        assert_eq!(top[1].0, "x");
        assert!(v.top(100).len() == v.len());
    }
}
