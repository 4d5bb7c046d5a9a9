// Word-boundary tokenization.
//
// A token is a maximal run of ASCII word characters (`[0-9A-Za-z_]`). There
// is no stemming and no stop-word list: "the" counts like any other word.

use std::sync::OnceLock;

use regex_lite::Regex;

fn word_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w+").expect("valid word pattern"))
}

/// Iterate over the word tokens of `text`, in their original spelling.
pub fn tokens(text: &str) -> impl Iterator<Item = &str> {
    word_pattern().find_iter(text).map(|m| m.as_str())
}

/// Iterate over the lower-cased word tokens of `text`.
pub fn lowercase_tokens(text: &str) -> impl Iterator<Item = String> + '_ {
    tokens(text).map(str::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_non_word_characters() {
        let found: Vec<&str> = tokens("hawk, eagle; owl & F15!").collect();
        assert_eq!(found, vec!["hawk", "eagle", "owl", "F15"]);
    }

    #[test]
    fn test_apostrophes_split_words() {
        let found: Vec<&str> = tokens("the industry's standard").collect();
        assert_eq!(found, vec!["the", "industry", "s", "standard"]);
    }

    #[test]
    fn test_underscore_and_digits_are_word_characters() {
        let found: Vec<&str> = tokens("snake_case 1500s").collect();
        assert_eq!(found, vec!["snake_case", "1500s"]);
    }

    #[test]
    fn test_punctuation_only_has_no_tokens() {
        assert_eq!(tokens("!!! ... ---").count(), 0);
        assert_eq!(tokens("   ").count(), 0);
    }

    #[test]
    fn test_lowercase_tokens() {
        let found: Vec<String> = lowercase_tokens("Lorem IPSUM").collect();
        assert_eq!(found, vec!["lorem", "ipsum"]);
    }
}
