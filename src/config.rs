use std::env;

use anyhow::{Context, Result};

use crate::vocabulary::TieBreak;

/// Default number of words shown by `vocabulary profile`.
pub const DEFAULT_TOP_N: usize = 20;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy, so these
/// can live there instead of the shell. Command-line flags override them.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// How `order` breaks rank ties (VOCABULARY_TIE_BREAK = input | lexical)
    pub tie_break: TieBreak,
    /// Reject inputs that contain no words at all (VOCABULARY_STRICT)
    pub strict: bool,
    /// Words shown by `profile` when `--top` is not given (VOCABULARY_TOP_N)
    pub top_n: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::InputOrder,
            strict: false,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Everything has a default. Only a malformed VOCABULARY_TOP_N is an
    /// error; unknown tie-break values fall back to input order.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup. `load` uses the
    /// process environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let tie_break = match lookup("VOCABULARY_TIE_BREAK").as_deref() {
            Some("lexical") => TieBreak::Lexical,
            // "input" or unset both default to input order
            _ => TieBreak::InputOrder,
        };

        let strict = matches!(
            lookup("VOCABULARY_STRICT").as_deref(),
            Some("1") | Some("true") | Some("yes")
        );

        let top_n = match lookup("VOCABULARY_TOP_N") {
            Some(value) => value
                .trim()
                .parse::<usize>()
                .with_context(|| format!("VOCABULARY_TOP_N must be a number, got {value:?}"))?,
            None => DEFAULT_TOP_N,
        };

        Ok(Self {
            tie_break,
            strict,
            top_n,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load_from(&[]).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_all_set() {
        let config = load_from(&[
            ("VOCABULARY_TIE_BREAK", "lexical"),
            ("VOCABULARY_STRICT", "true"),
            ("VOCABULARY_TOP_N", " 5 "),
        ])
        .unwrap();
        assert_eq!(config.tie_break, TieBreak::Lexical);
        assert!(config.strict);
        assert_eq!(config.top_n, 5);
    }

    #[test]
    fn test_unknown_tie_break_falls_back() {
        let config = load_from(&[("VOCABULARY_TIE_BREAK", "random")]).unwrap();
        assert_eq!(config.tie_break, TieBreak::InputOrder);
    }

    #[test]
    fn test_bad_top_n_is_error() {
        let err = load_from(&[("VOCABULARY_TOP_N", "many")]).unwrap_err();
        assert!(err.to_string().contains("VOCABULARY_TOP_N"));
    }
}
