// Vocabulary: word-frequency profiles with rank and relevance scoring.
//
// This is the library root. The scoring engine lives in `vocabulary`; the
// remaining modules support the command-line front end.

pub mod config;
pub mod corpus;
pub mod error;
pub mod output;
pub mod vocabulary;

pub use error::VocabularyError;
pub use vocabulary::{Input, TieBreak, Vocabulary, WordCount};
