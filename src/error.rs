// Library error type.
//
// The lenient API (`add`, `rank`, `order`, ...) never fails. Only the strict
// ingestion path reports anything, so there is one variant for now.

use thiserror::Error;

/// Errors surfaced by the strict vocabulary operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VocabularyError {
    /// The input had text, but not a single word character in it.
    #[error("no word tokens found in input: {preview:?}")]
    NoTokens {
        /// The start of the offending text, truncated for display
        preview: String,
    },
}

pub type Result<T> = std::result::Result<T, VocabularyError>;
