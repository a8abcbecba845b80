//! Model Error Types

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised when constructing domain entities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Validity window ends before it starts
    #[error("Validity window {id} is inverted: valid_from {from} is after valid_to {to}")]
    InvertedWindow {
        id: u64,
        from: NaiveDate,
        to: NaiveDate,
    },

    /// Language code is empty or blank
    #[error("Language code must not be empty")]
    EmptyLangCode,

    /// Stored language code carries surrounding whitespace
    #[error("Language code {0:?} has surrounding whitespace")]
    UntrimmedLangCode(String),
}
