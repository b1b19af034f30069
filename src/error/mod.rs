//! Error module for the trie recommender.
//!
//! Every fallible operation in the crate returns [`TrieResult`]. Lookups never
//! fail: a word that is not stored is a [`NotFound`](crate::trie::SearchOutcome)
//! outcome, not an error. Errors are reserved for input the trie refuses to
//! store and for configuration or logging setup problems.

use thiserror::Error;

pub mod config;

pub use self::config::ConfigError;

/// Result type alias used throughout the trie recommender.
pub type TrieResult<T> = Result<T, TrieError>;

/// Core error enum for the trie recommender.
#[derive(Error, Debug)]
pub enum TrieError {
    /// An empty word was given to `insert` or `build`.
    #[error("Empty word not allowed")]
    EmptyWord,

    /// A word is longer than the configured maximum.
    #[error("Word '{word}' exceeds maximum word length of {max_length}")]
    WordTooLong {
        /// The normalized word that was rejected.
        word: String,
        /// The configured maximum length, in characters.
        max_length: usize,
    },

    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}
