//! Trie configuration module.
//!
//! This module defines how words are normalized before they reach the trie
//! and the limits applied to inserted words.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Case normalization applied to every inserted word and every query.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseNormalization {
    /// Lowercase ASCII letters only; other characters pass through unchanged.
    #[default]
    Ascii,
    /// Per-character Unicode lowercasing (`str::to_lowercase`), no locale rules.
    Simple,
    /// Keep words exactly as given (case-sensitive trie).
    Preserve,
}

impl CaseNormalization {
    /// Normalizes `word`, borrowing it when nothing has to change.
    pub fn apply<'a>(&self, word: &'a str) -> Cow<'a, str> {
        match self {
            Self::Ascii if word.bytes().any(|b| b.is_ascii_uppercase()) => {
                Cow::Owned(word.to_ascii_lowercase())
            }
            Self::Simple if word.chars().any(char::is_uppercase) => {
                Cow::Owned(word.to_lowercase())
            }
            _ => Cow::Borrowed(word),
        }
    }
}

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct TrieConfig {
    /// Case normalization for inserts and queries
    pub case_normalization: CaseNormalization,

    /// Maximum number of characters in a stored word; `None` means no limit
    pub max_word_length: Option<usize>,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            case_normalization: CaseNormalization::default(),
            max_word_length: None,
        }
    }
}

impl TrieConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the case normalization.
    pub fn with_case_normalization(mut self, case_normalization: CaseNormalization) -> Self {
        self.case_normalization = case_normalization;
        self
    }

    /// Limit stored words to `max_word_length` characters.
    pub fn with_max_word_length(mut self, max_word_length: usize) -> Self {
        self.max_word_length = Some(max_word_length);
        self
    }
}

impl Validate for TrieConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_word_length == Some(0) {
            return Err(ConfigError::ValidationError(
                "max_word_length must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
