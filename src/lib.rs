//! Trie Recommender Library
//!
//! A prefix-tree index over a vocabulary of words with exact search and
//! prefix autocomplete.
//!
//! # Architecture
//!
//! - [`trie`]: the [`Trie`] and its [`Node`]s, plus [`SharedTrie`] for
//!   concurrent readers with a writer
//! - [`config`]: typed, validated settings loaded from defaults, files and
//!   environment variables
//! - [`error`]: the crate's error types
//! - [`logging`]: optional `tracing` subscriber setup
//!
//! ```
//! use trie_recommender::Trie;
//!
//! let mut trie = Trie::new();
//! trie.build(["Apple", "Application", "Banana"]).unwrap();
//!
//! assert!(trie.contains("ApPlE"));
//! assert_eq!(trie.autocomplete("ban"), vec!["banana".to_string()]);
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use config::{CaseNormalization, RecommenderConfig, TrieConfig};
pub use error::{TrieError, TrieResult};
pub use trie::{Node, SearchOutcome, SharedTrie, Suggestions, Trie, Words};

/// Version information for the trie recommender.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Loads configuration from `config_path` (if any) and the `TRIE` environment
/// prefix, then creates an empty trie configured from it.
pub fn load_trie<P: AsRef<std::path::Path>>(config_path: Option<P>) -> TrieResult<Trie> {
    let config = config::ConfigLoader::new(config_path, config::ENV_PREFIX).load()?;
    Ok(Trie::with_config(config.trie))
}
