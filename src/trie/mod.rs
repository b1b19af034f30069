//! Trie implementation.
//!
//! [`Trie`] is a prefix tree over a vocabulary of words. It is built once from
//! a vocabulary and then answers two kinds of queries:
//!
//! * exact membership ([`Trie::search`], [`Trie::contains`])
//! * prefix completion ([`Trie::autocomplete`], [`Trie::suggest`])
//!
//! Every word and every query goes through the same case normalization
//! ([`CaseNormalization`](crate::config::CaseNormalization)), so lookups
//! are case-insensitive by default.
//!
//! ```
//! use trie_recommender::Trie;
//!
//! let trie = Trie::from_vocabulary(["Cat", "Car", "Card", "Dog"]).unwrap();
//! assert!(trie.search("cAT").is_found());
//! assert!(!trie.search("ca").is_found());
//!
//! let mut words = trie.autocomplete("ca");
//! words.sort();
//! assert_eq!(words, ["car", "card", "cat"]);
//! ```
//!
//! Suggestion order follows the child map's iteration order and is not
//! stable; sort the result if a deterministic order is needed.

mod node;
mod shared;

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::TrieConfig;
use crate::error::{TrieError, TrieResult};

pub use node::Node;
pub use shared::SharedTrie;

/// Outcome of an exact-match search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// The query after case normalization
    pub word: String,

    /// Whether the word is stored in the trie
    pub found: bool,
}

impl SearchOutcome {
    /// Whether the word is stored in the trie.
    pub fn is_found(&self) -> bool {
        self.found
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.found {
            write!(f, "{} found", self.word)
        } else {
            write!(f, "{} not found", self.word)
        }
    }
}

/// Result of [`Trie::suggest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestions {
    /// The prefix after case normalization
    pub prefix: String,

    /// The longest leading part of `prefix` that exists as a path in the trie
    pub matched_prefix: String,

    /// Every stored word starting with `matched_prefix`
    pub words: Vec<String>,
}

impl Suggestions {
    /// Whether the whole prefix was found in the trie.
    pub fn is_exact_match(&self) -> bool {
        self.matched_prefix.len() == self.prefix.len()
    }
}

/// Prefix tree over a vocabulary of words.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    /// The root node, standing for the empty prefix
    root: Node,

    /// Configuration options
    config: TrieConfig,

    /// Number of distinct stored words
    len: usize,
}

impl Trie {
    /// Creates a new empty `Trie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Creates a new empty `Trie` with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            root: Node::new(),
            config,
            len: 0,
        }
    }

    /// Creates a `Trie` with default configuration and builds it from
    /// `vocabulary`.
    pub fn from_vocabulary<I, S>(vocabulary: I) -> TrieResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        trie.build(vocabulary)?;
        Ok(trie)
    }

    /// Returns the configuration this trie was created with.
    pub fn config(&self) -> &TrieConfig {
        &self.config
    }

    /// Inserts every word of `vocabulary`.
    ///
    /// Empty words are skipped. Words already present are skipped silently.
    /// All words are normalized and checked before the first insert, so on
    /// error the trie is left exactly as it was.
    ///
    /// # Errors
    ///
    /// * [`TrieError::WordTooLong`] if a maximum word length is configured and
    ///   any word exceeds it. With the default configuration `build` never fails.
    pub fn build<I, S>(&mut self, vocabulary: I) -> TrieResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut skipped = 0usize;
        let mut words = Vec::new();
        for word in vocabulary {
            match self.prepare(word.as_ref()) {
                Ok(word) => words.push(word.into_owned()),
                Err(TrieError::EmptyWord) => skipped += 1,
                Err(e) => {
                    warn!(error = %e, "Rejected vocabulary");
                    return Err(e);
                }
            }
        }
        if skipped > 0 {
            warn!(skipped, "Skipped empty words in vocabulary");
        }

        let inserted = words
            .iter()
            .filter(|word| self.insert_normalized(word))
            .count();

        debug!(
            words = words.len(),
            inserted,
            skipped,
            total = self.len,
            "Vocabulary built"
        );
        Ok(())
    }

    /// Inserts a single word.
    ///
    /// # Returns
    ///
    /// * `Ok(true)` - the word was not stored before.
    /// * `Ok(false)` - the word was already stored; nothing changed.
    /// * `Err(TrieError)` - the word is empty or too long.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) -> TrieResult<bool> {
        let word = self.prepare(word.as_ref())?;
        Ok(self.insert_normalized(&word))
    }

    /// Looks up `word` exactly.
    ///
    /// A word that is only a prefix of stored words is not found.
    pub fn search<W: AsRef<str>>(&self, word: W) -> SearchOutcome {
        let word = self.normalize(word.as_ref());
        let found = self
            .find_node(&word)
            .is_some_and(|node| node.is_end_of_word);
        trace!(word = %word, found, "search");

        SearchOutcome {
            word: word.into_owned(),
            found,
        }
    }

    /// Whether `word` is stored in the trie.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.search(word).found
    }

    /// Returns every stored word that starts with `prefix`.
    ///
    /// An empty prefix yields the whole vocabulary. A prefix that leaves the
    /// trie yields nothing.
    pub fn autocomplete<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        let prefix = self.normalize(prefix.as_ref());
        let words: Vec<String> = match self.find_node(&prefix) {
            Some(node) => Words::below(node, prefix.to_string()).collect(),
            None => Vec::new(),
        };
        trace!(prefix = %prefix, suggestions = words.len(), "autocomplete");
        words
    }

    /// Completes as much of `prefix` as the trie knows.
    ///
    /// The prefix is followed until its first character with no matching
    /// edge. Every word below the node reached is returned, which is the
    /// whole vocabulary when not even the first character matches.
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> Suggestions {
        let prefix = self.normalize(prefix.as_ref());
        let mut node = &self.root;
        let mut matched = String::with_capacity(prefix.len());
        for c in prefix.chars() {
            match node.child(c) {
                Some(next) => {
                    matched.push(c);
                    node = next;
                }
                None => break,
            }
        }

        let words: Vec<String> = Words::below(node, matched.clone()).collect();
        trace!(
            prefix = %prefix,
            matched = %matched,
            suggestions = words.len(),
            "suggest"
        );

        Suggestions {
            prefix: prefix.into_owned(),
            matched_prefix: matched,
            words,
        }
    }

    /// Returns a lazy iterator over every stored word.
    pub fn words(&self) -> Words<'_> {
        Words::below(&self.root, String::new())
    }

    /// Returns every stored word.
    pub fn dump_vocabulary(&self) -> Vec<String> {
        self.words().collect()
    }

    /// Returns the number of distinct stored words.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been stored yet.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn normalize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        self.config.case_normalization.apply(word)
    }

    /// Normalizes `word` and checks that the trie may store it.
    fn prepare<'a>(&self, word: &'a str) -> TrieResult<Cow<'a, str>> {
        let word = self.normalize(word);
        if word.is_empty() {
            return Err(TrieError::EmptyWord);
        }
        if let Some(max_length) = self.config.max_word_length {
            if word.chars().count() > max_length {
                return Err(TrieError::WordTooLong {
                    word: word.into_owned(),
                    max_length,
                });
            }
        }
        Ok(word)
    }

    /// Returns `true` if the word was not stored before.
    fn insert_normalized(&mut self, word: &str) -> bool {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }

        let is_new = !node.is_end_of_word;
        node.is_end_of_word = true;
        if is_new {
            self.len += 1;
        }
        is_new
    }

    fn find_node(&self, prefix: &str) -> Option<&Node> {
        prefix.chars().try_fold(&self.root, |node, c| node.child(c))
    }
}

/// Iterator over the words stored in a [`Trie`], returned by [`Trie::words`].
///
/// Walks the trie with an explicit stack, so deep words never grow the call
/// stack.
#[derive(Debug)]
pub struct Words<'a> {
    stack: Vec<hashbrown::hash_map::Iter<'a, char, Node>>,
    path: String,
    /// Word spelled by the start node itself, yielded first
    pending: Option<String>,
}

impl<'a> Words<'a> {
    /// Iterates the words at or below `node`, where `path` is the prefix
    /// spelled by `node`.
    fn below(node: &'a Node, path: String) -> Self {
        Self {
            stack: vec![node.children.iter()],
            pending: node.is_end_of_word.then(|| path.clone()),
            path,
        }
    }
}

impl Iterator for Words<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if let Some(word) = self.pending.take() {
            return Some(word);
        }
        loop {
            let top = self.stack.last_mut()?;
            match top.next() {
                Some((&c, child)) => {
                    self.path.push(c);
                    self.stack.push(child.children.iter());
                    if child.is_end_of_word {
                        return Some(self.path.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    self.path.pop();
                }
            }
        }
    }
}

impl std::iter::FusedIterator for Words<'_> {}
