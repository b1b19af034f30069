//! Shared, lock-guarded trie.
//!
//! [`Trie`] has no internal locking. When several threads query a trie that
//! may still receive inserts, wrap it in a [`SharedTrie`]: one read-write lock
//! guards the whole structure, so queries run in parallel and a writer gets
//! exclusive access.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard};

use super::{SearchOutcome, Suggestions, Trie};
use crate::config::TrieConfig;
use crate::error::TrieResult;

/// A [`Trie`] behind an `Arc<RwLock<_>>`. Clones share the same trie.
#[derive(Debug, Clone, Default)]
pub struct SharedTrie {
    inner: Arc<RwLock<Trie>>,
}

impl SharedTrie {
    /// Wraps `trie` for shared use.
    pub fn new(trie: Trie) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }

    /// Creates an empty shared trie with the specified configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self::new(Trie::with_config(config))
    }

    /// See [`Trie::build`]. Holds the write lock for the whole build.
    pub fn build<I, S>(&self, vocabulary: I) -> TrieResult<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.inner.write().build(vocabulary)
    }

    /// See [`Trie::insert`].
    pub fn insert<W: AsRef<str>>(&self, word: W) -> TrieResult<bool> {
        self.inner.write().insert(word)
    }

    /// See [`Trie::search`].
    pub fn search<W: AsRef<str>>(&self, word: W) -> SearchOutcome {
        self.inner.read().search(word)
    }

    /// See [`Trie::contains`].
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.inner.read().contains(word)
    }

    /// See [`Trie::autocomplete`].
    pub fn autocomplete<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        self.inner.read().autocomplete(prefix)
    }

    /// See [`Trie::suggest`].
    pub fn suggest<P: AsRef<str>>(&self, prefix: P) -> Suggestions {
        self.inner.read().suggest(prefix)
    }

    /// See [`Trie::dump_vocabulary`].
    pub fn dump_vocabulary(&self) -> Vec<String> {
        self.inner.read().dump_vocabulary()
    }

    /// See [`Trie::len`].
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// See [`Trie::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Locks the trie for reading, e.g. to iterate [`Trie::words`].
    ///
    /// Writers block until the guard is dropped.
    pub fn read(&self) -> RwLockReadGuard<'_, Trie> {
        self.inner.read()
    }
}

impl From<Trie> for SharedTrie {
    fn from(trie: Trie) -> Self {
        Self::new(trie)
    }
}
