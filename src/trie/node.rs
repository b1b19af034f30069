//! Node implementation for the trie.
//!
//! A node stands for the prefix spelled by the edges from the root down to it.
//! It owns its children outright; there are no back or shared references.

use hashbrown::HashMap;

/// A node in the trie.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Node {
    /// Map of characters to child nodes
    pub children: HashMap<char, Node>,

    /// Whether the prefix ending at this node is itself a stored word
    pub is_end_of_word: bool,
}

impl Node {
    /// Creates a new node with no children that does not end a word.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached by `c`, if any.
    pub fn child(&self, c: char) -> Option<&Node> {
        self.children.get(&c)
    }
}
