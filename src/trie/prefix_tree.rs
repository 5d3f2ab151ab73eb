use super::builder::{Builder, IntoWord};
use super::char_trait::TrieChar;
use super::completer::AutoCompleter;
use super::node::TrieNode;
use super::words::Words;

/// An in-memory prefix tree over sequences of symbols.
///
/// A `Trie` is built once, through [`Builder`], [`build_trie`](super::builder::build_trie)
/// or [`FromIterator`], and is read-only afterwards. Any number of
/// [`AutoCompleter`]s may borrow it at the same time.
///
/// Enumeration results come back in an unspecified order; sort them if you need
/// a stable one.
///
/// # Examples
///
/// ```
/// use libtrie::trie::Trie;
///
/// let trie: Trie<char> = ["ab", "abc", "abcd", "af", "fa"].into_iter().collect();
/// let mut words = trie.all_with_prefix("ab");
/// words.sort();
/// assert_eq!(words, ["ab", "abc", "abcd"]);
/// assert!(trie.all_with_prefix("x").is_empty());
/// ```
pub struct Trie<C: TrieChar> {
    root: TrieNode<C>,
    node_count: usize,
    word_count: usize,
}

impl<C: TrieChar> Trie<C> {
    pub(crate) fn from_parts(root: TrieNode<C>, node_count: usize, word_count: usize) -> Self {
        Trie {
            root,
            node_count,
            word_count,
        }
    }

    /// Returns a reference to the root node.
    ///
    /// Use [`get()`](TrieNode::get), [`is_word()`](TrieNode::is_word) and
    /// [`children()`](TrieNode::children) to walk the tree by hand.
    pub fn root(&self) -> &TrieNode<C> {
        &self.root
    }

    /// Returns the number of nodes in the trie, not counting the root.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Returns the number of distinct words stored.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// True if no word is stored.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Checks if a word is contained in the trie.
    pub fn contains(&self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        self.root.descend(&word).is_some_and(|n| n.is_word())
    }

    /// Returns true if some stored word starts with `prefix`.
    ///
    /// The empty prefix always matches, even in an empty trie.
    pub fn has_prefix(&self, prefix: impl IntoWord<C>) -> bool {
        let prefix = prefix.collect_word();
        self.root.descend(&prefix).is_some()
    }

    /// Iterates over every word in the trie.
    pub fn words(&self) -> Words<'_, C> {
        Words::new(&self.root, &[])
    }

    /// Iterates over every word that starts with `prefix`, the prefix itself included
    /// when it is a word.
    ///
    /// Yields nothing if `prefix` is not a path in the trie.
    pub fn words_with_prefix(&self, prefix: impl IntoWord<C>) -> Words<'_, C> {
        let prefix = prefix.collect_word();
        match self.root.descend(&prefix) {
            Some(node) => Words::new(node, &prefix),
            None => Words::empty(),
        }
    }

    /// Creates a cursor positioned at the root of this trie.
    pub fn completer(&self) -> AutoCompleter<'_, C> {
        AutoCompleter::new(self)
    }
}

impl Trie<char> {
    /// Returns every word in the trie.
    pub fn all_words(&self) -> Vec<String> {
        self.words().map(String::from_iter).collect()
    }

    /// Returns every word that begins with `prefix`.
    ///
    /// Each result is the full word. `prefix` is included when it is a word itself.
    /// A prefix that leads nowhere gives an empty result.
    pub fn all_with_prefix(&self, prefix: &str) -> Vec<String> {
        self.words_with_prefix(prefix)
            .map(String::from_iter)
            .collect()
    }
}

impl<C: TrieChar> Default for Trie<C> {
    fn default() -> Self {
        Builder::new().build()
    }
}

impl<C: TrieChar, W: IntoWord<C>> FromIterator<W> for Trie<C> {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        super::builder::build_trie(iter)
    }
}

impl<C: TrieChar> std::fmt::Debug for Trie<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trie")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count)
            .finish()
    }
}
