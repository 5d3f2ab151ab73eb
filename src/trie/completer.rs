//! Incremental auto-completion over a built [`Trie`].
//!
//! An [`AutoCompleter`] is a cursor that follows the user's keystrokes. Typing a
//! symbol moves one edge down the trie and deleting moves one edge back up, so
//! each step costs O(1) no matter how long the prefix already is. The cursor
//! keeps one borrowed node per typed symbol plus the root, which means the trie
//! must outlive it; the borrow checker enforces that.

use tracing::trace;

use super::builder::IntoWord;
use super::char_trait::TrieChar;
use super::error::{TrieError, TrieResult};
use super::node::TrieNode;
use super::prefix_tree::Trie;
use super::words::Words;

/// A trie cursor that can move forwards and backwards, for implementing
/// autocomplete.
///
/// # Examples
///
/// ```
/// use libtrie::trie::{AutoCompleter, Trie, TrieError};
///
/// let trie: Trie<char> = ["bake", "baker", "cake"].into_iter().collect();
/// let mut completer = AutoCompleter::new(&trie);
///
/// completer.add_str("bak").unwrap();
/// let mut matches = completer.all_matches();
/// matches.sort();
/// assert_eq!(matches, ["bake", "baker"]);
///
/// assert!(matches!(completer.add('x'), Err(TrieError::NoMatches)));
/// assert_eq!(completer.prefix_string(), "bak");
///
/// completer.delete();
/// assert_eq!(completer.prefix_string(), "ba");
/// ```
#[derive(Clone)]
pub struct AutoCompleter<'t, C: TrieChar> {
    root: &'t TrieNode<C>,
    prefix: Vec<C>,
    // stack[0] is the root and stack[i + 1] is reached from stack[i] via prefix[i].
    stack: Vec<&'t TrieNode<C>>,
}

impl<'t, C: TrieChar> AutoCompleter<'t, C> {
    /// Creates a cursor over `trie` with nothing typed yet.
    pub fn new(trie: &'t Trie<C>) -> Self {
        AutoCompleter {
            root: trie.root(),
            prefix: Vec::new(),
            stack: vec![trie.root()],
        }
    }

    /// Returns the node the typed prefix leads to.
    #[inline]
    pub fn node(&self) -> &'t TrieNode<C> {
        self.stack.last().copied().unwrap_or(self.root)
    }

    /// Appends `letter` to the typed prefix.
    ///
    /// # Errors
    ///
    /// Returns [`TrieError::NoMatches`] if no stored word continues the prefix with
    /// `letter`. The cursor is not moved in that case.
    pub fn add(&mut self, letter: C) -> TrieResult<()> {
        let Some(child) = self.node().get(letter) else {
            trace!(?letter, depth = self.depth(), "no child for symbol");
            return Err(TrieError::NoMatches);
        };
        self.prefix.push(letter);
        self.stack.push(child);
        trace!(?letter, depth = self.depth(), "cursor advanced");
        Ok(())
    }

    /// Appends every symbol of `word` in order.
    ///
    /// # Errors
    ///
    /// Stops at the first symbol with no match and returns [`TrieError::NoMatches`].
    /// Symbols appended before the failing one stay appended.
    pub fn add_word(&mut self, word: impl IntoWord<C>) -> TrieResult<()> {
        word.collect_word()
            .iter()
            .try_for_each(|&letter| self.add(letter))
    }

    /// Removes the last symbol of the typed prefix.
    ///
    /// Does nothing if the prefix is already empty.
    pub fn delete(&mut self) {
        if self.prefix.pop().is_some() {
            self.stack.pop();
            trace!(depth = self.depth(), "cursor moved back");
        }
    }

    /// Clears the typed prefix, moving the cursor back to the root.
    pub fn reset(&mut self) {
        self.prefix.clear();
        self.stack.clear();
        self.stack.push(self.root);
    }

    /// Returns the symbols typed so far.
    pub fn prefix(&self) -> &[C] {
        &self.prefix
    }

    /// Returns the number of symbols typed so far.
    pub fn depth(&self) -> usize {
        self.prefix.len()
    }

    /// True if the typed prefix is itself a stored word.
    pub fn is_word(&self) -> bool {
        self.node().is_word()
    }

    /// Iterates over every word that extends the typed prefix, including the
    /// prefix itself when it is a word.
    pub fn words(&self) -> Words<'t, C> {
        Words::new(self.node(), &self.prefix)
    }

    /// Returns every word that extends the typed prefix.
    pub fn matches(&self) -> Vec<Vec<C>> {
        self.words().collect()
    }
}

impl<'t> AutoCompleter<'t, char> {
    /// Appends every character of `input` in order.
    ///
    /// # Errors
    ///
    /// Same as [`add_word`](AutoCompleter::add_word): returns [`TrieError::NoMatches`]
    /// at the first character with no match, keeping the characters before it.
    pub fn add_str(&mut self, input: &str) -> TrieResult<()> {
        input.chars().try_for_each(|ch| self.add(ch))
    }

    /// Returns every word that extends the typed prefix, in no particular order.
    pub fn all_matches(&self) -> Vec<String> {
        self.words().map(String::from_iter).collect()
    }

    /// Returns the typed prefix as a string.
    pub fn prefix_string(&self) -> String {
        self.prefix.iter().collect()
    }
}

impl<C: TrieChar> std::fmt::Debug for AutoCompleter<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoCompleter")
            .field("prefix", &self.prefix)
            .field("is_word", &self.is_word())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::builder::build_trie;

    const WORDS: [&str; 10] = [
        "abc", "abcde", "abb", "abbc", "abba", "abccd", "abcdeef", "acabc", "bc", "bced",
    ];

    fn same_contents(expected: &[&str], mut actual: Vec<String>) {
        let mut expected: Vec<&str> = expected.to_vec();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }

    #[test]
    fn typing_and_deleting() {
        let trie = build_trie(WORDS);
        let mut ac = AutoCompleter::new(&trie);

        same_contents(&WORDS, ac.all_matches());

        // user types 'a'
        ac.add('a').unwrap();
        same_contents(
            &["abc", "abcde", "abb", "abbc", "abba", "abccd", "abcdeef", "acabc"],
            ac.all_matches(),
        );

        // user types 'b'
        ac.add('b').unwrap();
        let at_ab = ["abc", "abcde", "abb", "abbc", "abba", "abccd", "abcdeef"];
        same_contents(&at_ab, ac.all_matches());

        // user types 'd'
        assert!(matches!(ac.add('d'), Err(TrieError::NoMatches)));
        same_contents(&at_ab, ac.all_matches());
        assert_eq!(ac.prefix(), ['a', 'b']);

        // user types 'b'
        ac.add('b').unwrap();
        same_contents(&["abb", "abbc", "abba"], ac.all_matches());

        // user types 'a'
        ac.add('a').unwrap();
        same_contents(&["abba"], ac.all_matches());

        ac.delete(); // abb
        ac.delete(); // ab

        // user types 'c'
        ac.add('c').unwrap();
        same_contents(&["abc", "abcde", "abccd", "abcdeef"], ac.all_matches());

        // user types "de"
        ac.add_str("de").unwrap();
        same_contents(&["abcde", "abcdeef"], ac.all_matches());

        for _ in 0..5 {
            ac.delete();
        }
        same_contents(&WORDS, ac.all_matches());

        // additional deletions are ineffective
        ac.delete();
        ac.delete();
        ac.delete();
        same_contents(&WORDS, ac.all_matches());
        assert_eq!(ac.depth(), 0);
    }

    #[test]
    fn add_str_keeps_partial_progress() {
        let trie = build_trie(WORDS);
        let mut ac = trie.completer();
        assert!(ac.add_str("abz").unwrap_err().is_no_matches());
        assert_eq!(ac.prefix_string(), "ab");
        assert_eq!(ac.stack.len(), ac.prefix.len() + 1);
    }

    #[test]
    fn is_word_tracks_terminal() {
        let trie = build_trie(WORDS);
        let mut ac = trie.completer();
        ac.add_str("ab").unwrap();
        assert!(!ac.is_word());
        ac.add('c').unwrap();
        assert!(ac.is_word());
        same_contents(&["abc", "abcde", "abccd", "abcdeef"], ac.all_matches());
    }

    #[test]
    fn reset_returns_to_root() {
        let trie = build_trie(WORDS);
        let mut ac = trie.completer();
        ac.add_str("bce").unwrap();
        ac.reset();
        assert!(ac.prefix().is_empty());
        assert!(std::ptr::eq(ac.node(), trie.root()));
        same_contents(&WORDS, ac.all_matches());
    }

    #[test]
    fn root_stays_at_bottom_of_stack() {
        let trie = build_trie(WORDS);
        let mut ac = trie.completer();
        ac.add_str("abcd").unwrap();
        ac.reset();
        ac.add_str("bc").unwrap();
        for _ in 0..4 {
            assert_eq!(ac.stack.len(), ac.prefix.len() + 1);
            assert!(std::ptr::eq(ac.stack[0], trie.root()));
            ac.delete();
        }
        assert!(std::ptr::eq(ac.node(), ac.root));
        assert_eq!(ac.stack.len(), 1);
    }

    #[test]
    fn empty_trie_has_no_matches() {
        let trie: Trie<char> = build_trie(Vec::<String>::new());
        let mut ac = trie.completer();
        assert!(ac.all_matches().is_empty());
        assert!(ac.add('a').is_err());
        ac.delete();
        assert!(ac.all_matches().is_empty());
    }

    #[test]
    fn generic_cursor_over_bytes() {
        let trie = build_trie([b"cat".to_vec(), b"car".to_vec(), b"dog".to_vec()]);
        let mut ac = AutoCompleter::new(&trie);
        ac.add_word(b"ca").unwrap();
        let mut matches = ac.matches();
        matches.sort();
        assert_eq!(matches, [b"car".to_vec(), b"cat".to_vec()]);
        assert!(ac.add(b'x').is_err());
        assert_eq!(ac.prefix(), b"ca");
    }

    #[test]
    fn independent_cursors_share_a_trie() {
        let trie = build_trie(WORDS);
        let mut first = trie.completer();
        let mut second = first.clone();
        first.add('a').unwrap();
        second.add('b').unwrap();
        same_contents(&["bc", "bced"], second.all_matches());
        assert_eq!(first.prefix_string(), "a");
    }

    #[test]
    fn debug_shows_prefix() {
        let trie = build_trie(WORDS);
        let mut ac = trie.completer();
        ac.add_str("bc").unwrap();
        assert_eq!(
            format!("{ac:?}"),
            "AutoCompleter { prefix: ['b', 'c'], is_word: true }"
        );
    }
}
