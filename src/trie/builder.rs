use itertools::{Itertools, Position};
use smallvec::SmallVec;
use tracing::debug;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::char_trait::TrieChar;
use super::error::TrieResult;
use super::node::TrieNode;
use super::options::LoadOptions;
use super::prefix_tree::Trie;

/// Trait for types that can be used as a word when building or querying a trie.
///
/// Words are strings when the symbols are `char`s, and plain symbol sequences
/// (slices, vectors, arrays) for any [`TrieChar`]. Borrowed `&String` is accepted
/// so a `&Vec<String>` word list can be passed without cloning.
pub trait IntoWord<C: TrieChar> {
    /// Collects this word into a symbol buffer.
    fn collect_word(self) -> SmallVec<[C; 32]>;
}

impl IntoWord<char> for &str {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl IntoWord<char> for &String {
    fn collect_word(self) -> SmallVec<[char; 32]> {
        self.chars().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for &[C] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

impl<C: TrieChar> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.into_iter().collect()
    }
}

impl<C: TrieChar, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> SmallVec<[C; 32]> {
        self.iter().copied().collect()
    }
}

/// A builder for constructing a [`Trie`] word by word.
///
/// Words may be added in any order. Adding a word that is already present is
/// a no-op, and so is adding the empty word: the root is never a word terminal.
///
/// ```
/// use libtrie::trie::builder::Builder;
///
/// let mut builder = Builder::new();
/// assert!(builder.add_word("tea"));
/// assert!(builder.add_word("te"));
/// assert!(!builder.add_word("tea"));
/// let trie = builder.build();
/// assert_eq!(trie.word_count(), 2);
/// ```
#[derive(Debug)]
pub struct Builder<C: TrieChar> {
    root: TrieNode<C>,
    node_count: usize,
    word_count: usize,
}

impl<C: TrieChar> Builder<C> {
    /// Creates a builder holding an empty root.
    pub fn new() -> Self {
        Builder {
            root: TrieNode::new(),
            node_count: 0,
            word_count: 0,
        }
    }

    /// Adds a word to the trie being constructed.
    ///
    /// The word can be any type that implements [`IntoWord`], including `&str`,
    /// `String`, `&[u8]`, `Vec<u8>`, or fixed-size arrays like `[u8; 3]`.
    ///
    /// Returns `true` if the word was not already present.
    pub fn add_word(&mut self, word: impl IntoWord<C>) -> bool {
        let word = word.collect_word();
        self.add_word_slice(&word)
    }

    fn add_word_slice(&mut self, word: &[C]) -> bool {
        let mut added = false;
        let mut node = &mut self.root;
        for (position, &ch) in word.iter().with_position() {
            node = node.child_or_insert(ch, &mut self.node_count);
            if let Position::Last | Position::Only = position {
                added = node.mark_word();
            }
        }
        self.word_count += added as usize;
        added
    }

    /// Finalizes construction and returns the trie.
    pub fn build(self) -> Trie<C> {
        debug!(
            words = self.word_count,
            nodes = self.node_count,
            "built trie"
        );
        Trie::from_parts(self.root, self.node_count, self.word_count)
    }
}

impl<C: TrieChar> Default for Builder<C> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a trie from an iterator of words.
///
/// Each word must implement [`IntoWord`], allowing this function to accept
/// `&str`, `String`, slices, vectors, arrays, or any other supported word type.
/// Words are inserted in order; duplicates collapse and the empty word is ignored.
///
/// # Examples
///
/// Building from strings:
///
/// ```
/// use libtrie::trie::builder::build_trie;
///
/// let trie = build_trie(["CHERRY", "APPLE", "BANANA"]);
/// assert!(trie.contains("BANANA"));
/// assert!(!trie.contains("APRICOT"));
/// ```
///
/// Building from byte sequences:
///
/// ```
/// use libtrie::trie::builder::build_trie;
///
/// let words: Vec<Vec<u8>> = vec![vec![1, 2, 3], vec![1, 2, 4], vec![2, 3, 4]];
/// let trie = build_trie(words);
/// assert!(trie.contains([1, 2, 3]));
/// assert!(!trie.contains([1, 2]));
/// ```
pub fn build_trie<C, W>(words: impl IntoIterator<Item = W>) -> Trie<C>
where
    C: TrieChar,
    W: IntoWord<C>,
{
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word);
    }
    builder.build()
}

/// Builds a trie from a line-delimited word list.
///
/// Each line is one word with its `\n` or `\r\n` terminator removed. Empty lines
/// insert nothing. `options` controls comment skipping and trimming.
///
/// # Errors
///
/// Returns [`TrieError::Io`](super::TrieError::Io) if the reader fails or yields
/// invalid UTF-8.
///
/// ```
/// use libtrie::trie::builder::build_trie_from_reader;
/// use libtrie::trie::LoadOptions;
///
/// let list = "abound\r\nabounds\nsalband\n";
/// let trie = build_trie_from_reader(list.as_bytes(), &LoadOptions::default()).unwrap();
/// assert_eq!(trie.word_count(), 3);
/// ```
pub fn build_trie_from_reader(
    mut reader: impl BufRead,
    options: &LoadOptions,
) -> TrieResult<Trie<char>> {
    let mut builder = Builder::new();
    let mut lines = 0usize;

    // Reuse one buffer for every line instead of allocating through lines().
    let mut buf = String::with_capacity(80);
    while reader.read_line(&mut buf)? != 0 {
        lines += 1;
        let line = buf.strip_suffix('\n').unwrap_or(buf.as_str());
        let line = line.strip_suffix('\r').unwrap_or(line);
        if let Some(word) = options.word(line) {
            builder.add_word(word);
        }
        buf.clear();
    }
    debug!(lines, "read word list");
    Ok(builder.build())
}

/// Builds a trie from a word list file, one word per line.
///
/// See [`build_trie_from_reader`] for the line format.
///
/// # Errors
///
/// Returns [`TrieError::Io`](super::TrieError::Io) if the file cannot be opened or read.
///
/// ```no_run
/// use libtrie::trie::builder::build_trie_from_file;
/// use libtrie::trie::LoadOptions;
///
/// let trie = build_trie_from_file("words_alpha.txt", &LoadOptions::default()).unwrap();
/// ```
pub fn build_trie_from_file(path: impl AsRef<Path>, options: &LoadOptions) -> TrieResult<Trie<char>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading word list");
    let file = File::open(path)?;
    build_trie_from_reader(BufReader::new(file), options)
}
