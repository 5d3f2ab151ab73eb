//! # libtrie
//!
//! An in-memory [prefix tree](https://en.wikipedia.org/wiki/Trie) over sequences of
//! unicode code points, with a cursor for incremental auto-completion.
//!
//! Every code point is an opaque symbol: there is no case folding and no
//! normalization, so `"é"` and `"e\u{301}"` are different words.
//!
//! ## Features
//!
//! - **Generic over symbol type**: works with `char`, `u8`, `u16`, or any type
//!   implementing [`TrieChar`](trie::TrieChar)
//! - **Order-free construction**: words can be inserted in any order, duplicates collapse
//! - **Incremental completion**: [`AutoCompleter`](trie::AutoCompleter) moves one edge per
//!   keystroke instead of walking from the root again
//! - **Thread-safe reads**: a built [`Trie`](trie::Trie) is immutable and `Sync`
//!
//! ## Quick Start
//!
//! ```
//! use libtrie::trie::builder::build_trie;
//!
//! let trie = build_trie(["BAKE", "BAKER", "CAKE", "FAKE"]);
//! assert!(trie.contains("CAKE"));
//! assert!(!trie.contains("AKE"));
//!
//! let mut words = trie.all_with_prefix("BA");
//! words.sort();
//! assert_eq!(words, ["BAKE", "BAKER"]);
//! ```
//!
//! ## Auto-completion
//!
//! ```
//! use libtrie::trie::builder::build_trie;
//!
//! let trie = build_trie(["abb", "abba", "abc", "bc"]);
//! let mut completer = trie.completer();
//!
//! completer.add('a').unwrap();
//! completer.add('b').unwrap();
//! assert!(completer.add('d').is_err());
//!
//! completer.add('b').unwrap();
//! let mut matches = completer.all_matches();
//! matches.sort();
//! assert_eq!(matches, ["abb", "abba"]);
//!
//! completer.delete();
//! assert_eq!(completer.prefix_string(), "ab");
//! ```
//!
//! ## Loading a word list
//!
//! ```no_run
//! use libtrie::trie::builder::build_trie_from_file;
//! use libtrie::trie::LoadOptions;
//!
//! let trie = build_trie_from_file("words_alpha.txt", &LoadOptions::default()).unwrap();
//! println!("{} words", trie.word_count());
//! ```

#![warn(missing_docs)]

/// Core trie data structure: nodes, builder, cursor and word loading.
pub mod trie;
