use std::fmt::Debug;
use std::hash::Hash;

/// Trait for types that can serve as edge labels in a trie.
///
/// This trait is automatically implemented for any type satisfying all the
/// required bounds (`char`, `u8`, `u16`, `u32`, etc.).
///
/// - `Copy`: edges and prefixes store symbols by value
/// - `Eq + Hash`: keys of a node's child map
/// - `Debug`: debug printing of nodes and cursors
pub trait TrieChar: Copy + Eq + Hash + Debug {}

impl<T: Copy + Eq + Hash + Debug> TrieChar for T {}
