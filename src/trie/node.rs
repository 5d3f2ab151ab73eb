use hashbrown::hash_map;
use hashbrown::HashMap;

use super::char_trait::TrieChar;

/// An iterator over the children of a [`TrieNode`].
///
/// Children are visited in an unspecified order.
#[derive(Clone)]
pub struct ChildIter<'t, C: TrieChar> {
    inner: hash_map::Iter<'t, C, TrieNode<C>>,
}

impl<'t, C: TrieChar> Iterator for ChildIter<'t, C> {
    type Item = (C, &'t TrieNode<C>);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&letter, node)| (letter, node))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<C: TrieChar> ExactSizeIterator for ChildIter<'_, C> {}

/// A node in the prefix tree.
///
/// Every node exclusively owns its children, so dropping a node drops its
/// whole subtree. A node is a word terminal when the path of symbols from the
/// root to it spells an inserted word.
pub struct TrieNode<C: TrieChar> {
    children: HashMap<C, TrieNode<C>>,
    word: bool,
}

impl<C: TrieChar> TrieNode<C> {
    /// Creates a new node with no children that is not a word terminal.
    pub fn new() -> Self {
        TrieNode {
            children: HashMap::new(),
            word: false,
        }
    }

    /// Returns the node that letter's edge leads to, or None if no such edge exists.
    #[inline]
    pub fn get(&self, letter: C) -> Option<&TrieNode<C>> {
        self.children.get(&letter)
    }

    /// True if this node corresponds to the end of a word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    /// Returns true if this node has the given suffix as the path to a valid word.
    #[inline]
    pub fn has_suffix<I: Iterator<Item = C>>(&self, suffix: &mut I) -> bool {
        suffix
            .try_fold(self, |node, ch| node.get(ch))
            .is_some_and(|n| n.is_word())
    }

    /// Returns an iterator over all children of this node.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        ChildIter {
            inner: self.children.iter(),
        }
    }

    /// Returns the number of children.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Follows `path` from this node, returning the node it ends at.
    pub(crate) fn descend(&self, path: &[C]) -> Option<&TrieNode<C>> {
        path.iter().try_fold(self, |node, &ch| node.get(ch))
    }

    /// Returns the child for `letter`, creating it if missing.
    ///
    /// `created` is incremented when a new node is allocated.
    pub(crate) fn child_or_insert(&mut self, letter: C, created: &mut usize) -> &mut TrieNode<C> {
        self.children.entry(letter).or_insert_with(|| {
            *created += 1;
            TrieNode::new()
        })
    }

    /// Marks this node as a word terminal. Returns false if it already was one.
    pub(crate) fn mark_word(&mut self) -> bool {
        !std::mem::replace(&mut self.word, true)
    }
}

impl<C: TrieChar> Default for TrieNode<C> {
    fn default() -> Self {
        Self::new()
    }
}

// Only this node's own fields are printed, so deep subtrees format in constant stack.
impl<C: TrieChar> std::fmt::Debug for TrieNode<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("word", &self.word)
            .field("child_count", &self.child_count())
            .finish()
    }
}

// The derived drop glue recurses once per level, which overflows the stack on
// very long words. Unlink the subtree onto a heap stack instead.
impl<C: TrieChar> Drop for TrieNode<C> {
    fn drop(&mut self) {
        if self.children.is_empty() {
            return;
        }
        let mut pending: Vec<TrieNode<C>> = self.children.drain().map(|(_, n)| n).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, n)| n));
        }
    }
}
