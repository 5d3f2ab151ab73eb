use smallvec::SmallVec;

use super::char_trait::TrieChar;
use super::node::TrieNode;

/// Pending visit: parent path length, edge symbol taken (None for the start node), node.
type Frame<'t, C> = (usize, Option<C>, &'t TrieNode<C>);

/// Depth-first iterator over the words stored below a node.
///
/// Each item is the full path to a word terminal: the prefix the iterator was
/// started with followed by the symbols below the start node. If the start
/// node is itself a word, the prefix alone is yielded. The traversal keeps
/// its own stack, so arbitrarily deep tries are safe to walk.
///
/// Words are yielded in an unspecified order.
#[derive(Clone)]
pub struct Words<'t, C: TrieChar> {
    path: SmallVec<[C; 32]>,
    stack: Vec<Frame<'t, C>>,
}

impl<'t, C: TrieChar> Words<'t, C> {
    /// Starts a traversal at `node`, prepending `prefix` to every word.
    pub(crate) fn new(node: &'t TrieNode<C>, prefix: &[C]) -> Self {
        Words {
            path: prefix.iter().copied().collect(),
            stack: vec![(prefix.len(), None, node)],
        }
    }

    /// An iterator that yields nothing.
    pub(crate) fn empty() -> Self {
        Words {
            path: SmallVec::new(),
            stack: Vec::new(),
        }
    }
}

impl<C: TrieChar> Iterator for Words<'_, C> {
    type Item = Vec<C>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((depth, edge, node)) = self.stack.pop() {
            self.path.truncate(depth);
            if let Some(ch) = edge {
                self.path.push(ch);
            }
            let len = self.path.len();
            self.stack
                .extend(node.children().map(|(ch, child)| (len, Some(ch), child)));
            if node.is_word() {
                return Some(self.path.to_vec());
            }
        }
        None
    }
}

impl<C: TrieChar> std::iter::FusedIterator for Words<'_, C> {}

#[cfg(test)]
mod test {
    use super::*;

    fn insert(root: &mut TrieNode<char>, word: &str) {
        let mut created = 0;
        let mut node = root;
        for ch in word.chars() {
            node = node.child_or_insert(ch, &mut created);
        }
        node.mark_word();
    }

    fn sorted(words: Words<'_, char>) -> Vec<String> {
        let mut out: Vec<String> = words.map(String::from_iter).collect();
        out.sort();
        out
    }

    #[test]
    fn empty_yields_nothing() {
        assert_eq!(Words::<char>::empty().next(), None);
        let root = TrieNode::<char>::new();
        assert_eq!(Words::new(&root, &[]).next(), None);
    }

    #[test]
    fn yields_every_terminal() {
        let mut root = TrieNode::new();
        for word in ["to", "tea", "ted", "ten", "i", "in", "inn"] {
            insert(&mut root, word);
        }
        assert_eq!(
            sorted(Words::new(&root, &[])),
            ["i", "in", "inn", "tea", "ted", "ten", "to"]
        );
    }

    #[test]
    fn prefix_is_prepended_and_start_node_included() {
        let mut root = TrieNode::new();
        for word in ["in", "inn", "ink"] {
            insert(&mut root, word);
        }
        let start = root.descend(&['i', 'n']).unwrap();
        assert_eq!(sorted(Words::new(start, &['i', 'n'])), ["in", "ink", "inn"]);
    }

    #[test]
    fn deep_word_does_not_overflow() {
        let long: String = std::iter::repeat('z').take(100_000).collect();
        let mut root = TrieNode::new();
        insert(&mut root, &long);
        let words: Vec<Vec<char>> = Words::new(&root, &[]).collect();
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].len(), 100_000);
    }
}
