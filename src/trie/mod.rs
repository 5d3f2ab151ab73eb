/// Trie builder and word-list loading.
pub mod builder;
/// Trait for types that can serve as trie edge labels.
pub mod char_trait;
/// Auto-completion cursor over a built trie.
pub mod completer;
/// Error types.
pub mod error;
/// Trie node type and child iteration.
pub mod node;
/// Options for reading word lists.
pub mod options;
/// The trie container.
pub mod prefix_tree;
/// Depth-first word enumeration.
pub mod words;

pub use builder::IntoWord;
pub use char_trait::TrieChar;
pub use completer::AutoCompleter;
pub use error::{TrieError, TrieResult};
pub use node::TrieNode;
pub use options::LoadOptions;
pub use prefix_tree::Trie;
pub use words::Words;
