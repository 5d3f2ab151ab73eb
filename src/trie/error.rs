//! Error types for trie construction and navigation.

/// Result type for fallible trie operations.
pub type TrieResult<T> = Result<T, TrieError>;

/// Errors that can occur while loading a trie or moving an [`AutoCompleter`](super::AutoCompleter).
#[derive(Debug, thiserror::Error)]
pub enum TrieError {
    /// No word continues the current prefix with the requested symbol.
    ///
    /// The cursor is left exactly where it was before the failing step.
    #[error("no more matches")]
    NoMatches,

    /// The word source could not be read.
    #[error("failed to read word list: {0}")]
    Io(#[from] std::io::Error),
}

impl TrieError {
    /// True if this error is [`TrieError::NoMatches`].
    pub fn is_no_matches(&self) -> bool {
        matches!(self, TrieError::NoMatches)
    }
}
