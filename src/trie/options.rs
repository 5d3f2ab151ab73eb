/// Options controlling how a line-delimited word list is read into a trie.
///
/// The defaults keep every line verbatim apart from its terminator (`\n` or
/// `\r\n`), so a word list round-trips exactly.
///
/// ```
/// use libtrie::trie::LoadOptions;
///
/// let options = LoadOptions::new().skip_comments(true).trim_whitespace(true);
/// assert!(options.skips_comments());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadOptions {
    skip_comments: bool,
    trim_whitespace: bool,
}

impl LoadOptions {
    /// Creates the default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore lines whose first non-space character is `#`.
    pub fn skip_comments(mut self, skip: bool) -> Self {
        self.skip_comments = skip;
        self
    }

    /// Trim leading and trailing whitespace from each line before inserting it.
    pub fn trim_whitespace(mut self, trim: bool) -> Self {
        self.trim_whitespace = trim;
        self
    }

    /// True if comment lines are ignored.
    pub fn skips_comments(&self) -> bool {
        self.skip_comments
    }

    /// True if lines are trimmed.
    pub fn trims_whitespace(&self) -> bool {
        self.trim_whitespace
    }

    /// Applies these options to one line (terminator already removed).
    ///
    /// Returns `None` if the line should not be inserted.
    pub(crate) fn word<'l>(&self, line: &'l str) -> Option<&'l str> {
        if self.skip_comments && is_comment(line) {
            return None;
        }
        Some(if self.trim_whitespace { line.trim() } else { line })
    }
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}
