//! Scanner configuration.

use rustc_hash::FxHashSet;

/// Reserved words recognized when no other list is configured.
pub const DEFAULT_KEYWORDS: &[&str] = &[
    "int", "float", "if", "else", "while", "return", "true", "false", "null", "for", "switch",
    "case", "break", "continue", "void", "double", "char", "do", "sizeof",
];

/// Longest decoded string literal accepted by default, in characters.
pub const DEFAULT_MAX_STRING_LEN: usize = 100;

/// A closed, case-sensitive set of reserved words.
///
/// # Example
///
/// ```
/// use lexc_lex::KeywordSet;
///
/// let keywords = KeywordSet::default();
/// assert!(keywords.contains("sizeof"));
/// assert!(!keywords.contains("Int"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeywordSet {
    words: FxHashSet<String>,
}

impl KeywordSet {
    /// Builds a keyword set from any list of words. Order and duplicates
    /// do not matter.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `word` is exactly one of the reserved words.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct reserved words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing is reserved.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for KeywordSet {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

/// Settings for one scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexerConfig {
    /// Words classified as [`Category::Keyword`](crate::Category::Keyword).
    pub keywords: KeywordSet,

    /// Maximum decoded string literal length in characters.
    pub max_string_len: usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self {
            keywords: KeywordSet::default(),
            max_string_len: DEFAULT_MAX_STRING_LEN,
        }
    }
}
