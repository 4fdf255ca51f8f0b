//! Keyword sets produced by local keyword extraction

/// Default number of keywords kept per text
pub const DEFAULT_TOP_N: usize = 3;

/// Ordered keywords, most frequent first
///
/// Ties keep the order in which the words first appeared in the text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet(Vec<String>);

impl KeywordSet {
    /// Wrap an already ranked keyword list
    pub fn new(keywords: Vec<String>) -> Self {
        Self(keywords)
    }

    /// Number of keywords
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keyword was found
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Keywords as a slice
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

impl From<Vec<String>> for KeywordSet {
    fn from(keywords: Vec<String>) -> Self {
        Self(keywords)
    }
}

impl<'a> IntoIterator for &'a KeywordSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
