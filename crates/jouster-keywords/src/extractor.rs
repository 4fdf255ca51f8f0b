//! Noun-frequency keyword extraction

use crate::stopwords::is_stopword;
use crate::tagger::{LexiconTagger, PosTagger};
use crate::tokenizer::{is_clitic, tokenize};
use jouster_domain::KeywordSet;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Extracts the most frequent nouns of a text
#[derive(Clone)]
pub struct KeywordExtractor {
    tagger: Arc<dyn PosTagger>,
}

impl KeywordExtractor {
    /// Create an extractor using the default [`LexiconTagger`]
    pub fn new() -> Self {
        Self::with_tagger(LexiconTagger::new())
    }

    /// Create an extractor with a custom part-of-speech tagger
    pub fn with_tagger(tagger: impl PosTagger + 'static) -> Self {
        Self {
            tagger: Arc::new(tagger),
        }
    }

    /// Return up to `top_n` nouns ranked by frequency
    ///
    /// Ties keep first-occurrence order. Texts with fewer distinct nouns
    /// return fewer keywords; there is no padding.
    pub fn extract(&self, text: &str, top_n: usize) -> KeywordSet {
        if top_n == 0 {
            return KeywordSet::default();
        }

        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = tokenize(&lowered)
            .into_iter()
            .filter(|token| !is_stopword(token))
            .collect();

        let tags = self.tagger.tag(&tokens);
        let nouns = tokens
            .iter()
            .zip(tags)
            .filter(|(token, tag)| tag.is_noun() && !is_clitic(token))
            .map(|(token, _)| *token);

        let ranked = rank_by_frequency(nouns, top_n);
        debug!(
            "Extracted {} keywords from {} filtered tokens",
            ranked.len(),
            tokens.len()
        );
        KeywordSet::new(ranked)
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for KeywordExtractor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordExtractor").finish_non_exhaustive()
    }
}

/// Count words, then keep the `top_n` most frequent in first-seen order on ties
fn rank_by_frequency<'a>(words: impl Iterator<Item = &'a str>, top_n: usize) -> Vec<String> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in words {
        match index.get(word) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word, 1));
            }
        }
    }

    // Stable sort keeps first-occurrence order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
        .into_iter()
        .take(top_n)
        .map(|(word, _)| word.to_string())
        .collect()
}

/// Extract keywords with the default tagger
pub fn extract_keywords(text: &str, top_n: usize) -> KeywordSet {
    KeywordExtractor::new().extract(text, top_n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::PartOfSpeech;

    #[test]
    fn test_rank_by_frequency_ties_keep_first_occurrence() {
        let words = ["b", "a", "c", "a", "b", "d"].into_iter();
        assert_eq!(rank_by_frequency(words, 3), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rank_by_frequency_fewer_than_top_n() {
        let words = ["x", "x"].into_iter();
        assert_eq!(rank_by_frequency(words, 3), vec!["x"]);
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_keywords("", 3).is_empty());
        assert!(extract_keywords("   \n\t", 3).is_empty());
    }

    #[test]
    fn test_zero_top_n() {
        assert!(extract_keywords("dogs and cats and dogs", 0).is_empty());
    }

    #[test]
    fn test_frequency_ranking() {
        let text = "The server logs errors. The server restarts. Errors fill the logs and the server.";
        let keywords = extract_keywords(text, 2);
        assert_eq!(keywords.as_slice(), ["server", "logs"]);
    }

    #[test]
    fn test_lowercases_before_counting() {
        let keywords = extract_keywords("Rust rust RUST compiler", 3);
        assert_eq!(keywords.as_slice(), ["rust", "compiler"]);
    }

    struct EverythingIsANoun;

    impl PosTagger for EverythingIsANoun {
        fn tag(&self, tokens: &[&str]) -> Vec<PartOfSpeech> {
            vec![PartOfSpeech::Noun; tokens.len()]
        }
    }

    #[test]
    fn test_custom_tagger() {
        let extractor = KeywordExtractor::with_tagger(EverythingIsANoun);
        let keywords = extractor.extract("quick quick brown", 3);
        assert_eq!(keywords.as_slice(), ["quick", "brown"]);
    }

    #[test]
    fn test_stopwords_never_reach_tagger() {
        let extractor = KeywordExtractor::with_tagger(EverythingIsANoun);
        let keywords = extractor.extract("the and of is", 3);
        assert!(keywords.is_empty());
    }
}
