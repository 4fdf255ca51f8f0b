//! Jouster Keyword Extraction
//!
//! Local, dependency-light keyword statistics: the most frequent nouns of a
//! text, ranked by count.
//!
//! # Pipeline
//!
//! ```text
//! text → lowercase → tokenize → drop stop-words → POS-tag → keep nouns → count → top N
//! ```
//!
//! Part-of-speech tagging sits behind the [`PosTagger`] trait. The bundled
//! [`LexiconTagger`] uses closed-class word lists, suffix rules and one
//! contextual rule, backing off to "noun" for unknown words.
//!
//! # Examples
//!
//! ```
//! use jouster_keywords::extract_keywords;
//!
//! let keywords = extract_keywords("The quick brown fox jumps over the lazy dog", 3);
//! assert_eq!(keywords.as_slice(), ["fox", "dog"]);
//! ```

#![warn(missing_docs)]

mod config;
mod extractor;
mod stopwords;
mod tagger;
mod tokenizer;

pub use config::KeywordConfig;
pub use extractor::{extract_keywords, KeywordExtractor};
pub use stopwords::is_stopword;
pub use tagger::{LexiconTagger, PartOfSpeech, PosTagger};
pub use tokenizer::tokenize;
