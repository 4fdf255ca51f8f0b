//! Word tokenization

use regex::Regex;
use std::sync::LazyLock;

/// Letter/digit runs, allowing internal apostrophes and hyphens ("we're", "state-of-the-art").
static WORD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\p{L}\p{N}]+(?:['’\-][\p{L}\p{N}]+)*").expect("word pattern is valid")
});

/// Clitics split off the end of a word, as in Penn-Treebank tokenization
const CLITICS: &[&str] = &[
    "n't", "n’t", "'m", "’m", "'re", "’re", "'ve", "’ve", "'d", "’d", "'ll", "’ll",
];

/// Split text into word tokens
///
/// Punctuation never produces a token. A trailing possessive `'s` is split
/// off and discarded, so "dog's" yields "dog". Other clitics become tokens
/// of their own: "we're" yields "we" and "'re", "can't" yields "ca" and "n't".
///
/// # Examples
///
/// ```
/// use jouster_keywords::tokenize;
///
/// assert_eq!(tokenize("The dog's bone, again!"), ["The", "dog", "bone", "again"]);
/// assert_eq!(tokenize("I'm sure"), ["I", "'m", "sure"]);
/// ```
pub fn tokenize(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for word in WORD.find_iter(text) {
        push_word(strip_possessive(word.as_str()), &mut tokens);
    }
    tokens
}

/// Whether `token` is a clitic produced by [`tokenize`]
pub(crate) fn is_clitic(token: &str) -> bool {
    CLITICS.iter().any(|clitic| token.eq_ignore_ascii_case(clitic))
}

/// Whether `token` is the negation clitic `n't`
pub(crate) fn is_negation(token: &str) -> bool {
    token.eq_ignore_ascii_case("n't") || token.eq_ignore_ascii_case("n’t")
}

fn push_word<'a>(word: &'a str, tokens: &mut Vec<&'a str>) {
    if word.is_empty() {
        return;
    }
    match split_clitic(word) {
        Some((stem, clitic)) => {
            // "i'd've" carries more than one
            push_word(stem, tokens);
            tokens.push(clitic);
        }
        None => tokens.push(word),
    }
}

fn split_clitic(word: &str) -> Option<(&str, &str)> {
    CLITICS.iter().find_map(|clitic| {
        let at = word.len().checked_sub(clitic.len())?;
        if at == 0 || !word.is_char_boundary(at) {
            return None;
        }
        word[at..].eq_ignore_ascii_case(clitic).then(|| word.split_at(at))
    })
}

fn strip_possessive(token: &str) -> &str {
    token
        .strip_suffix("'s")
        .or_else(|| token.strip_suffix("’s"))
        .unwrap_or(token)
}
