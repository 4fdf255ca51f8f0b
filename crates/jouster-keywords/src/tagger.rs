//! Part-of-speech tagging
//!
//! Tagging is a seam: anything implementing [`PosTagger`] can be plugged into
//! the [`KeywordExtractor`](crate::KeywordExtractor). The default
//! [`LexiconTagger`] is a small rule-based tagger that backs off to
//! [`PartOfSpeech::Noun`] for words it does not recognize.

use crate::tokenizer::{is_clitic, is_negation};
use std::collections::HashSet;
use std::sync::LazyLock;

/// Coarse part-of-speech classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Common or proper noun, singular or plural
    Noun,
    /// Any verb form
    Verb,
    /// Adjective
    Adjective,
    /// Adverb
    Adverb,
    /// Cardinal number or numeric token
    Number,
    /// Anything else (symbols, single letters, clitics)
    Other,
}

impl PartOfSpeech {
    /// Whether this is any noun variant
    pub fn is_noun(&self) -> bool {
        matches!(self, PartOfSpeech::Noun)
    }
}

/// Assigns a part of speech to each token of a sequence
///
/// Implementations must return exactly one tag per input token, in order.
/// Tokens are lower-case and already stripped of stop-words and punctuation.
/// Clitics such as `'re` and `n't` arrive as separate tokens right after
/// their host word.
pub trait PosTagger: Send + Sync {
    /// Tag a token sequence
    fn tag(&self, tokens: &[&str]) -> Vec<PartOfSpeech>;
}

/// Rule-based tagger using word lists and suffix heuristics
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    /// Create a new tagger
    pub fn new() -> Self {
        Self
    }

    fn tag_word(&self, word: &str, previous: Option<PartOfSpeech>, next: Option<&str>) -> PartOfSpeech {
        if is_clitic(word) {
            return PartOfSpeech::Other;
        }
        // "ca n't", "wo n't": only auxiliaries take the negation clitic
        if next.is_some_and(is_negation) {
            return PartOfSpeech::Verb;
        }
        if !word.chars().any(char::is_alphabetic) {
            return if word.chars().any(|c| c.is_ascii_digit()) {
                PartOfSpeech::Number
            } else {
                PartOfSpeech::Other
            };
        }
        if word.chars().count() == 1 {
            return PartOfSpeech::Other;
        }
        if NOUNS.contains(word) {
            return PartOfSpeech::Noun;
        }
        if NUMERALS.contains(word) {
            return PartOfSpeech::Number;
        }
        if ADVERBS.contains(word) || (word.len() > 4 && word.ends_with("ly")) {
            return PartOfSpeech::Adverb;
        }
        if ADJECTIVES.contains(word) || has_adjective_suffix(word) {
            return PartOfSpeech::Adjective;
        }
        if VERB_FORMS.contains(word) || is_inflected_verb(word) {
            return PartOfSpeech::Verb;
        }
        // "fox jumps": an -s form of a known verb right after a noun is a verb
        if previous == Some(PartOfSpeech::Noun) && is_third_person_verb(word) {
            return PartOfSpeech::Verb;
        }
        PartOfSpeech::Noun
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[&str]) -> Vec<PartOfSpeech> {
        let mut tags = Vec::with_capacity(tokens.len());
        let mut previous = None;
        for (i, token) in tokens.iter().enumerate() {
            let next = tokens.get(i + 1).copied();
            let tag = self.tag_word(token, previous, next);
            tags.push(tag);
            previous = Some(tag);
        }
        tags
    }
}

fn has_adjective_suffix(word: &str) -> bool {
    const SUFFIXES: &[&str] = &["ous", "ful", "less", "able", "ible"];
    word.len() > 5 && SUFFIXES.iter().any(|suffix| word.ends_with(suffix))
}

fn is_inflected_verb(word: &str) -> bool {
    (word.len() >= 6 && word.ends_with("ing")) || (word.len() >= 5 && word.ends_with("ed"))
}

fn is_third_person_verb(word: &str) -> bool {
    if word.ends_with("ss") {
        return false;
    }
    let candidates = [
        word.strip_suffix("ies").map(|stem| format!("{stem}y")),
        word.strip_suffix("es").map(str::to_string),
        word.strip_suffix('s').map(str::to_string),
    ];
    candidates
        .into_iter()
        .flatten()
        .any(|stem| VERB_STEMS.contains(stem.as_str()))
}

fn word_set(words: &'static [&'static str]) -> HashSet<&'static str> {
    words.iter().copied().collect()
}

/// Nouns that the suffix rules would otherwise misclassify
static NOUNS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "family", "supply", "reply", "ally", "rally", "belly", "jelly", "italy", "july", "assembly",
        "anomaly", "butterfly", "monopoly", "melody", "morning", "evening", "building", "meeting",
        "wedding", "ceiling", "thing", "things", "king", "ring", "spring", "string", "nothing",
        "something", "anything", "everything", "bed", "shed", "seed", "speed", "feed", "need",
        "creed", "greed", "sled", "vegetable", "variable", "cable", "fable", "bible", "painting",
        "training", "funding", "housing", "clothing", "pudding", "sibling", "darling", "duckling",
        "seedling", "bedding", "offspring",
    ])
});

static NUMERALS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten", "eleven",
        "twelve", "twenty", "thirty", "forty", "fifty", "hundred", "thousand", "million",
        "billion", "first", "second", "third",
    ])
});

static ADVERBS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "also", "always", "never", "often", "sometimes", "soon", "already", "yet", "still",
        "even", "ever", "almost", "quite", "rather", "perhaps", "maybe", "however", "therefore",
        "thus", "instead", "together", "away", "back", "forward", "later", "today", "tomorrow",
        "yesterday", "tonight", "else", "anyway", "indeed", "much", "many", "well", "fast",
        "hard", "far", "near", "ago", "across", "along", "around", "behind", "beyond", "within",
        "without", "upon", "toward", "towards", "among", "via", "per", "whether", "although",
        "though", "unless", "since", "whereas", "every", "another", "several", "either", "neither",
    ])
});

static ADJECTIVES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "quick", "slow", "lazy", "brown", "red", "green", "blue", "yellow", "black", "white",
        "gray", "grey", "orange", "purple", "pink", "dark", "light", "bright", "big", "small",
        "large", "little", "tiny", "huge", "great", "good", "bad", "better", "best", "worse",
        "worst", "new", "old", "young", "long", "short", "tall", "high", "low", "deep", "wide",
        "narrow", "hot", "cold", "warm", "cool", "happy", "sad", "angry", "calm", "easy",
        "difficult", "simple", "complex", "important", "major", "minor", "main", "key", "full",
        "empty", "rich", "poor", "strong", "weak", "free", "open", "close", "true", "false",
        "real", "certain", "clear", "different", "similar", "same", "whole", "entire", "common",
        "general", "special", "specific", "public", "private", "local", "global", "national",
        "international", "social", "political", "economic", "financial", "environmental",
        "human", "natural", "recent", "current", "future", "past", "modern", "ancient", "early",
        "late", "final", "last", "next", "previous", "likely", "able", "ready", "sure", "nice",
        "beautiful", "ugly", "fine", "excellent", "terrible", "awful", "positive", "negative",
        "neutral", "significant", "serious", "quiet", "loud", "safe", "dangerous", "fair",
        "wrong", "right", "correct", "proper", "primary", "basic", "fundamental", "critical",
        "essential", "digital", "technical", "scientific", "medical", "legal", "artificial",
        "several", "various", "own", "other", "such", "possible", "impossible", "available",
        "popular", "successful", "effective", "efficient", "innovative", "sustainable", "renewable",
    ])
});

/// Verb forms that are rarely used as nouns
static VERB_FORMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "become", "becomes", "became", "seem", "seems", "seemed", "include", "includes",
        "provide", "provides", "allow", "allows", "happen", "happens", "believe", "believes",
        "remain", "remains", "consider", "considers", "appear", "appears", "suggest", "suggests",
        "require", "requires", "explain", "explains", "develop", "develops", "create", "creates",
        "improve", "improves", "ensure", "ensures", "get", "gets", "got", "gotten", "give",
        "gives", "gave", "given", "done", "go", "goes", "went", "gone", "make", "makes", "made", "take",
        "takes", "took", "taken", "come", "comes", "came", "see", "sees", "saw", "seen", "know",
        "knows", "knew", "known", "think", "thinks", "thought", "say", "says", "said", "tell",
        "tells", "told", "find", "finds", "found", "keep", "keeps", "kept", "let", "lets",
        "begin", "begins", "began", "begun", "bring", "brings", "brought", "write", "writes",
        "wrote", "written", "sit", "sat", "stand", "stood", "lose", "loses", "lost", "pay",
        "paid", "meet", "met", "lead", "led", "understand", "understands", "understood", "speak",
        "spoke", "spoken", "grow", "grows", "grew", "grown", "win", "wins", "won", "buy", "buys",
        "bought", "send", "sends", "sent", "build", "builds", "built", "fall", "fell", "fallen",
        "feel", "feels", "felt", "leave", "leaves", "left", "hold", "holds", "held", "mean",
        "means", "meant", "put", "puts", "run", "ran", "choose", "chose", "chosen",
        "drive", "drove", "driven", "eat", "ate", "eaten", "forget", "forgot", "forgotten",
        "hear", "heard", "hide", "hid", "hidden", "rise", "rose", "risen", "sell", "sold",
        "shake", "shook", "sing", "sang", "sung", "sleep", "slept", "steal", "stole", "stolen",
        "teach", "taught", "throw", "threw", "thrown", "wear", "wore", "worn", "want", "wants",
        "try", "tries", "tried", "ask", "asks", "asked", "must", "could", "would", "might",
        "shall", "may", "cannot",
    ])
});

/// Base forms used by the contextual third-person rule
static VERB_STEMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    word_set(&[
        "jump", "run", "walk", "talk", "play", "work", "move", "live", "help", "show", "turn",
        "start", "stop", "look", "call", "need", "use", "change", "open", "close", "follow",
        "reach", "add", "grow", "offer", "serve", "die", "kill", "hit", "cut", "fly", "cry",
        "carry", "study", "apply", "reply", "rely", "vary", "deny", "supply", "love", "like",
        "hate", "hope", "wish", "watch", "catch", "touch", "push", "pull", "climb", "swim",
        "bark", "chase", "sleep", "eat", "drink", "sing", "dance", "read", "write", "learn",
        "teach", "report", "claim", "state", "argue", "predict", "affect", "boost", "reduce",
        "increase", "decrease", "rise", "fall", "drop", "gain", "lose", "win", "hold", "plan",
        "announce", "launch", "release", "support", "warn", "expect", "face", "seek", "aim",
        "struggle", "thrive", "remain", "continue", "describe", "discuss", "focus", "explore",
        "examine", "highlight", "cover", "address", "threaten", "damage", "protect", "build",
        "own", "sit", "stand", "lie", "lay", "set", "pass", "fill", "fail", "pay", "buy",
    ])
});
