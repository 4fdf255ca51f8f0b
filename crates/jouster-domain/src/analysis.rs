//! Analysis results produced by the external analysis provider

/// Number of topics every analysis result carries.
pub const TOPIC_COUNT: usize = 3;

/// Summary used when the provider reply contained no JSON object at all.
pub const PLACEHOLDER_SUMMARY: &str = "Summary could not be generated";

/// Conventional sentiment labels.
///
/// The stored sentiment is a free-form string; this enum only names the
/// values the prompt asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    /// Positive tone
    Positive,
    /// Neutral tone (also the fallback)
    Neutral,
    /// Negative tone
    Negative,
}

impl Sentiment {
    /// Label as sent to and received from the provider
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
        }
    }

    /// Parse a conventional label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "positive" => Some(Sentiment::Positive),
            "neutral" => Some(Sentiment::Neutral),
            "negative" => Some(Sentiment::Negative),
            _ => None,
        }
    }
}

/// Structured analysis of one piece of text
///
/// `topics` is a fixed-size array, so the "exactly three topics" rule holds
/// for every value of this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// One or two sentence summary (may be a placeholder)
    pub summary: String,

    /// Optional title
    pub title: Option<String>,

    /// Main topics, padded with empty strings when the provider gave fewer
    pub topics: [String; TOPIC_COUNT],

    /// Sentiment label, usually one of [`Sentiment`]
    pub sentiment: String,
}

impl AnalysisResult {
    /// Build a result, forcing `topics` to exactly [`TOPIC_COUNT`] entries
    ///
    /// # Examples
    ///
    /// ```
    /// use jouster_domain::AnalysisResult;
    ///
    /// let result = AnalysisResult::new("short", None, vec!["rust".into()], "positive");
    /// assert_eq!(result.topics, ["rust".to_string(), String::new(), String::new()]);
    /// ```
    pub fn new(
        summary: impl Into<String>,
        title: Option<String>,
        topics: Vec<String>,
        sentiment: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            title,
            topics: normalize_topics(topics),
            sentiment: sentiment.into(),
        }
    }

    /// The degraded result returned when the provider reply held no JSON
    pub fn placeholder() -> Self {
        Self {
            summary: PLACEHOLDER_SUMMARY.to_string(),
            title: None,
            topics: ["topic1".to_string(), "topic2".to_string(), "topic3".to_string()],
            sentiment: Sentiment::Neutral.as_str().to_string(),
        }
    }

    /// Whether this is the degraded placeholder result
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder()
    }

    /// Sentiment parsed into the conventional label set, if it is one
    pub fn sentiment_label(&self) -> Option<Sentiment> {
        Sentiment::parse(&self.sentiment)
    }
}

/// Truncate or pad a topic list to exactly [`TOPIC_COUNT`] entries
///
/// Extra topics are dropped from the end; missing ones become empty strings.
pub fn normalize_topics(topics: Vec<String>) -> [String; TOPIC_COUNT] {
    let mut iter = topics.into_iter();
    std::array::from_fn(|_| iter.next().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_normalize_pads_short_lists() {
        let topics = normalize_topics(strings(&["a"]));
        assert_eq!(topics, ["a".to_string(), String::new(), String::new()]);
    }

    #[test]
    fn test_normalize_truncates_long_lists() {
        let topics = normalize_topics(strings(&["a", "b", "c", "d", "e"]));
        assert_eq!(topics, ["a".to_string(), "b".to_string(), "c".to_string()]);
    }

    #[test]
    fn test_normalize_empty() {
        let topics = normalize_topics(Vec::new());
        assert!(topics.iter().all(String::is_empty));
    }

    #[test]
    fn test_placeholder_shape() {
        let result = AnalysisResult::placeholder();
        assert_eq!(result.summary, PLACEHOLDER_SUMMARY);
        assert_eq!(result.title, None);
        assert_eq!(result.topics, ["topic1", "topic2", "topic3"].map(String::from));
        assert_eq!(result.sentiment_label(), Some(Sentiment::Neutral));
        assert!(result.is_placeholder());
    }

    #[test]
    fn test_sentiment_parse() {
        assert_eq!(Sentiment::parse("Positive"), Some(Sentiment::Positive));
        assert_eq!(Sentiment::parse(" negative "), Some(Sentiment::Negative));
        assert_eq!(Sentiment::parse("mixed"), None);
    }

    #[test]
    fn test_unconventional_sentiment_is_kept() {
        let result = AnalysisResult::new("s", None, vec![], "mixed");
        assert_eq!(result.sentiment, "mixed");
        assert_eq!(result.sentiment_label(), None);
    }

    proptest! {
        #[test]
        fn prop_normalize_keeps_prefix(topics in proptest::collection::vec(".*", 0..10)) {
            let normalized = normalize_topics(topics.clone());
            for (i, topic) in normalized.iter().enumerate() {
                match topics.get(i) {
                    Some(original) => prop_assert_eq!(topic, original),
                    None => prop_assert!(topic.is_empty()),
                }
            }
        }
    }
}
