//! LLM prompt for text analysis

/// Builds the analysis prompt for one text
pub struct PromptBuilder {
    text: String,
}

impl PromptBuilder {
    /// Create a new prompt builder
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Build the complete analysis prompt
    pub fn build(&self) -> String {
        let mut prompt = String::new();

        prompt.push_str(ANALYSIS_INSTRUCTIONS);
        prompt.push_str("\n\n");

        prompt.push_str("Text: ");
        prompt.push_str(&self.text);
        prompt.push_str("\n\n");

        prompt.push_str(OUTPUT_FORMAT);

        prompt
    }
}

const ANALYSIS_INSTRUCTIONS: &str = r#"Analyze the following text and provide:
1. A 1-2 sentence summary
2. A title (if relevant)
3. 3 main topics
4. Sentiment (positive, neutral, or negative)"#;

const OUTPUT_FORMAT: &str = r#"Respond in the following JSON format:
{
    "summary": "your summary here",
    "title": "your title here or null if not appropriate",
    "topics": ["topic1", "topic2", "topic3"],
    "sentiment": "positive/neutral/negative"
}"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_includes_text() {
        let prompt = PromptBuilder::new("Alice opened a bakery in Lisbon").build();
        assert!(prompt.contains("Text: Alice opened a bakery in Lisbon"));
    }

    #[test]
    fn test_prompt_includes_instructions_and_format() {
        let prompt = PromptBuilder::new("Test text").build();
        assert!(prompt.contains("A 1-2 sentence summary"));
        assert!(prompt.contains("3 main topics"));
        assert!(prompt.contains(r#""topics": ["topic1", "topic2", "topic3"]"#));
        assert!(prompt.contains(r#""sentiment": "positive/neutral/negative""#));
    }

    #[test]
    fn test_text_precedes_format() {
        let prompt = PromptBuilder::new("MARKER").build();
        let text_at = prompt.find("MARKER").unwrap();
        let format_at = prompt.find("Respond in the following JSON format").unwrap();
        assert!(text_at < format_at);
    }
}
