// Capitalized-word topic extraction.
//
// Questions usually open with a capitalized interrogative ("Who", "How",
// "What"), so the subject tends to be the *next* capitalized word:
// "Who created Python?" -> "Python". The sentence-initial word is counted
// like any other capitalized word; interrogatives get no special treatment.
// A lowercase opener therefore shifts the count: "who created Python?" has
// only one capitalized word and yields no topic.

use tracing::debug;

use super::traits::TopicExtractor;

/// Returns the Nth capitalized whitespace token of a question.
///
/// Multi-word proper nouns are not joined: "Where is New York?" yields
/// "New", not "New York".
#[derive(Debug, Clone)]
pub struct CapitalizedWordExtractor {
    /// 1-based rank of the capitalized word to return (0 never matches)
    pub position: usize,
}

impl Default for CapitalizedWordExtractor {
    fn default() -> Self {
        Self { position: 2 }
    }
}

impl TopicExtractor for CapitalizedWordExtractor {
    fn extract(&self, question: &str) -> Option<String> {
        if self.position == 0 {
            return None;
        }

        let topic = question
            .split_whitespace()
            .filter(|token| is_capitalized(token))
            .nth(self.position - 1)
            .map(strip_trailing_punctuation)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        debug!(question = question, topic = ?topic, "Extracted topic");
        topic
    }
}

/// Get the topic of a question: its second capitalized word, without
/// trailing punctuation.
///
/// ```
/// use wikirag::topics::extract_topic;
///
/// assert_eq!(extract_topic("Who created Python?").as_deref(), Some("Python"));
/// assert_eq!(extract_topic("hello world"), None);
/// ```
pub fn extract_topic(question: &str) -> Option<String> {
    CapitalizedWordExtractor::default().extract(question)
}

fn is_capitalized(token: &str) -> bool {
    token.chars().next().is_some_and(char::is_uppercase)
}

fn strip_trailing_punctuation(token: &str) -> &str {
    token.trim_end_matches(|c: char| !c.is_alphanumeric())
}
