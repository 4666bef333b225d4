// Topic extractor trait: swap-ready abstraction.
//
// The capitalized-word heuristic is fragile, so callers only ever see this
// trait. A smarter extractor (keyword ranking, NER) can replace it without
// touching the pipeline.

/// Trait for pulling a single topic out of a natural-language question.
pub trait TopicExtractor: Send + Sync {
    /// Return the topic of `question`, or `None` if no topic is found.
    ///
    /// Must be pure: the same question always yields the same topic.
    fn extract(&self, question: &str) -> Option<String>;
}
