// Unit tests for topic extraction.
//
// Covers the documented question examples, the "fewer than two capitalized
// words" edge cases, punctuation stripping and the substring guarantee.

use wikirag::topics::{extract_topic, CapitalizedWordExtractor, TopicExtractor};

// ============================================================
// Documented examples
// ============================================================

#[test]
fn who_created_python() {
    assert_eq!(extract_topic("Who created Python?").as_deref(), Some("Python"));
}

#[test]
fn how_many_moons_does_saturn_have() {
    assert_eq!(
        extract_topic("How many moons does Saturn have?").as_deref(),
        Some("Saturn")
    );
}

#[test]
fn largest_city_in_germany() {
    assert_eq!(
        extract_topic("What is the largest city in Germany?").as_deref(),
        Some("Germany")
    );
}

#[test]
fn what_is_python() {
    assert_eq!(extract_topic("What is Python?").as_deref(), Some("Python"));
}

// ============================================================
// Absent topics
// ============================================================

#[test]
fn no_capitalized_words() {
    assert_eq!(extract_topic("hello world"), None);
}

#[test]
fn single_capitalized_word() {
    assert_eq!(extract_topic("Hello"), None);
    assert_eq!(extract_topic("Hello there, friend."), None);
}

#[test]
fn empty_and_whitespace_input() {
    assert_eq!(extract_topic(""), None);
    assert_eq!(extract_topic("   \t\n "), None);
}

#[test]
fn lowercase_opener_counts_from_first_capital() {
    // The sentence-initial word only counts when it is capitalized
    assert_eq!(extract_topic("who created Python?"), None);
    assert_eq!(
        extract_topic("so, did Guido create Python?").as_deref(),
        Some("Python")
    );
}

// ============================================================
// Token shape
// ============================================================

#[test]
fn multi_word_proper_noun_returns_first_word_only() {
    assert_eq!(extract_topic("Where is New York?").as_deref(), Some("New"));
}

#[test]
fn trailing_punctuation_stripped() {
    assert_eq!(extract_topic("Is it Rust?!").as_deref(), Some("Rust"));
    assert_eq!(extract_topic("Tell me about Mars.").as_deref(), Some("Mars"));
    assert_eq!(extract_topic("Compare Java, Go and C").as_deref(), Some("Java"));
}

#[test]
fn inner_punctuation_kept() {
    assert_eq!(
        extract_topic("What is Wi-Fi?").as_deref(),
        Some("Wi-Fi")
    );
    assert_eq!(
        extract_topic("Who founded McDonald's?").as_deref(),
        Some("McDonald's")
    );
}

#[test]
fn non_ascii_capitals_count() {
    assert_eq!(
        extract_topic("Where is Ölüdeniz located?").as_deref(),
        Some("Ölüdeniz")
    );
}

#[test]
fn extra_whitespace_is_ignored() {
    assert_eq!(
        extract_topic("  Who   created\tPython? ").as_deref(),
        Some("Python")
    );
}

// ============================================================
// Invariants
// ============================================================

#[test]
fn topic_is_substring_of_question() {
    let questions = [
        "Who created Python?",
        "How many moons does Saturn have?",
        "What is the largest city in Germany?",
        "Where is New York?",
        "Why is Café Sacher famous...",
    ];
    for question in questions {
        let topic = extract_topic(question).unwrap();
        assert!(
            question.contains(&topic),
            "{topic:?} not found in {question:?}"
        );
    }
}

#[test]
fn extraction_is_deterministic() {
    let question = "How many moons does Saturn have?";
    assert_eq!(extract_topic(question), extract_topic(question));
}

#[test]
fn trait_object_matches_free_function() {
    let extractor: Box<dyn TopicExtractor> = Box::new(CapitalizedWordExtractor::default());
    for question in ["Who created Python?", "hello world", "Hello", ""] {
        assert_eq!(extractor.extract(question), extract_topic(question));
    }
}
