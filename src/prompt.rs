// RAG prompt formatting.
//
// The model sees one fixed layout: the question first, then whatever
// context was retrieved. Both parts are inserted verbatim.

/// Build the prompt handed to the language model.
///
/// The result is exactly `"Answer from context: {question} Context: {context}"`.
/// Nothing is trimmed, escaped or re-cased, and empty inputs are allowed.
pub fn build_prompt(question: &str, context: &str) -> String {
    format!("Answer from context: {question} Context: {context}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docstring_example() {
        assert_eq!(
            build_prompt("Is it raining?", "It is raining"),
            "Answer from context: Is it raining? Context: It is raining"
        );
    }

    #[test]
    fn test_empty_inputs_pass_through() {
        assert_eq!(build_prompt("", ""), "Answer from context:  Context: ");
        assert_eq!(
            build_prompt("Why?", ""),
            "Answer from context: Why? Context: "
        );
    }
}
