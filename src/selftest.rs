// Built-in sanity checks for the two core functions.
//
// `ask` runs these before taking a question, so a broken build fails loudly
// instead of sending malformed prompts to the model.

use anyhow::Result;

use crate::prompt::build_prompt;
use crate::topics::extract_topic;

/// Run every check, stopping at the first failure.
pub fn run() -> Result<()> {
    let result = extract_topic("What is Python?");
    check("extract_topic", Some("Python"), result.as_deref())?;

    let result = build_prompt("Is it raining?", "It is raining");
    check(
        "build_prompt",
        "Answer from context: Is it raining? Context: It is raining",
        result.as_str(),
    )?;

    Ok(())
}

fn check<T: PartialEq + std::fmt::Debug>(name: &str, expected: T, got: T) -> Result<()> {
    if expected != got {
        anyhow::bail!("Test failed for {name}.\nExpected: {expected:?}\nGot:      {got:?}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selftest_passes() {
        assert!(run().is_ok());
    }

    #[test]
    fn test_check_reports_mismatch() {
        let err = check("extract_topic", Some("Python"), None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("extract_topic"));
        assert!(msg.contains("Expected: Some(\"Python\")"));
        assert!(msg.contains("Got:      None"));
    }
}
