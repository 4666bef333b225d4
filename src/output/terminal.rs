// Colored terminal output for answers, topics and prompts.
//
// Answers go to stdout. Everything decorative is dimmed so the answer
// itself stands out, and logs stay on stderr via tracing.

use colored::Colorize;

use crate::pipeline::{PreparedPrompt, RagAnswer};

/// How much retrieved context to echo back with `--show-context`.
const CONTEXT_PREVIEW_CHARS: usize = 400;

/// Display the topic line shared by every command.
pub fn display_topic(topic: Option<&str>) {
    match topic {
        Some(topic) => println!("{} {}", "Topic:".dimmed(), topic.bold()),
        None => println!("{} {}", "Topic:".dimmed(), "(no topic)".yellow()),
    }
}

/// Display retrieved context, or a note that there was none.
pub fn display_context(context: Option<&str>) {
    match context {
        Some(text) => {
            println!("{}", "Context:".dimmed());
            println!("  {}", super::truncate_chars(text, CONTEXT_PREVIEW_CHARS).dimmed());
        }
        None => println!("{} {}", "Context:".dimmed(), "(none found)".yellow()),
    }
}

/// Display a prepared prompt for `--dry-run`.
pub fn display_prepared(prepared: &PreparedPrompt) {
    display_topic(prepared.topic.as_deref());
    display_context(prepared.context.as_deref());
    println!("\n{}", "=== Prompt ===".bold());
    println!("{}", prepared.prompt);
}

/// Display a finished answer.
pub fn display_answer(answer: &RagAnswer, show_context: bool) {
    display_topic(answer.topic.as_deref());
    if show_context {
        display_context(answer.context.as_deref());
    } else if answer.context.is_none() {
        println!(
            "{}",
            "No Wikipedia context found, answering from the model alone.".yellow()
        );
    }

    println!("\n{}", "=== Answer ===".bold());
    println!("{}", answer.response);
}
