// Retrieval-augmented answering for a single question.
//
// 1. Extract a topic from the question
// 2. If there is one, fetch context for it
// 3. Format the fixed RAG prompt (empty context when nothing was found)
// 4. Hand the prompt to the language model
//
// Retrieval failures degrade to "no context" so the user still gets an
// answer. Model failures propagate: without a model there is no answer.

use anyhow::Result;
use tracing::{info, warn};

use crate::llm::traits::LanguageModel;
use crate::output::truncate_chars;
use crate::prompt::build_prompt;
use crate::topics::traits::TopicExtractor;
use crate::wiki::traits::ContextSource;

/// Everything that goes into the model, before the model is called.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedPrompt {
    pub topic: Option<String>,
    pub context: Option<String>,
    pub prompt: String,
}

/// The record of one answered question.
#[derive(Debug, Clone, PartialEq)]
pub struct RagAnswer {
    pub question: String,
    pub topic: Option<String>,
    pub context: Option<String>,
    pub prompt: String,
    pub response: String,
}

/// Run steps 1-3: topic, context and prompt, without calling a model.
///
/// Context longer than `max_context_chars` is truncated on a character
/// boundary before it is placed in the prompt.
pub async fn prepare(
    question: &str,
    extractor: &dyn TopicExtractor,
    source: &dyn ContextSource,
    max_context_chars: usize,
) -> PreparedPrompt {
    let topic = extractor.extract(question);

    let context = match &topic {
        Some(topic) => match source.fetch_context(topic).await {
            Ok(context) => context.map(|text| truncate_chars(&text, max_context_chars)),
            Err(e) => {
                warn!(topic = %topic, error = %e, "Context retrieval failed, answering without it");
                None
            }
        },
        None => {
            info!("No topic found, skipping context retrieval");
            None
        }
    };

    let prompt = build_prompt(question, context.as_deref().unwrap_or(""));

    PreparedPrompt {
        topic,
        context,
        prompt,
    }
}

/// Answer `question` end to end.
pub async fn run(
    question: &str,
    extractor: &dyn TopicExtractor,
    source: &dyn ContextSource,
    model: &dyn LanguageModel,
    max_context_chars: usize,
) -> Result<RagAnswer> {
    let PreparedPrompt {
        topic,
        context,
        prompt,
    } = prepare(question, extractor, source, max_context_chars).await;

    info!(
        topic = ?topic,
        has_context = context.is_some(),
        model = model.name(),
        "Generating answer"
    );

    let response = model.generate(&prompt).await?;

    Ok(RagAnswer {
        question: question.to_string(),
        topic,
        context,
        prompt,
        response,
    })
}
