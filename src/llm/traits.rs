// Language model trait: the swap-ready abstraction for text generation.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for generating a completion from a prompt. Implementations must be
/// async because every backend we care about is an HTTP API.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Generate a response to `prompt`.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Human-readable model name for display.
    fn name(&self) -> &str;
}
