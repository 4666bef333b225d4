// Context source trait: where background text for a topic comes from.

use anyhow::Result;
use async_trait::async_trait;

/// Trait for fetching free-text context about a topic. Implementations are
/// async because most sources sit behind an HTTP API.
#[async_trait]
pub trait ContextSource: Send + Sync {
    /// Fetch context for `topic`. `Ok(None)` means the source has nothing
    /// on this topic; `Err` means the source itself failed.
    async fn fetch_context(&self, topic: &str) -> Result<Option<String>>;
}

/// Source that never has anything to say. Used with `--no-context`.
pub struct NoContext;

#[async_trait]
impl ContextSource for NoContext {
    async fn fetch_context(&self, _topic: &str) -> Result<Option<String>> {
        Ok(None)
    }
}
