// Ollama implementation of LanguageModel.
//
// Uses the non-streaming `/api/generate` endpoint: one POST, one JSON body
// back with the whole completion in `response`.
//
// API docs: https://github.com/ollama/ollama/blob/main/docs/api.md

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::LanguageModel;

/// Default Ollama server address.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Model used when WIKIRAG_MODEL is not set.
pub const DEFAULT_MODEL: &str = "llama3.2";

/// Ollama text generation client.
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: Option<u32>,
}

impl OllamaClient {
    /// Create a new client for `model` on the Ollama server at `base_url`.
    pub fn new(base_url: &str, model: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            max_tokens: None,
        }
    }

    /// Cap the number of generated tokens.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Build the request body for `prompt`.
    pub fn request_for<'a>(&'a self, prompt: &'a str) -> GenerateRequest<'a> {
        GenerateRequest {
            model: &self.model,
            prompt,
            stream: false,
            options: self.max_tokens.map(|num_predict| GenerateOptions { num_predict }),
        }
    }
}

#[async_trait]
impl LanguageModel for OllamaClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/api/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&self.request_for(prompt))
            .send()
            .await
            .with_context(|| format!("Failed to reach Ollama at {}", self.base_url))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Ollama returned {}: {}", status, body);
        }

        let result: GenerateResponse = response
            .json()
            .await
            .context("Failed to parse Ollama response")?;

        debug!(
            model = %result.model,
            done = result.done,
            prompt_tokens = ?result.prompt_eval_count,
            completion_tokens = ?result.eval_count,
            "Generated response"
        );

        Ok(result.response.trim().to_string())
    }

    fn name(&self) -> &str {
        &self.model
    }
}

// --- Ollama API request/response types ---

#[derive(Debug, Serialize)]
pub struct GenerateRequest<'a> {
    pub model: &'a str,
    pub prompt: &'a str,
    pub stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<GenerateOptions>,
}

#[derive(Debug, Serialize)]
pub struct GenerateOptions {
    pub num_predict: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateResponse {
    pub model: String,
    pub response: String,
    #[serde(default)]
    pub done: bool,
    pub prompt_eval_count: Option<u64>,
    pub eval_count: Option<u64>,
}
