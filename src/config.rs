use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::llm::ollama::{DEFAULT_MODEL, DEFAULT_OLLAMA_URL};
use crate::wiki::client::DEFAULT_WIKI_API_URL;

/// Default cap on how much Wikipedia text goes into a prompt.
pub const DEFAULT_MAX_CONTEXT_CHARS: usize = 2000;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// setting has a default, so a bare `wikirag ask` works against a local
/// Ollama install and English Wikipedia.
#[derive(Debug, Clone)]
pub struct Config {
    /// MediaWiki action API endpoint (defaults to English Wikipedia)
    pub wiki_api_url: String,
    /// Ollama server base URL
    pub ollama_url: String,
    /// Ollama model name to generate with
    pub model: String,
    /// Generation length limit passed to Ollama as `num_predict`
    pub max_tokens: Option<u32>,
    /// Retrieved context is truncated to this many characters
    pub max_context_chars: usize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Numeric settings that are present but unparseable are errors rather
    /// than silently falling back to defaults.
    pub fn load() -> Result<Self> {
        let max_tokens = match env::var("WIKIRAG_MAX_TOKENS") {
            Ok(raw) => Some(parse_env_number("WIKIRAG_MAX_TOKENS", &raw)?),
            Err(_) => None,
        };

        let max_context_chars = match env::var("WIKIRAG_MAX_CONTEXT_CHARS") {
            Ok(raw) => parse_env_number("WIKIRAG_MAX_CONTEXT_CHARS", &raw)?,
            Err(_) => DEFAULT_MAX_CONTEXT_CHARS,
        };

        Ok(Self {
            wiki_api_url: env::var("WIKIRAG_WIKI_API_URL")
                .unwrap_or_else(|_| DEFAULT_WIKI_API_URL.to_string()),
            ollama_url: env::var("WIKIRAG_OLLAMA_URL")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_URL.to_string()),
            model: env::var("WIKIRAG_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
            max_tokens,
            max_context_chars,
        })
    }

    /// Check that a model name is configured.
    /// Call this before any operation that invokes the language model.
    pub fn require_model(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            anyhow::bail!(
                "WIKIRAG_MODEL is empty. Set it to an Ollama model name in your .env file\n\
                 (for example WIKIRAG_MODEL=llama3.2), or unset it to use the default."
            );
        }
        Ok(())
    }
}

/// Parse a numeric environment value, naming the variable on failure.
fn parse_env_number<T>(name: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{name} is not a number: {raw:?}"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wiki_api_url: DEFAULT_WIKI_API_URL.to_string(),
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: None,
            max_context_chars: DEFAULT_MAX_CONTEXT_CHARS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_usable() {
        let config = Config::default();
        assert!(config.require_model().is_ok());
        assert_eq!(config.max_context_chars, DEFAULT_MAX_CONTEXT_CHARS);
        assert!(config.max_tokens.is_none());
    }

    #[test]
    fn test_require_model_rejects_blank() {
        let config = Config {
            model: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.require_model().is_err());
    }

    #[test]
    fn test_parse_env_number_accepts_padded_digits() {
        let tokens: u32 = parse_env_number("WIKIRAG_MAX_TOKENS", " 256\n").unwrap();
        assert_eq!(tokens, 256);
        let chars: usize = parse_env_number("WIKIRAG_MAX_CONTEXT_CHARS", "2000").unwrap();
        assert_eq!(chars, 2000);
    }

    #[test]
    fn test_parse_env_number_rejects_garbage() {
        let err = parse_env_number::<usize>("WIKIRAG_MAX_CONTEXT_CHARS", "lots").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("WIKIRAG_MAX_CONTEXT_CHARS"));
        assert!(msg.contains("\"lots\""));
    }

    #[test]
    fn test_parse_env_number_rejects_negative_and_empty() {
        assert!(parse_env_number::<u32>("WIKIRAG_MAX_TOKENS", "-5").is_err());
        assert!(parse_env_number::<u32>("WIKIRAG_MAX_TOKENS", "").is_err());
        assert!(parse_env_number::<u32>("WIKIRAG_MAX_TOKENS", "99999999999").is_err());
    }
}
