use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use std::env;

/// LLM backend selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    OpenAi,
    Ollama,
}

impl LlmProvider {
    /// Parse a provider name, case-insensitively.
    pub fn parse(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "openai" => Ok(Self::OpenAi),
            "ollama" => Ok(Self::Ollama),
            other => bail!("Unsupported LLM provider: {}", other),
        }
    }
}

/// Application configuration loaded from environment variables.
///
/// Built once at startup and passed by reference; nothing reads the
/// environment after this.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub tavily_api_key: String,
    pub llm_provider: LlmProvider,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: String,
    pub ollama_base_url: String,
    pub ollama_model: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        let llm_provider = LlmProvider::parse(
            &env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
        )?;

        let openai_api_key = env::var("OPENAI_API_KEY").ok();
        if llm_provider == LlmProvider::OpenAi && openai_api_key.is_none() {
            bail!("OPENAI_API_KEY must be set when LLM_PROVIDER is openai");
        }

        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:reports.db?mode=rwc".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            tavily_api_key: env::var("TAVILY_API_KEY")
                .context("TAVILY_API_KEY must be set")?,
            llm_provider,
            openai_api_key,
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o".to_string()),
            openai_base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
            ollama_base_url: env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_parse_is_case_insensitive() {
        assert_eq!(LlmProvider::parse("openai").unwrap(), LlmProvider::OpenAi);
        assert_eq!(LlmProvider::parse("OpenAI").unwrap(), LlmProvider::OpenAi);
        assert_eq!(LlmProvider::parse("OLLAMA").unwrap(), LlmProvider::Ollama);
        assert!(LlmProvider::parse("claude").is_err());
    }
}
