//! Ollama backend for locally hosted models.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::LanguageModel;
use crate::error::LlmError;

#[derive(Clone)]
pub struct OllamaModel {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

impl OllamaModel {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: "http://localhost:11434".to_string(),
            model: "llama3".to_string(),
        }
    }

    /// Point at a non-default Ollama server.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model tag (default: llama3).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for OllamaModel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LanguageModel for OllamaModel {
    async fn generate(&self, system: &str, user: &str) -> Result<String, LlmError> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user.to_string(),
                },
            ],
            stream: false,
        };

        tracing::debug!(model = %self.model, base_url = %self.base_url, "calling Ollama");

        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| LlmError::Http(Box::new(e)))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Provider { status, body });
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::Http(Box::new(e)))?;

        Ok(chat_response.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[ignore] // Requires a running Ollama server
    async fn test_generate() {
        let model = OllamaModel::new();
        let reply = model
            .generate(
                "You are a helpful assistant.",
                "Say 'Hello, World!' and nothing else.",
            )
            .await
            .expect("completion should succeed");

        assert!(!reply.is_empty());
    }
}
