use async_trait::async_trait;
use serde_json::json;

use super::ChatModel;
use crate::config::LlmConfig;
use crate::error::{Result, WolfcheckError};

const GROQ_ENDPOINT: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Groq chat-completions provider (OpenAI-compatible API).
pub struct GroqClient {
    config: LlmConfig,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: &LlmConfig) -> Self {
        Self {
            config: config.clone(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl ChatModel for GroqClient {
    async fn complete(&self, api_key: &str, system: &str, user: &str) -> Result<String> {
        let payload = json!({
            "model": self.config.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user }
            ],
            "temperature": self.config.temperature,
            "max_tokens": self.config.max_tokens,
            "response_format": { "type": "json_object" }
        });

        let response = self
            .client
            .post(GROQ_ENDPOINT)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|e| WolfcheckError::provider(self.provider_name(), e))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(WolfcheckError::provider(
                self.provider_name(),
                format!("{}: {}", status, error_text),
            ));
        }

        let response_data: serde_json::Value = response
            .json()
            .await
            .map_err(|e| WolfcheckError::provider(self.provider_name(), e))?;

        response_data["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                WolfcheckError::provider(self.provider_name(), "response carried no content")
            })
    }

    fn provider_name(&self) -> &str {
        "Groq API"
    }
}
