mod providers;

pub use providers::GroqClient;

use crate::error::Result;

/// A chat-completion backend. One request per `analyze` call: a system
/// instruction plus the constructed user prompt, JSON-object output
/// expected back.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Run one completion and return the raw response text.
    async fn complete(&self, api_key: &str, system: &str, user: &str) -> Result<String>;

    /// Provider name used in user-facing error strings (e.g. "Groq API").
    fn provider_name(&self) -> &str;
}
