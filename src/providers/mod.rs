mod anthropic;
mod factory;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_classifier_message, INTENT_CLASSIFIER_PROMPT};

use async_trait::async_trait;
use std::error::Error;

/// Unified trait for all text-generation providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai", "anthropic")
    fn provider_name(&self) -> &str;

    /// Run a single chat completion and return the assistant's text
    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<String, Box<dyn Error + Send + Sync>>;
}
