use crate::config::ClassifierConfig;
use crate::providers::{AnthropicProvider, LlmProvider, OpenAIProvider};
use std::error::Error;
use std::sync::Arc;
use std::time::Duration;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create the classifier's provider from configuration
    pub fn create(
        config: &ClassifierConfig,
        timeout: Duration,
    ) -> Result<Arc<dyn LlmProvider>, Box<dyn Error + Send + Sync>> {
        match config.provider.as_str() {
            "openai" => Ok(Arc::new(OpenAIProvider::new(config, timeout)?)),
            "anthropic" => Ok(Arc::new(AnthropicProvider::new(config, timeout)?)),
            other => Err(format!(
                "Unknown provider: {} (available: {})",
                other,
                Self::available_providers().join(", ")
            )
            .into()),
        }
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["openai", "anthropic"]
    }
}
