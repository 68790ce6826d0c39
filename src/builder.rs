use std::sync::Arc;
use std::time::Duration;

use crate::config::AppConfig;
use crate::error::SearchError;
use crate::providers::{LlmProvider, ProviderFactory};
use crate::recipes::{RecipeProvider, SpoonacularClient};
use crate::RecipeSearch;

/// Text-generation backend used for intent classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifierBackend {
    OpenAI,
    Anthropic,
}

impl ClassifierBackend {
    /// Convert to provider name string used by the factory
    fn as_str(&self) -> &str {
        match self {
            ClassifierBackend::OpenAI => "openai",
            ClassifierBackend::Anthropic => "anthropic",
        }
    }
}

/// Builder for configuring a [`RecipeSearch`]
///
/// Starts from [`AppConfig::default`] unless a loaded configuration is
/// supplied; individual setters override single fields on top of it.
#[derive(Default)]
pub struct RecipeSearchBuilder {
    config: Option<AppConfig>,
    backend: Option<ClassifierBackend>,
    classifier_api_key: Option<String>,
    classifier_base_url: Option<String>,
    model: Option<String>,
    recipe_api_key: Option<String>,
    recipe_base_url: Option<String>,
    timeout: Option<Duration>,
    llm: Option<Arc<dyn LlmProvider>>,
    recipes: Option<Arc<dyn RecipeProvider>>,
}

impl RecipeSearchBuilder {
    /// Use a loaded configuration as the base
    ///
    /// # Example
    /// ```no_run
    /// use recipe_search::{AppConfig, RecipeSearch};
    ///
    /// let search = RecipeSearch::builder()
    ///     .config(AppConfig::load().unwrap())
    ///     .build();
    /// ```
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Select the classifier backend
    ///
    /// # Example
    /// ```
    /// use recipe_search::{ClassifierBackend, RecipeSearch};
    ///
    /// let builder = RecipeSearch::builder()
    ///     .classifier(ClassifierBackend::Anthropic);
    /// ```
    pub fn classifier(mut self, backend: ClassifierBackend) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Set the API key for the classifier backend
    pub fn classifier_api_key(mut self, key: impl Into<String>) -> Self {
        self.classifier_api_key = Some(key.into());
        self
    }

    /// Point the classifier backend at a custom or proxy endpoint
    pub fn classifier_base_url(mut self, url: impl Into<String>) -> Self {
        self.classifier_base_url = Some(url.into());
        self
    }

    /// Set the model name for the classifier backend
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the recipe database API key
    pub fn recipe_api_key(mut self, key: impl Into<String>) -> Self {
        self.recipe_api_key = Some(key.into());
        self
    }

    /// Point the recipe client at a custom endpoint
    pub fn recipe_base_url(mut self, url: impl Into<String>) -> Self {
        self.recipe_base_url = Some(url.into());
        self
    }

    /// Set a timeout for outbound HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Use an already constructed text-generation provider
    pub fn llm_provider(mut self, provider: Arc<dyn LlmProvider>) -> Self {
        self.llm = Some(provider);
        self
    }

    /// Use an already constructed recipe provider
    pub fn recipe_provider(mut self, provider: Arc<dyn RecipeProvider>) -> Self {
        self.recipes = Some(provider);
        self
    }

    /// Build the search service
    ///
    /// # Errors
    /// Returns [`SearchError::Builder`] if a provider cannot be created,
    /// typically because its API key is missing.
    pub fn build(self) -> Result<RecipeSearch, SearchError> {
        let mut config = self.config.unwrap_or_default();

        if let Some(backend) = self.backend {
            config.classifier.provider = backend.as_str().to_string();
        }
        if let Some(key) = self.classifier_api_key {
            config.classifier.api_key = Some(key);
        }
        if let Some(url) = self.classifier_base_url {
            config.classifier.base_url = Some(url);
        }
        if let Some(model) = self.model {
            config.classifier.model = Some(model);
        }
        if let Some(key) = self.recipe_api_key {
            config.recipes.api_key = Some(key);
        }
        if let Some(url) = self.recipe_base_url {
            config.recipes.base_url = Some(url);
        }
        let timeout = self.timeout.unwrap_or_else(|| config.timeout());

        let llm = match self.llm {
            Some(provider) => provider,
            None => ProviderFactory::create(&config.classifier, timeout).map_err(|e| {
                SearchError::Builder(format!("Failed to create classifier provider: {}", e))
            })?,
        };

        let recipes: Arc<dyn RecipeProvider> = match self.recipes {
            Some(provider) => provider,
            None => Arc::new(SpoonacularClient::new(&config.recipes, timeout).map_err(|e| {
                SearchError::Builder(format!("Failed to create recipe client: {}", e))
            })?),
        };

        Ok(RecipeSearch::new(llm, recipes))
    }
}
