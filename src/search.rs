use crate::builder::RecipeSearchBuilder;
use crate::classifier::IntentClassifier;
use crate::error::{Result, SearchError};
use crate::fetcher::RecipeFetcher;
use crate::model::{RecipeDetail, SearchOutcome};
use crate::providers::LlmProvider;
use crate::recipes::RecipeProvider;
use log::info;
use std::sync::Arc;

/// Natural-language recipe search: classify the query, then fetch.
///
/// Holds no per-request state; one instance serves all requests.
pub struct RecipeSearch {
    classifier: IntentClassifier,
    fetcher: RecipeFetcher,
}

impl RecipeSearch {
    pub fn new(llm: Arc<dyn LlmProvider>, recipes: Arc<dyn RecipeProvider>) -> Self {
        Self {
            classifier: IntentClassifier::new(llm),
            fetcher: RecipeFetcher::new(recipes),
        }
    }

    /// Creates a new builder for a search service
    pub fn builder() -> RecipeSearchBuilder {
        RecipeSearchBuilder::default()
    }

    /// Run a search for a free-text query.
    ///
    /// # Errors
    /// - [`SearchError::Validation`] if the query is empty
    /// - [`SearchError::Classification`] if the intent could not be determined
    /// - [`SearchError::Fetch`] if the primary recipe search failed
    pub async fn search(&self, query: &str) -> Result<SearchOutcome> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::Validation(
                "Search query cannot be empty".to_string(),
            ));
        }

        let intent = self.classifier.classify(query).await?;
        info!(
            "Query classified as {} search for '{}'",
            intent.search_type, intent.parsed
        );

        let recipes = self.fetcher.fetch(&intent).await?;
        info!("Found {} recipes for '{}'", recipes.len(), intent.parsed);

        Ok(SearchOutcome {
            search_type: intent.search_type,
            parsed: intent.parsed,
            recipes,
        })
    }

    /// Look up the full detail projection of one recipe.
    pub async fn details(&self, id: i64) -> Result<RecipeDetail> {
        self.fetcher.lookup(id).await
    }
}
