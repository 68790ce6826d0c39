use crate::error::{Result, SearchError};
use crate::model::{
    ExtendedIngredient, IngredientRef, ParsedIntent, RecipeDetail, RecipeSummary, SearchType,
};
use crate::recipes::{IngredientMatch, ProviderIngredient, RecipeInformation, RecipeProvider};
use futures::future::join_all;
use log::{debug, warn};
use std::sync::Arc;

/// Maximum number of recipes returned by one search
pub const MAX_RESULTS: usize = 6;

/// Number of ingredients shown on a dish-name search result
pub const PREVIEW_INGREDIENTS: usize = 5;

/// Queries the recipe provider for a classified intent and normalizes the
/// results into [`RecipeSummary`] values.
pub struct RecipeFetcher {
    provider: Arc<dyn RecipeProvider>,
}

impl RecipeFetcher {
    pub fn new(provider: Arc<dyn RecipeProvider>) -> Self {
        Self { provider }
    }

    /// Fetch at most [`MAX_RESULTS`] summaries, in provider order.
    pub async fn fetch(&self, intent: &ParsedIntent) -> Result<Vec<RecipeSummary>> {
        match intent.search_type {
            SearchType::Recipe => self.fetch_by_name(&intent.parsed).await,
            SearchType::Ingredients => self.fetch_by_ingredients(&intent.parsed).await,
        }
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Vec<RecipeSummary>> {
        let results = self
            .provider
            .search_by_name(name, MAX_RESULTS)
            .await
            .map_err(|e| SearchError::Fetch(format!("Keyword search failed: {}", e)))?;

        Ok(results
            .into_iter()
            .take(MAX_RESULTS)
            .map(summary_from_information)
            .collect())
    }

    async fn fetch_by_ingredients(&self, ingredients: &str) -> Result<Vec<RecipeSummary>> {
        let matches = self
            .provider
            .find_by_ingredients(ingredients, MAX_RESULTS)
            .await
            .map_err(|e| SearchError::Fetch(format!("Ingredient search failed: {}", e)))?;

        let candidates: Vec<IngredientMatch> = matches.into_iter().take(MAX_RESULTS).collect();
        debug!("Enriching {} ingredient matches", candidates.len());

        // join_all yields results in input order, whatever order they complete in
        let details = join_all(
            candidates
                .iter()
                .map(|candidate| self.provider.information(candidate.id)),
        )
        .await;

        Ok(candidates
            .into_iter()
            .zip(details)
            .map(|(candidate, detail)| {
                let mut summary = summary_from_match(candidate);
                match detail {
                    Ok(info) => {
                        summary.ready_in_minutes = info.ready_in_minutes;
                        summary.servings = info.servings;
                        summary.source_url = info.source_url;
                    }
                    Err(e) => warn!("Detail lookup for recipe {} failed: {}", summary.id, e),
                }
                summary
            })
            .collect())
    }

    /// Look up a single recipe's full detail projection.
    pub async fn lookup(&self, id: i64) -> Result<RecipeDetail> {
        let info = self
            .provider
            .information(id)
            .await
            .map_err(|e| SearchError::Fetch(format!("Lookup of recipe {} failed: {}", id, e)))?;

        Ok(detail_from_information(info))
    }
}

fn names(ingredients: Vec<ProviderIngredient>) -> Vec<IngredientRef> {
    ingredients
        .into_iter()
        .map(|ingredient| IngredientRef::new(ingredient.name))
        .collect()
}

fn summary_from_information(info: RecipeInformation) -> RecipeSummary {
    let used = info
        .extended_ingredients
        .into_iter()
        .take(PREVIEW_INGREDIENTS)
        .collect();

    RecipeSummary {
        id: info.id,
        title: info.title,
        image: info.image.unwrap_or_default(),
        ready_in_minutes: info.ready_in_minutes,
        servings: info.servings,
        source_url: info.source_url,
        used_ingredients: names(used),
        // A keyword search has no pantry to compare against
        missed_ingredients: Vec::new(),
    }
}

fn summary_from_match(candidate: IngredientMatch) -> RecipeSummary {
    RecipeSummary {
        id: candidate.id,
        title: candidate.title,
        image: candidate.image.unwrap_or_default(),
        ready_in_minutes: None,
        servings: None,
        source_url: None,
        used_ingredients: names(candidate.used_ingredients),
        missed_ingredients: names(candidate.missed_ingredients),
    }
}

fn detail_from_information(info: RecipeInformation) -> RecipeDetail {
    RecipeDetail {
        id: info.id,
        title: info.title,
        image: info.image.unwrap_or_default(),
        ready_in_minutes: info.ready_in_minutes,
        servings: info.servings,
        summary: info.summary.unwrap_or_default(),
        source_url: info.source_url,
        source_name: info.source_name,
        extended_ingredients: info
            .extended_ingredients
            .into_iter()
            .map(|ingredient| ExtendedIngredient {
                id: ingredient.id,
                original: ingredient.original,
            })
            .collect(),
        analyzed_instructions: info.analyzed_instructions,
    }
}
