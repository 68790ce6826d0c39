mod spoonacular;

pub use spoonacular::SpoonacularClient;

use crate::model::InstructionGroup;
use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::error::Error;

/// Unified trait for recipe database providers
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Get the provider name (e.g., "spoonacular")
    fn provider_name(&self) -> &str;

    /// Keyword search by dish name, with full recipe information and
    /// ingredient lists filled in
    async fn search_by_name(
        &self,
        query: &str,
        number: usize,
    ) -> Result<Vec<RecipeInformation>, Box<dyn Error + Send + Sync>>;

    /// Recipes that use the given comma-separated ingredients, ranked to
    /// maximize used ingredients with pantry staples ignored
    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: usize,
    ) -> Result<Vec<IngredientMatch>, Box<dyn Error + Send + Sync>>;

    /// Full information for a single recipe, nutrition excluded
    async fn information(
        &self,
        id: i64,
    ) -> Result<RecipeInformation, Box<dyn Error + Send + Sync>>;
}

/// An ingredient as the provider reports it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderIngredient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub original: String,
}

/// Recipe record returned by keyword search and single-item lookup.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeInformation {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub ready_in_minutes: Option<u32>,
    #[serde(default)]
    pub servings: Option<u32>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub source_name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub extended_ingredients: Vec<ProviderIngredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub analyzed_instructions: Vec<InstructionGroup>,
}

/// Candidate returned by the ingredient-matching search.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientMatch {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub used_ingredients: Vec<ProviderIngredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub missed_ingredients: Vec<ProviderIngredient>,
}

/// The provider sends explicit nulls for empty lists and strings on some
/// records.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
