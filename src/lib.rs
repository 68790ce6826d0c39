pub mod api;
pub mod builder;
pub mod classifier;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod providers;
pub mod recipes;
pub mod search;

pub use builder::{ClassifierBackend, RecipeSearchBuilder};
pub use config::AppConfig;
pub use error::SearchError;
pub use model::{
    IngredientRef, ParsedIntent, RecipeDetail, RecipeSummary, SearchOutcome, SearchType,
};
pub use search::RecipeSearch;

/// Search recipes for a free-text query using configuration from the
/// environment and `config.toml`.
///
/// # Example
/// ```no_run
/// # #[tokio::main]
/// # async fn main() -> Result<(), recipe_search::SearchError> {
/// let outcome = recipe_search::search_recipes("chicken, rice, garlic").await?;
/// for recipe in outcome.recipes {
///     println!("{} ({})", recipe.title, recipe.id);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_recipes(query: &str) -> Result<SearchOutcome, SearchError> {
    let search = RecipeSearch::builder().config(AppConfig::load()?).build()?;
    search.search(query).await
}

/// Fetch one recipe's detail projection using configuration from the
/// environment and `config.toml`.
pub async fn recipe_details(id: i64) -> Result<RecipeDetail, SearchError> {
    let search = RecipeSearch::builder().config(AppConfig::load()?).build()?;
    search.details(id).await
}
