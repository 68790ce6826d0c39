use crate::model::{RecipeSummary, SearchOutcome, SearchType};
use serde::{Deserialize, Serialize};

/// Body of `POST /api/search-recipes`.
///
/// The field is named `ingredients` for compatibility with existing
/// clients; it holds either a dish name or an ingredient phrase.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    #[serde(default)]
    pub ingredients: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub search_type: SearchType,
    pub parsed: String,
    pub recipes: Vec<RecipeSummary>,
}

impl From<SearchOutcome> for SearchResponse {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            success: true,
            search_type: outcome.search_type,
            parsed: outcome.parsed,
            recipes: outcome.recipes,
        }
    }
}

/// Query string of `GET /api/recipe-details`.
#[derive(Debug, Deserialize)]
pub struct DetailParams {
    pub id: Option<String>,
}

impl DetailParams {
    /// The recipe id, if present and numeric.
    pub fn recipe_id(&self) -> Option<i64> {
        self.id.as_deref().and_then(|id| id.trim().parse().ok())
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
