use serde::{Deserialize, Serialize};
use std::fmt;

/// How the classifier interpreted a search query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// The query names a dish ("pad thai")
    Recipe,
    /// The query lists ingredients ("chicken, rice, garlic")
    Ingredients,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Recipe => "recipe",
            SearchType::Ingredients => "ingredients",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classifier output: the search type plus the normalized query.
///
/// `parsed` is a cleaned dish name for [`SearchType::Recipe`] and a
/// comma-joined ingredient list for [`SearchType::Ingredients`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedIntent {
    pub search_type: SearchType,
    pub parsed: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngredientRef {
    pub name: String,
}

impl IngredientRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// List-view projection of a recipe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummary {
    pub id: i64,
    pub title: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    pub used_ingredients: Vec<IngredientRef>,
    pub missed_ingredients: Vec<IngredientRef>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedIngredient {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub original: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionStep {
    pub number: u32,
    pub step: String,
}

/// A named group of instruction steps. Most recipes have one group with an
/// empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstructionGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub steps: Vec<InstructionStep>,
}

/// Full single-recipe projection served by the detail lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    pub id: i64,
    pub title: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_in_minutes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings: Option<u32>,
    /// HTML fragment as supplied by the recipe provider
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
    pub extended_ingredients: Vec<ExtendedIngredient>,
    pub analyzed_instructions: Vec<InstructionGroup>,
}

/// Result of a full search: the classification plus the recipes found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub search_type: SearchType,
    pub parsed: String,
    pub recipes: Vec<RecipeSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_search_type_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(SearchType::Ingredients).unwrap(),
            json!("ingredients")
        );
        assert_eq!(SearchType::Recipe.to_string(), "recipe");
    }

    #[test]
    fn test_search_type_rejects_unknown_value() {
        let result: Result<SearchType, _> = serde_json::from_value(json!("dessert"));
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_omits_missing_enrichment_fields() {
        let summary = RecipeSummary {
            id: 42,
            title: "Garlic Rice".to_string(),
            image: "https://img.example.com/42.jpg".to_string(),
            ready_in_minutes: None,
            servings: None,
            source_url: None,
            used_ingredients: vec![IngredientRef::new("rice")],
            missed_ingredients: vec![],
        };

        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("readyInMinutes").is_none());
        assert!(value.get("sourceUrl").is_none());
        assert_eq!(value["usedIngredients"], json!([{"name": "rice"}]));
        assert_eq!(value["missedIngredients"], json!([]));
    }
}
