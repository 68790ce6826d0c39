use crate::config::RecipeApiConfig;
use crate::recipes::{IngredientMatch, RecipeInformation, RecipeProvider};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::error::Error;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";

/// Ranking mode 2: maximize used ingredients
const RANK_MAXIMIZE_USED: &str = "2";

#[derive(Debug, Deserialize)]
struct SearchResults {
    #[serde(default)]
    results: Vec<RecipeInformation>,
}

pub struct SpoonacularClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl SpoonacularClient {
    /// Create a new Spoonacular client from configuration
    pub fn new(
        config: &RecipeApiConfig,
        timeout: Duration,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("SPOONACULAR_API_KEY").ok())
            .ok_or("SPOONACULAR_API_KEY not found in config or environment")?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(SpoonacularClient {
            client: Client::builder().timeout(timeout).build()?,
            api_key,
            base_url,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        SpoonacularClient {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[("apiKey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            debug!("Spoonacular error body for {}: {}", path, body);
            return Err(format!("Spoonacular request to {} failed with status {}", path, status).into());
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    fn provider_name(&self) -> &str {
        "spoonacular"
    }

    async fn search_by_name(
        &self,
        query: &str,
        number: usize,
    ) -> Result<Vec<RecipeInformation>, Box<dyn Error + Send + Sync>> {
        let params = [
            ("query", query.to_string()),
            ("number", number.to_string()),
            ("addRecipeInformation", "true".to_string()),
            ("fillIngredients", "true".to_string()),
        ];
        let results: SearchResults = self.get_json("/recipes/complexSearch", &params).await?;
        debug!("complexSearch returned {} results", results.results.len());
        Ok(results.results)
    }

    async fn find_by_ingredients(
        &self,
        ingredients: &str,
        number: usize,
    ) -> Result<Vec<IngredientMatch>, Box<dyn Error + Send + Sync>> {
        let params = [
            ("ingredients", ingredients.to_string()),
            ("number", number.to_string()),
            ("ranking", RANK_MAXIMIZE_USED.to_string()),
            ("ignorePantry", "true".to_string()),
        ];
        let matches: Vec<IngredientMatch> =
            self.get_json("/recipes/findByIngredients", &params).await?;
        debug!("findByIngredients returned {} matches", matches.len());
        Ok(matches)
    }

    async fn information(
        &self,
        id: i64,
    ) -> Result<RecipeInformation, Box<dyn Error + Send + Sync>> {
        let params = [("includeNutrition", "false".to_string())];
        self.get_json(&format!("/recipes/{}/information", id), &params)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn client_for(server: &Server) -> SpoonacularClient {
        SpoonacularClient::with_base_url("spoon-key".to_string(), server.url())
    }

    #[tokio::test]
    async fn test_search_by_name_sends_expected_query() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/complexSearch")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("apiKey".into(), "spoon-key".into()),
                Matcher::UrlEncoded("query".into(), "pad thai".into()),
                Matcher::UrlEncoded("number".into(), "6".into()),
                Matcher::UrlEncoded("addRecipeInformation".into(), "true".into()),
                Matcher::UrlEncoded("fillIngredients".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"results": [{"id": 1, "title": "Pad Thai", "image": "https://img/1.jpg", "readyInMinutes": 30}], "offset": 0, "number": 6, "totalResults": 1}"#,
            )
            .create_async()
            .await;

        let results = client_for(&server).search_by_name("pad thai", 6).await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Pad Thai");
        assert_eq!(results[0].ready_in_minutes, Some(30));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_find_by_ingredients_sends_ranking_and_pantry_flags() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("ingredients".into(), "chicken, rice".into()),
                Matcher::UrlEncoded("number".into(), "6".into()),
                Matcher::UrlEncoded("ranking".into(), "2".into()),
                Matcher::UrlEncoded("ignorePantry".into(), "true".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 5, "title": "Chicken Rice", "image": "https://img/5.jpg", "usedIngredients": [{"name": "chicken"}], "missedIngredients": []}]"#)
            .create_async()
            .await;

        let matches = client_for(&server)
            .find_by_ingredients("chicken, rice", 6)
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].used_ingredients[0].name, "chicken");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_information_excludes_nutrition() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/recipes/716429/information")
            .match_query(Matcher::UrlEncoded(
                "includeNutrition".into(),
                "false".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"id": 716429, "title": "Pasta with Garlic", "servings": 2, "sourceName": "Full Belly Sisters"}"#)
            .create_async()
            .await;

        let info = client_for(&server).information(716429).await.unwrap();
        assert_eq!(info.servings, Some(2));
        assert_eq!(info.source_name.as_deref(), Some("Full Belly Sisters"));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/recipes/findByIngredients")
            .match_query(Matcher::Any)
            .with_status(402)
            .with_body(r#"{"status": "failure", "message": "daily points limit reached"}"#)
            .create_async()
            .await;

        let result = client_for(&server).find_by_ingredients("eggs", 6).await;
        let err = result.unwrap_err().to_string();
        assert!(err.contains("402"));
        assert!(!err.contains("daily points"));
    }

    #[test]
    fn test_new_prefers_configured_key() {
        let config = RecipeApiConfig {
            api_key: Some("configured".to_string()),
            base_url: None,
        };
        let client = SpoonacularClient::new(&config, Duration::from_secs(5)).unwrap();
        assert_eq!(client.api_key, "configured");
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
        assert_eq!(client.provider_name(), "spoonacular");
    }
}
