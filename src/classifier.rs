use crate::error::{Result, SearchError};
use crate::model::{ParsedIntent, SearchType};
use crate::providers::{build_classifier_message, LlmProvider, INTENT_CLASSIFIER_PROMPT};
use log::debug;
use serde_json::Value;
use std::sync::Arc;

/// Decides whether a query names a dish or lists ingredients.
pub struct IntentClassifier {
    provider: Arc<dyn LlmProvider>,
}

impl IntentClassifier {
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Classify a query with a single completion call. No retry.
    pub async fn classify(&self, query: &str) -> Result<ParsedIntent> {
        let content = self
            .provider
            .complete(INTENT_CLASSIFIER_PROMPT, &build_classifier_message(query))
            .await
            .map_err(|e| {
                SearchError::Classification(format!(
                    "{} request failed: {}",
                    self.provider.provider_name(),
                    e
                ))
            })?;

        debug!("Classifier answer: {}", content);
        parse_intent(&content)
    }
}

/// Parse the model's answer into a [`ParsedIntent`].
///
/// The answer must be a bare JSON object with a `searchType` of either
/// `"recipe"` or `"ingredients"` and a non-empty `parsed` string.
pub fn parse_intent(content: &str) -> Result<ParsedIntent> {
    let value: Value = serde_json::from_str(content.trim()).map_err(|e| {
        SearchError::Classification(format!("Classifier answer is not valid JSON: {}", e))
    })?;

    let search_type = match value.get("searchType").and_then(Value::as_str) {
        Some("recipe") => SearchType::Recipe,
        Some("ingredients") => SearchType::Ingredients,
        Some(other) => {
            return Err(SearchError::Classification(format!(
                "Unrecognized searchType '{}'",
                other
            )))
        }
        None => {
            return Err(SearchError::Classification(
                "Classifier answer is missing searchType".to_string(),
            ))
        }
    };

    let parsed = value
        .get("parsed")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .ok_or_else(|| {
            SearchError::Classification("Classifier answer is missing parsed".to_string())
        })?;

    Ok(ParsedIntent {
        search_type,
        parsed: parsed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::error::Error;
    use std::sync::Mutex;

    struct CannedProvider {
        answer: std::result::Result<String, String>,
        seen: Mutex<Vec<(String, String)>>,
    }

    impl CannedProvider {
        fn new(answer: std::result::Result<&str, &str>) -> Arc<Self> {
            Arc::new(Self {
                answer: answer.map(String::from).map_err(String::from),
                seen: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn complete(
            &self,
            system_prompt: &str,
            user_message: &str,
        ) -> std::result::Result<String, Box<dyn Error + Send + Sync>> {
            self.seen
                .lock()
                .unwrap()
                .push((system_prompt.to_string(), user_message.to_string()));
            self.answer.clone().map_err(|e| e.into())
        }
    }

    #[tokio::test]
    async fn test_classify_dish_name() {
        let provider = CannedProvider::new(Ok(r#"{"searchType": "recipe", "parsed": "pad thai"}"#));
        let classifier = IntentClassifier::new(provider.clone());

        let intent = classifier.classify("pad thai").await.unwrap();
        assert_eq!(intent.search_type, SearchType::Recipe);
        assert_eq!(intent.parsed, "pad thai");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].0, INTENT_CLASSIFIER_PROMPT);
        assert_eq!(seen[0].1, "Analyze this search query: pad thai");
    }

    #[tokio::test]
    async fn test_classify_provider_failure() {
        let provider = CannedProvider::new(Err("connection refused"));
        let classifier = IntentClassifier::new(provider);

        let err = classifier.classify("eggs").await.unwrap_err();
        assert!(matches!(err, SearchError::Classification(_)));
    }

    #[test]
    fn test_parse_ingredients_answer_with_whitespace() {
        let intent = parse_intent(
            "\n  {\"searchType\": \"ingredients\", \"parsed\": \"chicken, rice, garlic\"}  \n",
        )
        .unwrap();
        assert_eq!(intent.search_type, SearchType::Ingredients);
        assert_eq!(intent.parsed, "chicken, rice, garlic");
    }

    #[test]
    fn test_parse_rejects_non_json() {
        let err = parse_intent("Sure! This looks like a dish name.").unwrap_err();
        assert!(matches!(err, SearchError::Classification(_)));
    }

    #[test]
    fn test_parse_rejects_unknown_search_type() {
        let err = parse_intent(r#"{"searchType": "cuisine", "parsed": "thai"}"#).unwrap_err();
        assert!(err.to_string().contains("cuisine"));
    }

    #[test]
    fn test_parse_rejects_missing_fields() {
        assert!(parse_intent(r#"{"parsed": "thai"}"#).is_err());
        assert!(parse_intent(r#"{"searchType": "recipe"}"#).is_err());
        assert!(parse_intent(r#"{"searchType": "recipe", "parsed": "   "}"#).is_err());
        assert!(parse_intent(r#"{"searchType": 1, "parsed": "thai"}"#).is_err());
    }
}
