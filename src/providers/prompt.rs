/// The system prompt used for classifying search intent.
///
/// This prompt asks the model to decide whether a query names a dish or
/// lists ingredients, and to answer with a bare `{searchType, parsed}`
/// JSON object.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const INTENT_CLASSIFIER_PROMPT: &str = include_str!("prompt.txt");

/// Build the user message sent alongside the system prompt.
pub fn build_classifier_message(query: &str) -> String {
    format!("Analyze this search query: {}", query)
}
