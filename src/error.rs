use thiserror::Error;

/// Errors that can occur while searching for or looking up recipes
#[derive(Error, Debug)]
pub enum SearchError {
    /// Caller input was missing or malformed
    #[error("Invalid input: {0}")]
    Validation(String),

    /// The text-generation provider failed or returned an unusable answer
    #[error("Classification failed: {0}")]
    Classification(String),

    /// The recipe provider failed on a primary search or lookup call
    #[error("Recipe fetch failed: {0}")]
    Fetch(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, SearchError>;
