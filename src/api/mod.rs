pub mod models;
pub mod response;
pub mod routes;

pub use routes::create_router;

use crate::RecipeSearch;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub search: Arc<RecipeSearch>,
}

impl AppState {
    pub fn new(search: RecipeSearch) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}
