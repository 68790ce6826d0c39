use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};
use log::{error, info, warn};
use tower_http::cors::{Any, CorsLayer};

use crate::api::models::{DetailParams, HealthResponse, SearchRequest, SearchResponse};
use crate::api::response::{
    ApiError, DETAILS_FAILED, INVALID_QUERY, MISSING_RECIPE_ID, SEARCH_FAILED,
};
use crate::api::AppState;
use crate::error::SearchError;
use crate::model::RecipeDetail;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/search-recipes", post(search_recipes))
        .route("/api/recipe-details", get(recipe_details))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(app_state)
}

/// POST /api/search-recipes
async fn search_recipes(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, ApiError> {
    let query = match payload {
        Ok(Json(SearchRequest {
            ingredients: Some(query),
        })) => query,
        Ok(_) => return Err(ApiError::bad_request(INVALID_QUERY)),
        Err(rejection) => {
            warn!("Rejected search request body: {}", rejection);
            return Err(ApiError::bad_request(INVALID_QUERY));
        }
    };

    info!("Searching recipes for '{}'", query);
    let outcome = state.search.search(&query).await.map_err(|e| match e {
        SearchError::Validation(msg) => {
            warn!("Invalid search request: {}", msg);
            ApiError::bad_request(INVALID_QUERY)
        }
        other => {
            error!("Recipe search error: {}", other);
            ApiError::internal(SEARCH_FAILED)
        }
    })?;

    Ok(Json(outcome.into()))
}

/// GET /api/recipe-details?id=<recipe id>
async fn recipe_details(
    State(state): State<AppState>,
    params: Result<Query<DetailParams>, QueryRejection>,
) -> Result<Json<RecipeDetail>, ApiError> {
    let Query(params) = params.map_err(|rejection| {
        warn!("Rejected recipe details query: {}", rejection);
        ApiError::bad_request(MISSING_RECIPE_ID)
    })?;

    let id = params
        .recipe_id()
        .ok_or_else(|| ApiError::bad_request(MISSING_RECIPE_ID))?;

    let detail = state.search.details(id).await.map_err(|e| {
        error!("Recipe details error: {}", e);
        ApiError::internal(DETAILS_FAILED)
    })?;

    Ok(Json(detail))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
