use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

pub const INVALID_QUERY: &str = "Invalid search query provided";
pub const SEARCH_FAILED: &str = "Failed to search recipes";
pub const MISSING_RECIPE_ID: &str = "Recipe ID is required";
pub const DETAILS_FAILED: &str = "Failed to fetch recipe details";

#[derive(Serialize)]
pub struct ErrorResponse {
    error: &'static str,
}

/// Caller-facing failure. Carries only a fixed message; upstream detail is
/// logged by the handler and never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: &'static str,
}

impl ApiError {
    pub fn bad_request(message: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
        }
    }

    pub fn internal(message: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse {
            error: self.message,
        });

        (self.status, body).into_response()
    }
}
