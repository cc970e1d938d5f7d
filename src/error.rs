use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use serde_json::json;
use utoipa::ToSchema;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Restaurant not found")]
    RestaurantNotFound,
    #[error("Restaurant or Pizza does not exist")]
    ReferenceNotFound,
    #[error("validation errors")]
    Validation,
    #[error("Internal server error")]
    Database(#[from] diesel::result::Error),
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    /// Validation error messages
    pub errors: Vec<String>,
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            ApiError::RestaurantNotFound => (
                StatusCode::NOT_FOUND,
                json!({"error": "Restaurant not found"}),
            ),
            ApiError::ReferenceNotFound => (
                StatusCode::NOT_FOUND,
                json!({"error": "Restaurant or Pizza does not exist"}),
            ),
            ApiError::Validation => (
                StatusCode::BAD_REQUEST,
                json!({"errors": ["validation errors"]}),
            ),
            ApiError::Database(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Internal server error"}),
            ),
        };

        (status, Json(body)).into_response()
    }
}
