use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Everything a route can answer with besides success.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("Failed to calculate houses: {0}")]
    HouseCalculation(String),
    #[error("Internal server error: {0}")]
    Internal(String),
    /// Failures outside any route's own handling: unreadable bodies, panics.
    #[error("Something went wrong!: {0}")]
    Unhandled(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::HouseCalculation(_) | ApiError::Internal(_) | ApiError::Unhandled(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(error) => json!({ "error": error }),
            ApiError::HouseCalculation(message) => json!({
                "error": "Failed to calculate houses",
                "message": message,
            }),
            ApiError::Internal(message) => json!({
                "error": "Internal server error",
                "message": message,
            }),
            ApiError::Unhandled(message) => json!({
                "error": "Something went wrong!",
                "message": message,
            }),
        };
        (status, Json(body)).into_response()
    }
}
