//! Errors returned by the JSON API

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tailspin_domain::CampaignId;
use thiserror::Error;

/// Errors the JSON API reports to clients
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Campaign {0} not found")]
    CampaignNotFound(CampaignId),

    #[error("Invalid campaign id '{0}'")]
    InvalidId(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::CampaignNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            ApiError::CampaignNotFound(_) => "not_found",
            ApiError::InvalidId(_) => "invalid_request",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": self.to_string(),
            }
        });
        (self.status(), Json(body)).into_response()
    }
}
