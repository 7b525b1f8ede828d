use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::clients::{expo::DispatchError, store::StoreError};

/// Every failure the webhook handler can surface. All variants become a
/// structured JSON response; nothing propagates past the boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No record in payload")]
    MissingRecord,

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),

    #[error("Failed to fetch tokens")]
    Store(#[from] StoreError),

    #[error("{0}")]
    Dispatch(#[from] DispatchError),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingRecord | ApiError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Dispatch(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Store(source) => {
                error!(error = %source, "Failed to fetch device tokens");
            }
            ApiError::Dispatch(source) => {
                error!(error = %source, "Push dispatch failed");
            }
            _ => {}
        }

        let status = self.status_code();
        let body = Json(json!({ "error": self.to_string() }));

        (status, body).into_response()
    }
}
