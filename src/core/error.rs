use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::indicators::InvalidIndicatorsError;
use crate::services::ProviderError;

/// API error types.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid indicators: {0}")]
    InvalidIndicators(#[from] InvalidIndicatorsError),

    #[error("Invalid indicators payload: {0}")]
    InvalidPayload(#[from] JsonRejection),

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidIndicators(_) | ApiError::InvalidPayload(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Provider(ProviderError::UnknownSymbol(_)) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let mut body = json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });
        if let ApiError::InvalidIndicators(e) = &self {
            body["field"] = json!(e.field());
        }

        (status, Json(body)).into_response()
    }
}
