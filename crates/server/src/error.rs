//! Mapping of engine conditions onto HTTP responses.
//!
//! Every error body has the shape `{ "error": string }` and every failure,
//! rejected input included, carries a server-error status.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use engine::EngineError;
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Engine(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Timeout => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Client-visible message; internal detail never leaves the process
    pub fn message(&self) -> String {
        match self {
            ApiError::Engine(EngineError::InvalidRequest(reason)) => reason.clone(),
            ApiError::Engine(EngineError::InternalFailure(_)) => INTERNAL_MESSAGE.to_string(),
            ApiError::Timeout => self.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Engine(EngineError::InvalidRequest(_)) => warn!("Rejected request: {}", self),
            _ => error!("Request failed: {}", self),
        }
        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::from(EngineError::invalid("missing field `city`")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::from(EngineError::internal("boom")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(ApiError::Timeout.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_internal_detail_is_hidden() {
        let err = ApiError::from(EngineError::internal("selection task failed: panic"));
        assert_eq!(err.message(), "Internal server error");

        let err = ApiError::from(EngineError::invalid("missing field `city`"));
        assert_eq!(err.message(), "missing field `city`");
    }
}
