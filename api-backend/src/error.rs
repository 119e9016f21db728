//! Error types for the Soluddy API backend

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use vault_codec::{InstructionError, ValidationError};

/// Backend error types
#[derive(Debug, Error)]
pub enum BackendError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Invalid public key: {0}")]
    InvalidPubkey(String),

    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Only vault owners can {0} this campaign")]
    NotOwner(&'static str),

    #[error("{0}")]
    NotFound(&'static str),

    #[error("Failed to parse campaign data")]
    ParseFailed,

    #[error("Ledger RPC failed: {0}")]
    Rpc(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            BackendError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            BackendError::InvalidPubkey(_) => (StatusCode::BAD_REQUEST, "INVALID_PUBKEY"),
            BackendError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_FAILED"),
            BackendError::NotOwner(_) => (StatusCode::FORBIDDEN, "NOT_OWNER"),
            BackendError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            BackendError::ParseFailed => (StatusCode::INTERNAL_SERVER_ERROR, "PARSE_FAILED"),
            BackendError::Rpc(_) => (StatusCode::BAD_GATEWAY, "RPC_ERROR"),
            BackendError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        });

        (status, body).into_response()
    }
}

impl From<InstructionError> for BackendError {
    fn from(err: InstructionError) -> Self {
        match err {
            InstructionError::Validation(err) => BackendError::Validation(err),
            other => BackendError::BadRequest(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        BackendError::Rpc(err.to_string())
    }
}

impl From<anyhow::Error> for BackendError {
    fn from(err: anyhow::Error) -> Self {
        BackendError::Internal(err.to_string())
    }
}

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;
