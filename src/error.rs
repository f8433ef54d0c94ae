//! Typed errors and HTTP mapping.

use crate::response::ErrorEnvelope;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// Message sent for missing rows. Clients of the existing API expect it verbatim.
pub const FORBIDDEN_MESSAGE: &str = "403 Forbidden Access";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("\"{field}\" {reason}")]
    Validation { field: String, reason: String },
    #[error("{0}")]
    BadRequest(String),
    #[error("todo {0} not found")]
    NotFound(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            // Missing rows and store failures both surface as 403.
            AppError::NotFound(_) | AppError::Db(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::NotFound(id) => {
                tracing::warn!(id = %id, "todo not found");
                FORBIDDEN_MESSAGE.to_string()
            }
            AppError::Db(e) => {
                tracing::error!(error = %e, "store failure");
                e.to_string()
            }
            other => {
                tracing::debug!(error = %other, "rejected request");
                other.to_string()
            }
        };
        (status, Json(ErrorEnvelope::new(message))).into_response()
    }
}
