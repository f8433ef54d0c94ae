//! Standard response envelope helpers.

use crate::error::AppError;
use crate::model::TodoItem;
use axum::{http::StatusCode, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// UTC, millisecond precision, `Z` suffix.
pub fn timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[derive(Debug, Serialize)]
pub struct SuccessOne<T> {
    pub timestamp: String,
    pub result: T,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessMany<T> {
    pub timestamp: String,
    pub items_length: usize,
    pub result: Vec<T>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorEnvelope {
    pub timestamp: String,
    pub error_message: String,
}

impl ErrorEnvelope {
    pub fn new(error_message: String) -> Self {
        ErrorEnvelope {
            timestamp: timestamp(),
            error_message,
        }
    }
}

pub fn success_one<T: Serialize>(result: T) -> (StatusCode, Json<SuccessOne<T>>) {
    (
        StatusCode::OK,
        Json(SuccessOne {
            timestamp: timestamp(),
            result,
        }),
    )
}

pub fn success_created<T: Serialize>(result: T) -> (StatusCode, Json<SuccessOne<T>>) {
    let (_, body) = success_one(result);
    (StatusCode::CREATED, body)
}

pub fn success_many<T: Serialize>(result: Vec<T>) -> (StatusCode, Json<SuccessMany<T>>) {
    (
        StatusCode::OK,
        Json(SuccessMany {
            timestamp: timestamp(),
            items_length: result.len(),
            result,
        }),
    )
}

/// Single-item outcome: a missing row becomes `NotFound` rather than an empty success.
pub fn found(row: Option<TodoItem>, id: &str) -> Result<TodoItem, AppError> {
    row.ok_or_else(|| AppError::NotFound(id.to_string()))
}
