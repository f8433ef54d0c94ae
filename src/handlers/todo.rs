//! Todo handlers: list views, read, create, update, complete, delete.

use crate::error::AppError;
use crate::model::TodoFilter;
use crate::response::{found, success_created, success_many, success_one};
use crate::service::{parse_page, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;
use std::collections::HashMap;

/// A non-integer id cannot match a row, so it is reported like a missing one.
fn parse_id(id_str: &str) -> Result<i32, AppError> {
    id_str.trim().parse().map_err(|_| AppError::NotFound(id_str.to_string()))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AppError> {
    body.map(|Json(v)| v).map_err(|e| AppError::BadRequest(e.body_text()))
}

async fn list(
    state: AppState,
    filter: TodoFilter,
    params: HashMap<String, String>,
) -> Result<impl IntoResponse, AppError> {
    let page = parse_page(&params)?;
    let rows = state.store.list(filter, page).await?;
    Ok(success_many(rows))
}

pub async fn list_all(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    list(state, TodoFilter::All, params).await
}

pub async fn list_ongoing(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    list(state, TodoFilter::Ongoing, params).await
}

pub async fn list_today(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    list(state, TodoFilter::Today, params).await
}

pub async fn list_completed(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<impl IntoResponse, AppError> {
    list(state, TodoFilter::Completed, params).await
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = found(state.store.get_by_id(id).await?, &id_str)?;
    Ok(success_one(row))
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let todo = RequestValidator::create(json_body(body)?)?;
    let row = state.store.create(&todo, state.owner_id).await?;
    tracing::info!(id = row.id, "todo created");
    Ok(success_created(row))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let changes = RequestValidator::update(json_body(body)?)?;
    let row = found(state.store.update(id, &changes).await?, &id_str)?;
    Ok(success_one(row))
}

pub async fn complete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = found(state.store.complete(id).await?, &id_str)?;
    Ok(success_one(row))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let row = found(state.store.delete_by_id(id).await?, &id_str)?;
    tracing::info!(id = row.id, "todo deleted");
    Ok(success_one(row))
}
