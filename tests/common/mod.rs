//! In-memory stores and request helpers shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use chrono::{Local, NaiveDate};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use todo_api::{AppError, AppState, NewTodo, PageWindow, TodoChanges, TodoFilter, TodoItem, TodoStore};
use tower::ServiceExt;

/// Mirrors the PostgreSQL statements' filters and orderings over a vector.
#[derive(Default)]
pub struct MemoryTodoStore {
    rows: Mutex<Vec<TodoItem>>,
    owners: Mutex<Vec<(i32, i32)>>,
    next_id: Mutex<i32>,
}

impl MemoryTodoStore {
    pub fn owner_of(&self, id: i32) -> Option<i32> {
        self.owners.lock().unwrap().iter().find(|(i, _)| *i == id).map(|(_, o)| *o)
    }
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[async_trait]
impl TodoStore for MemoryTodoStore {
    async fn list(&self, filter: TodoFilter, page: Option<PageWindow>) -> Result<Vec<TodoItem>, AppError> {
        let today = today();
        let mut rows: Vec<TodoItem> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| match filter {
                TodoFilter::All => true,
                TodoFilter::Ongoing => !r.is_completed,
                TodoFilter::Today => r.date == today && !r.is_completed,
                TodoFilter::Completed => r.is_completed,
            })
            .cloned()
            .collect();
        match filter {
            TodoFilter::All | TodoFilter::Completed => rows.sort_by(|a, b| b.date.cmp(&a.date)),
            TodoFilter::Ongoing => rows.sort_by_key(|r| r.date),
            TodoFilter::Today => rows.sort_by_key(|r| r.id),
        }
        Ok(match page {
            Some(w) => rows
                .into_iter()
                .skip(w.offset() as usize)
                .take(w.size as usize)
                .collect(),
            None => rows,
        })
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<TodoItem>, AppError> {
        Ok(self.rows.lock().unwrap().iter().find(|r| r.id == id).cloned())
    }

    async fn create(&self, todo: &NewTodo, owner_id: i32) -> Result<TodoItem, AppError> {
        let mut next = self.next_id.lock().unwrap();
        *next += 1;
        let row = TodoItem {
            id: *next,
            title: todo.title.clone(),
            description: todo.description.clone(),
            date: todo.date,
            is_completed: false,
        };
        self.rows.lock().unwrap().push(row.clone());
        self.owners.lock().unwrap().push((row.id, owner_id));
        Ok(row)
    }

    async fn update(&self, id: i32, changes: &TodoChanges) -> Result<Option<TodoItem>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.title = changes.title.clone();
            r.description = changes.description.clone();
            r.date = changes.date;
            r.is_completed = changes.is_completed;
            r.clone()
        }))
    }

    async fn complete(&self, id: i32) -> Result<Option<TodoItem>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|r| r.id == id).map(|r| {
            r.is_completed = true;
            r.clone()
        }))
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<TodoItem>, AppError> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter().position(|r| r.id == id).map(|i| rows.remove(i)))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Every call fails the way an unreachable database would.
pub struct FailingStore;

fn unavailable<T>() -> Result<T, AppError> {
    Err(AppError::Db(sqlx::Error::PoolTimedOut))
}

#[async_trait]
impl TodoStore for FailingStore {
    async fn list(&self, _: TodoFilter, _: Option<PageWindow>) -> Result<Vec<TodoItem>, AppError> {
        unavailable()
    }
    async fn get_by_id(&self, _: i32) -> Result<Option<TodoItem>, AppError> {
        unavailable()
    }
    async fn create(&self, _: &NewTodo, _: i32) -> Result<TodoItem, AppError> {
        unavailable()
    }
    async fn update(&self, _: i32, _: &TodoChanges) -> Result<Option<TodoItem>, AppError> {
        unavailable()
    }
    async fn complete(&self, _: i32) -> Result<Option<TodoItem>, AppError> {
        unavailable()
    }
    async fn delete_by_id(&self, _: i32) -> Result<Option<TodoItem>, AppError> {
        unavailable()
    }
    async fn ping(&self) -> Result<(), AppError> {
        unavailable()
    }
}

pub const OWNER_ID: i32 = 1;

pub fn router_with(store: Arc<dyn TodoStore>) -> Router {
    todo_api::app(AppState::new(store, OWNER_ID), 64 * 1024)
}

pub fn memory_router() -> (Router, Arc<MemoryTodoStore>) {
    let store = Arc::new(MemoryTodoStore::default());
    (router_with(store.clone()), store)
}

/// Send one request and decode the JSON response body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&v).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
