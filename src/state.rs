//! Shared application state for all routes.

use crate::store::TodoStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn TodoStore>,
    /// Owner recorded on every new todo.
    pub owner_id: i32,
}

impl AppState {
    pub fn new(store: Arc<dyn TodoStore>, owner_id: i32) -> Self {
        AppState { store, owner_id }
    }
}
