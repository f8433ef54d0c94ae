//! Todo routes. Static list paths sit beside `/todos/:id`; the router prefers the static match.

use crate::handlers::todo::{
    complete, create, delete as delete_handler, list_all, list_completed, list_ongoing, list_today, read, update,
};
use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};

pub fn todo_routes(state: AppState) -> Router {
    Router::new()
        .route("/todos", post(create))
        .route("/todos/getAll", get(list_all))
        .route("/todos/getOngoing", get(list_ongoing))
        .route("/todos/todosOfTheDay", get(list_today))
        .route("/todos/getCompleted", get(list_completed))
        .route("/todos/:id", get(read).put(update).delete(delete_handler))
        .route("/todos/:id/complete", put(complete))
        .with_state(state)
}
