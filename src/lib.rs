//! Todo API: REST backend for todo items stored in PostgreSQL.

pub mod error;
pub mod model;
pub mod response;
pub mod settings;
pub mod sql;
pub mod state;
pub mod store;
pub mod service;
pub mod handlers;
pub mod routes;

pub use error::{AppError, ConfigError};
pub use model::{NewTodo, PageWindow, TodoChanges, TodoFilter, TodoItem};
pub use response::{success_one, success_many, success_created};
pub use settings::Settings;
pub use state::AppState;
pub use store::{ensure_todo_table, PgTodoStore, TodoStore};
pub use routes::{app, common_routes, todo_routes};
