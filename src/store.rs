//! Store seam: the todo query operations, and their PostgreSQL implementation.

use crate::error::AppError;
use crate::model::{NewTodo, PageWindow, TodoChanges, TodoFilter, TodoItem};
use crate::sql::{self, bind_all, QueryBuf};
use async_trait::async_trait;
use sqlx::PgPool;

/// One method per use case. Each is a single statement; a missing row is `Ok(None)`, never an error.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Rows matching `filter` in its fixed order, optionally windowed.
    async fn list(&self, filter: TodoFilter, page: Option<PageWindow>) -> Result<Vec<TodoItem>, AppError>;

    async fn get_by_id(&self, id: i32) -> Result<Option<TodoItem>, AppError>;

    /// Insert with `isCompleted = false`. Returns the stored row including its new id.
    async fn create(&self, todo: &NewTodo, owner_id: i32) -> Result<TodoItem, AppError>;

    async fn update(&self, id: i32, changes: &TodoChanges) -> Result<Option<TodoItem>, AppError>;

    /// Sets `isCompleted = true` whatever its current value.
    async fn complete(&self, id: i32) -> Result<Option<TodoItem>, AppError>;

    /// Returns the deleted row's last state.
    async fn delete_by_id(&self, id: i32) -> Result<Option<TodoItem>, AppError>;

    /// Cheap round trip for readiness checks.
    async fn ping(&self) -> Result<(), AppError>;
}

/// `TodoStore` over a shared pool. Each call checks out one connection for one statement.
#[derive(Clone)]
pub struct PgTodoStore {
    pool: PgPool,
}

impl PgTodoStore {
    pub fn new(pool: PgPool) -> Self {
        PgTodoStore { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    async fn fetch_many(&self, q: &QueryBuf) -> Result<Vec<TodoItem>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let rows = bind_all(sqlx::query_as::<_, TodoItem>(&q.sql), &q.params)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn fetch_optional(&self, q: &QueryBuf) -> Result<Option<TodoItem>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let row = bind_all(sqlx::query_as::<_, TodoItem>(&q.sql), &q.params)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self, filter: TodoFilter, page: Option<PageWindow>) -> Result<Vec<TodoItem>, AppError> {
        self.fetch_many(&sql::select_list(filter, page)).await
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<TodoItem>, AppError> {
        self.fetch_optional(&sql::select_by_id(id)).await
    }

    async fn create(&self, todo: &NewTodo, owner_id: i32) -> Result<TodoItem, AppError> {
        self.fetch_optional(&sql::insert(todo, owner_id))
            .await?
            .ok_or(AppError::Db(sqlx::Error::RowNotFound))
    }

    async fn update(&self, id: i32, changes: &TodoChanges) -> Result<Option<TodoItem>, AppError> {
        self.fetch_optional(&sql::update(id, changes)).await
    }

    async fn complete(&self, id: i32) -> Result<Option<TodoItem>, AppError> {
        self.fetch_optional(&sql::complete(id)).await
    }

    async fn delete_by_id(&self, id: i32) -> Result<Option<TodoItem>, AppError> {
        self.fetch_optional(&sql::delete(id)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Create the todo table if it does not exist. No migration history is kept.
pub async fn ensure_todo_table(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(&sql::create_table()).execute(pool).await?;
    tracing::info!(table = sql::TODO_TABLE, "todo table ready");
    Ok(())
}
