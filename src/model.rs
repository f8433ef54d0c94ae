//! Todo item as returned to clients, and the validated write payloads.

use chrono::NaiveDate;
use serde::Serialize;

/// One todo row, renamed to its public field names. The owner column is never selected.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: i32,
    pub title: String,
    pub description: String,
    /// Serialized as `YYYY-MM-DD`.
    pub date: NaiveDate,
    #[sqlx(rename = "isCompleted")]
    pub is_completed: bool,
}

/// Fields accepted on create. `isCompleted` always starts false.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
}

/// Full replacement applied by update.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TodoChanges {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    pub is_completed: bool,
}

/// Which subset of todos a list query returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TodoFilter {
    /// Everything, newest date first.
    All,
    /// Not completed, oldest date first.
    Ongoing,
    /// Dated today and not completed, by id.
    Today,
    /// Completed, newest date first.
    Completed,
}

/// Limit/offset window for a list query. `None` at the call site means "no pagination".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageWindow {
    pub size: i64,
    /// 1-based.
    pub number: i64,
}

impl PageWindow {
    /// Saturates at `i64::MAX`.
    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }
}
