//! Builds the parameterized SELECT, INSERT, UPDATE and DELETE statements for todo items.

use super::params::SqlParam;
use crate::model::{NewTodo, PageWindow, TodoChanges, TodoFilter};

pub const TODO_TABLE: &str = "todo_item";

/// Every read and RETURNING clause renames columns to the public names and truncates the date.
const COLUMNS: &str = r#"t_id AS "id", t_title AS "title", t_desc AS "description", t_date::date AS "date", t_isCompleted AS "isCompleted""#;

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<SqlParam>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: SqlParam) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn where_and_order(filter: TodoFilter) -> (&'static str, &'static str) {
    match filter {
        TodoFilter::All => ("", "t_date DESC"),
        TodoFilter::Ongoing => ("t_isCompleted = FALSE", "t_date ASC"),
        TodoFilter::Today => ("t_date = CURRENT_DATE AND t_isCompleted = FALSE", "t_id ASC"),
        TodoFilter::Completed => ("t_isCompleted = TRUE", "t_date DESC"),
    }
}

/// SELECT for a list view. LIMIT/OFFSET only when a page window is given.
pub fn select_list(filter: TodoFilter, page: Option<PageWindow>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let (predicate, order) = where_and_order(filter);
    q.sql = format!("SELECT {} FROM {}", COLUMNS, TODO_TABLE);
    if !predicate.is_empty() {
        q.sql.push_str(" WHERE ");
        q.sql.push_str(predicate);
    }
    q.sql.push_str(" ORDER BY ");
    q.sql.push_str(order);
    if let Some(w) = page {
        let limit = q.push_param(SqlParam::BigInt(w.size));
        let offset = q.push_param(SqlParam::BigInt(w.offset()));
        q.sql.push_str(&format!(" LIMIT ${} OFFSET ${}", limit, offset));
    }
    q
}

pub fn select_by_id(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!("SELECT {} FROM {} WHERE t_id = ${}", COLUMNS, TODO_TABLE, n);
    q
}

/// INSERT a new, not yet completed todo for `owner_id`.
pub fn insert(todo: &NewTodo, owner_id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(SqlParam::Text(todo.title.clone()));
    q.push_param(SqlParam::Text(todo.description.clone()));
    q.push_param(SqlParam::Date(todo.date));
    q.push_param(SqlParam::Bool(false));
    q.push_param(SqlParam::Int(owner_id));
    q.sql = format!(
        "INSERT INTO {} (t_title, t_desc, t_date, t_isCompleted, t_user_id) VALUES ($1, $2, $3, $4, $5) RETURNING {}",
        TODO_TABLE, COLUMNS
    );
    q
}

/// UPDATE replacing all editable columns.
pub fn update(id: i32, changes: &TodoChanges) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.push_param(SqlParam::Text(changes.title.clone()));
    q.push_param(SqlParam::Text(changes.description.clone()));
    q.push_param(SqlParam::Date(changes.date));
    q.push_param(SqlParam::Bool(changes.is_completed));
    q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "UPDATE {} SET t_title = $1, t_desc = $2, t_date = $3, t_isCompleted = $4 WHERE t_id = $5 RETURNING {}",
        TODO_TABLE, COLUMNS
    );
    q
}

pub fn complete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!(
        "UPDATE {} SET t_isCompleted = TRUE WHERE t_id = ${} RETURNING {}",
        TODO_TABLE, n, COLUMNS
    );
    q
}

pub fn delete(id: i32) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(SqlParam::Int(id));
    q.sql = format!("DELETE FROM {} WHERE t_id = ${} RETURNING {}", TODO_TABLE, n, COLUMNS);
    q
}

/// DDL for the todo table, used by the startup bootstrap.
pub fn create_table() -> String {
    format!(
        r#"
        CREATE TABLE IF NOT EXISTS {} (
            t_id SERIAL PRIMARY KEY,
            t_title VARCHAR(255) NOT NULL,
            t_desc VARCHAR(255) NOT NULL,
            t_date DATE NOT NULL,
            t_isCompleted BOOLEAN NOT NULL DEFAULT FALSE,
            t_user_id INTEGER NOT NULL
        )
        "#,
        TODO_TABLE
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    #[test]
    fn list_without_page_has_no_limit() {
        let q = select_list(TodoFilter::All, None);
        assert!(q.sql.ends_with("ORDER BY t_date DESC"));
        assert!(!q.sql.contains("LIMIT"));
        assert!(q.params.is_empty());
    }

    #[test]
    fn list_with_page_binds_limit_and_offset() {
        let q = select_list(TodoFilter::Completed, Some(PageWindow { size: 2, number: 3 }));
        assert!(q.sql.contains("WHERE t_isCompleted = TRUE ORDER BY t_date DESC LIMIT $1 OFFSET $2"));
        assert_eq!(q.params, vec![SqlParam::BigInt(2), SqlParam::BigInt(4)]);
    }

    #[test]
    fn filters_pick_predicate_and_order() {
        let ongoing = select_list(TodoFilter::Ongoing, None).sql;
        assert!(ongoing.contains("WHERE t_isCompleted = FALSE ORDER BY t_date ASC"));
        let today = select_list(TodoFilter::Today, None).sql;
        assert!(today.contains("WHERE t_date = CURRENT_DATE AND t_isCompleted = FALSE ORDER BY t_id ASC"));
    }

    #[test]
    fn reads_rename_columns() {
        let q = select_by_id(9);
        assert!(q.sql.contains(r#"t_desc AS "description""#));
        assert!(q.sql.contains(r#"t_date::date AS "date""#));
        assert!(!q.sql.contains("t_user_id"));
        assert_eq!(q.params, vec![SqlParam::Int(9)]);
    }

    #[test]
    fn insert_starts_incomplete_with_owner() {
        let todo = NewTodo {
            title: "t".into(),
            description: "d".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        };
        let q = insert(&todo, 1);
        assert!(q.sql.starts_with("INSERT INTO todo_item"));
        assert!(q.sql.contains("RETURNING"));
        assert_eq!(q.params[3], SqlParam::Bool(false));
        assert_eq!(q.params[4], SqlParam::Int(1));
    }

    #[test]
    fn update_binds_id_last() {
        let changes = TodoChanges {
            title: "t".into(),
            description: "d".into(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            is_completed: true,
        };
        let q = update(5, &changes);
        assert!(q.sql.contains("WHERE t_id = $5"));
        assert_eq!(q.params.len(), 5);
        assert_eq!(q.params[4], SqlParam::Int(5));
    }

    #[test]
    fn complete_and_delete_return_row() {
        assert!(complete(1).sql.contains("SET t_isCompleted = TRUE WHERE t_id = $1 RETURNING"));
        assert!(delete(1).sql.starts_with("DELETE FROM todo_item WHERE t_id = $1 RETURNING"));
    }
}
