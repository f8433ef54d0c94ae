//! Typed bind values for the todo statements.

use chrono::NaiveDate;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

#[derive(Clone, Debug, PartialEq)]
pub enum SqlParam {
    Int(i32),
    BigInt(i64),
    Bool(bool),
    Text(String),
    Date(NaiveDate),
}

/// Bind every parameter in order (`$1`, `$2`, ...).
pub fn bind_all<'q, O>(
    mut query: QueryAs<'q, Postgres, O, PgArguments>,
    params: &'q [SqlParam],
) -> QueryAs<'q, Postgres, O, PgArguments> {
    for p in params {
        query = match p {
            SqlParam::Int(n) => query.bind(*n),
            SqlParam::BigInt(n) => query.bind(*n),
            SqlParam::Bool(b) => query.bind(*b),
            SqlParam::Text(s) => query.bind(s.as_str()),
            SqlParam::Date(d) => query.bind(*d),
        };
    }
    query
}
