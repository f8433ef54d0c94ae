//! Request validation for create and update bodies.

use crate::error::AppError;
use crate::model::{NewTodo, TodoChanges};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::{Map, Value};

pub const MAX_TEXT_LENGTH: usize = 255;

const TITLE: &str = "title";
const DESCRIPTION: &str = "description";
const DATE: &str = "date";
const IS_COMPLETED: &str = "isCompleted";

const CREATE_FIELDS: &[&str] = &[TITLE, DESCRIPTION, DATE];
const UPDATE_FIELDS: &[&str] = &[TITLE, DESCRIPTION, DATE, IS_COMPLETED];

pub struct RequestValidator;

impl RequestValidator {
    /// Validate a create body. All of title, description and date are required.
    /// Fields are checked in order and the first failure is returned.
    pub fn create(body: Value) -> Result<NewTodo, AppError> {
        let body = body_to_map(body)?;
        let todo = NewTodo {
            title: text_field(&body, TITLE)?,
            description: text_field(&body, DESCRIPTION)?,
            date: date_field(&body, DATE)?,
        };
        reject_unknown(&body, CREATE_FIELDS)?;
        Ok(todo)
    }

    /// Validate an update body. Every field is required; there is no partial update.
    pub fn update(body: Value) -> Result<TodoChanges, AppError> {
        let body = body_to_map(body)?;
        let changes = TodoChanges {
            title: text_field(&body, TITLE)?,
            description: text_field(&body, DESCRIPTION)?,
            date: date_field(&body, DATE)?,
            is_completed: bool_field(&body, IS_COMPLETED)?,
        };
        reject_unknown(&body, UPDATE_FIELDS)?;
        Ok(changes)
    }
}

fn body_to_map(value: Value) -> Result<Map<String, Value>, AppError> {
    match value {
        Value::Object(m) => Ok(m),
        _ => Err(AppError::BadRequest("body must be a JSON object".into())),
    }
}

fn required<'a>(body: &'a Map<String, Value>, field: &str) -> Result<&'a Value, AppError> {
    match body.get(field) {
        None | Some(Value::Null) => Err(AppError::validation(field, "is required")),
        Some(v) => Ok(v),
    }
}

fn reject_unknown(body: &Map<String, Value>, allowed: &[&str]) -> Result<(), AppError> {
    match body.keys().find(|k| !allowed.contains(&k.as_str())) {
        Some(key) => Err(AppError::validation(key.as_str(), "is not allowed")),
        None => Ok(()),
    }
}

fn text_field(body: &Map<String, Value>, field: &str) -> Result<String, AppError> {
    let s = required(body, field)?
        .as_str()
        .ok_or_else(|| AppError::validation(field, "must be a string"))?;
    if s.is_empty() {
        return Err(AppError::validation(field, "is not allowed to be empty"));
    }
    if s.chars().count() > MAX_TEXT_LENGTH {
        return Err(AppError::validation(
            field,
            format!("length must be less than or equal to {} characters long", MAX_TEXT_LENGTH),
        ));
    }
    Ok(s.to_string())
}

fn date_field(body: &Map<String, Value>, field: &str) -> Result<NaiveDate, AppError> {
    parse_date(required(body, field)?).ok_or_else(|| AppError::validation(field, "must be a valid date"))
}

fn bool_field(body: &Map<String, Value>, field: &str) -> Result<bool, AppError> {
    parse_bool(required(body, field)?).ok_or_else(|| AppError::validation(field, "must be a boolean"))
}

/// `YYYY-MM-DD`, `YYYY/MM/DD`, an RFC 3339 timestamp (UTC date kept), or epoch
/// milliseconds as a number or a digit-only string.
fn parse_date(v: &Value) -> Option<NaiveDate> {
    match v {
        Value::String(s) => {
            let s = s.trim();
            if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
                return s.parse().ok().and_then(date_from_millis);
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .or_else(|_| NaiveDate::parse_from_str(s, "%Y/%m/%d"))
                .ok()
                .or_else(|| {
                    DateTime::parse_from_rfc3339(s)
                        .ok()
                        .map(|d| d.with_timezone(&Utc).date_naive())
                })
        }
        Value::Number(n) => n.as_i64().and_then(date_from_millis),
        _ => None,
    }
}

fn date_from_millis(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).map(|d| d.date_naive())
}

fn parse_bool(v: &Value) -> Option<bool> {
    match v {
        Value::Bool(b) => Some(*b),
        Value::String(s) if s.eq_ignore_ascii_case("true") => Some(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Some(false),
        _ => None,
    }
}
