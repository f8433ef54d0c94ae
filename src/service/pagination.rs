//! `size` / `page` query parameters.

use crate::error::AppError;
use crate::model::PageWindow;
use std::collections::HashMap;

pub const MAX_PAGE_SIZE: i64 = 1000;

/// Parse list query parameters. No (or empty) `size` disables pagination; `page` defaults to 1.
/// Other keys are ignored.
pub fn parse_page(params: &HashMap<String, String>) -> Result<Option<PageWindow>, AppError> {
    let size = match params.get("size").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => return Ok(None),
        Some(s) => s.parse::<i64>().ok().filter(|n| (1..=MAX_PAGE_SIZE).contains(n)).ok_or_else(|| {
            AppError::BadRequest(format!("size must be an integer between 1 and {}", MAX_PAGE_SIZE))
        })?,
    };
    let number = match params.get("page").map(|s| s.trim()).filter(|s| !s.is_empty()) {
        None => 1,
        Some(s) => s
            .parse::<i64>()
            .ok()
            .filter(|n| *n >= 1 && (n - 1).checked_mul(size).is_some())
            .ok_or_else(|| AppError::BadRequest("page must be a positive integer".into()))?,
    };
    Ok(Some(PageWindow { size, number }))
}
