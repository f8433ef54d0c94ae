//! Request validation and pagination parsing applied before the store is called.

mod pagination;
mod validation;
pub use pagination::{parse_page, MAX_PAGE_SIZE};
pub use validation::{RequestValidator, MAX_TEXT_LENGTH};
