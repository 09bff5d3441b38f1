//! Book and ebook models and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Availability state of a book
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema,
)]
#[sqlx(type_name = "book_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum BookStatus {
    Available,
    Borrowed,
}

impl BookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookStatus::Available => "available",
            BookStatus::Borrowed => "borrowed",
        }
    }
}

impl std::fmt::Display for BookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Book row. `lent_to` and `lent_date` are denormalized loan state; they are
/// non-null exactly when an outstanding borrowed_books row exists.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub author: String,
    pub isbn: String,
    pub status: BookStatus,
    pub lent_to: Option<i32>,
    pub lent_date: Option<DateTime<Utc>>,
}

/// Electronic extension of a book, one-to-one and composition-owned:
/// the row shares the book's id and dies with it.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Ebook {
    pub book_id: i32,
    pub file_format: String,
}

/// Create book request. A present `file_format` also creates the
/// ebook extension row.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 50, message = "Invalid title"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Invalid author"))]
    pub author: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Invalid isbn"))]
    pub isbn: Option<String>,
    #[validate(length(min = 1, max = 25, message = "Invalid file format"))]
    pub file_format: Option<String>,
}

/// Partial book update; an absent field is left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 50, message = "Invalid title"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Invalid author"))]
    pub author: Option<String>,
    #[validate(length(min = 1, max = 50, message = "Invalid isbn"))]
    pub isbn: Option<String>,
}
