//! Loan record model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An outstanding loan. The existence of this row is the source of truth
/// that a book is out, alongside the book's denormalized status fields.
/// Rows are created only by lend and removed only by the matching return.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BorrowedBook {
    pub borrow_id: i32,
    pub member_id: i32,
    pub book_id: i32,
    pub borrow_date: DateTime<Utc>,
}
