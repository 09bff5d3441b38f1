//! Loans repository for database operations
//!
//! Lend and return each run in a single transaction so the book's
//! denormalized status fields and the borrowed_books relation can never be
//! observed half-updated. The book row is locked with FOR UPDATE; under
//! concurrent lend attempts the first committer wins and the loser sees the
//! already-borrowed state.

use chrono::Utc;
use sqlx::{Pool, Postgres, Transaction};

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, BookStatus},
        loan::BorrowedBook,
        member::Member,
    },
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Lend a book to a member, both resolved within the library's scope
    pub async fn lend(&self, library_id: i32, book_id: i32, member_id: i32) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let (book, member) = Self::resolve_scoped(&mut tx, library_id, book_id, member_id).await?;

        if book.status == BookStatus::Borrowed {
            return Err(AppError::InvalidState("Book is already borrowed".to_string()));
        }

        let now = Utc::now();

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET status = $1, lent_to = $2, lent_date = $3
            WHERE book_id = $4
            RETURNING *
            "#,
        )
        .bind(BookStatus::Borrowed)
        .bind(member.member_id)
        .bind(now)
        .bind(book.book_id)
        .fetch_one(&mut *tx)
        .await?;

        let borrow_id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO borrowed_books (member_id, book_id, borrow_date)
            VALUES ($1, $2, $3)
            RETURNING borrow_id
            "#,
        )
        .bind(member.member_id)
        .bind(book.book_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::info!(
            "Lent book {} to member {} in library {} (borrow {})",
            book.book_id,
            member.member_id,
            library_id,
            borrow_id
        );

        Ok(book)
    }

    /// Return a book. Clears the book's loan fields even when no matching
    /// loan record exists, reconciling a drifted status.
    pub async fn return_book(
        &self,
        library_id: i32,
        book_id: i32,
        member_id: i32,
    ) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let (book, member) = Self::resolve_scoped(&mut tx, library_id, book_id, member_id).await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET status = $1, lent_to = NULL, lent_date = NULL
            WHERE book_id = $2
            RETURNING *
            "#,
        )
        .bind(BookStatus::Available)
        .bind(book.book_id)
        .fetch_one(&mut *tx)
        .await?;

        let borrowed = sqlx::query_as::<_, BorrowedBook>(
            "SELECT * FROM borrowed_books WHERE book_id = $1 AND member_id = $2",
        )
        .bind(book.book_id)
        .bind(member.member_id)
        .fetch_optional(&mut *tx)
        .await?;

        match borrowed {
            Some(loan) => {
                sqlx::query("DELETE FROM borrowed_books WHERE borrow_id = $1")
                    .bind(loan.borrow_id)
                    .execute(&mut *tx)
                    .await?;
            }
            // No loan record to remove; the field reset above already
            // reconciled the book.
            None => {
                tracing::warn!(
                    "Return of book {} by member {} had no loan record",
                    book.book_id,
                    member.member_id
                );
            }
        }

        tx.commit().await?;

        Ok(book)
    }

    /// Resolve the book (locked) and member within the library's scope.
    /// Either one missing is a single not-found failure; the caller cannot
    /// distinguish which side was absent.
    async fn resolve_scoped(
        tx: &mut Transaction<'_, Postgres>,
        library_id: i32,
        book_id: i32,
        member_id: i32,
    ) -> AppResult<(Book, Member)> {
        let book = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.*
            FROM books b
            JOIN library_books lb ON lb.book_id = b.book_id
            WHERE lb.library_id = $1 AND b.book_id = $2
            FOR UPDATE OF b
            "#,
        )
        .bind(library_id)
        .bind(book_id)
        .fetch_optional(&mut **tx)
        .await?;

        let member = sqlx::query_as::<_, Member>(
            r#"
            SELECT m.*
            FROM members m
            JOIN library_members lm ON lm.member_id = m.member_id
            WHERE lm.library_id = $1 AND m.member_id = $2
            "#,
        )
        .bind(library_id)
        .bind(member_id)
        .fetch_optional(&mut **tx)
        .await?;

        match (book, member) {
            (Some(book), Some(member)) => Ok((book, member)),
            _ => Err(AppError::NotFound(
                "Book or member not found in this library".to_string(),
            )),
        }
    }
}
