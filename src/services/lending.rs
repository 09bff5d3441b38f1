//! Lending engine service
//!
//! Drives the Available/Borrowed state machine for a book within the scope
//! of one library. The transactional work lives in the loans repository;
//! this layer resolves the request shape and logs transitions.

use crate::{
    error::{AppError, AppResult},
    models::book::Book,
    repository::Repository,
};

#[derive(Clone)]
pub struct LendingService {
    repository: Repository,
}

impl LendingService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Lend a book to a member of the same library
    pub async fn lend(
        &self,
        library_id: i32,
        book_id: Option<i32>,
        member_id: Option<i32>,
    ) -> AppResult<Book> {
        let (book_id, member_id) = Self::require_ids(book_id, member_id)?;
        self.repository
            .loans
            .lend(library_id, book_id, member_id)
            .await
    }

    /// Return a book. Succeeds even when no loan record matches; the book's
    /// fields are reconciled to available either way.
    pub async fn return_book(
        &self,
        library_id: i32,
        book_id: Option<i32>,
        member_id: Option<i32>,
    ) -> AppResult<Book> {
        let (book_id, member_id) = Self::require_ids(book_id, member_id)?;
        let book = self
            .repository
            .loans
            .return_book(library_id, book_id, member_id)
            .await?;
        tracing::info!(
            "Returned book {} from member {} in library {}",
            book_id,
            member_id,
            library_id
        );
        Ok(book)
    }

    /// An absent id can never resolve inside the library's scope
    fn require_ids(book_id: Option<i32>, member_id: Option<i32>) -> AppResult<(i32, i32)> {
        match (book_id, member_id) {
            (Some(book_id), Some(member_id)) => Ok((book_id, member_id)),
            _ => Err(AppError::NotFound(
                "Book or member not found in this library".to_string(),
            )),
        }
    }
}
