//! Membership and catalog management service
//!
//! Attaches members and books to libraries, answers scope queries, and
//! carries the global book/member CRUD operations.

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{
        book::{Book, CreateBook, UpdateBook},
        member::{CreateMember, Member, UpdateMember},
    },
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    // --- Library-scoped membership ---

    /// Create a member and attach it to a library
    pub async fn add_member_to_library(
        &self,
        library_id: i32,
        member: CreateMember,
    ) -> AppResult<Member> {
        self.repository.libraries.get_by_id(library_id).await?;

        member.validate()?;
        let name = member
            .name
            .as_deref()
            .ok_or_else(|| AppError::Validation("Invalid member name".to_string()))?;

        let created = self
            .repository
            .members
            .create_in_library(library_id, name)
            .await?;
        tracing::info!(
            "Added member {} to library {}",
            created.member_id,
            library_id
        );
        Ok(created)
    }

    /// Detach a member from a library; the member entity persists
    pub async fn remove_member_from_library(
        &self,
        library_id: i32,
        member_id: i32,
    ) -> AppResult<()> {
        self.repository.libraries.get_by_id(library_id).await?;
        self.repository.members.get_by_id(member_id).await?;

        if !self
            .repository
            .libraries
            .is_member(library_id, member_id)
            .await?
        {
            return Err(AppError::InvalidState(
                "Member does not belong to this library".to_string(),
            ));
        }

        self.repository
            .libraries
            .disassociate_member(library_id, member_id)
            .await
    }

    /// Members of a library; an empty list is a valid result
    pub async fn members_of(&self, library_id: i32) -> AppResult<Vec<Member>> {
        self.repository.libraries.get_by_id(library_id).await?;
        self.repository.libraries.members_of(library_id).await
    }

    /// A member resolved within a library's scope
    pub async fn member_in_library(&self, library_id: i32, member_id: i32) -> AppResult<Member> {
        self.repository.libraries.get_by_id(library_id).await?;
        self.repository
            .libraries
            .member_in_library(library_id, member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Member not found".to_string()))
    }

    // --- Library-scoped catalog ---

    /// Create a book (and its ebook extension, when a file format is given)
    /// and attach it to a library
    pub async fn add_book_to_library(&self, library_id: i32, book: CreateBook) -> AppResult<Book> {
        self.repository.libraries.get_by_id(library_id).await?;

        book.validate()?;
        let (Some(title), Some(author), Some(isbn)) = (
            book.title.as_deref(),
            book.author.as_deref(),
            book.isbn.as_deref(),
        ) else {
            return Err(AppError::Validation(
                "Missing required book fields".to_string(),
            ));
        };

        let created = self
            .repository
            .books
            .create_in_library(library_id, title, author, isbn, book.file_format.as_deref())
            .await?;
        tracing::info!("Added book {} to library {}", created.book_id, library_id);
        Ok(created)
    }

    /// Books of a library. An empty catalog reports not-found, matching the
    /// reference contract; members_of deliberately does not.
    pub async fn books_of(&self, library_id: i32) -> AppResult<Vec<Book>> {
        let books = self.repository.libraries.books_of(library_id).await?;
        if books.is_empty() {
            return Err(AppError::NotFound(
                "No books found for this library".to_string(),
            ));
        }
        Ok(books)
    }

    /// Delete a book through its library association; cascades to the
    /// ebook extension and any loan record
    pub async fn remove_book_from_library(&self, library_id: i32, book_id: i32) -> AppResult<()> {
        self.repository
            .books
            .delete_from_library(library_id, book_id)
            .await?;
        tracing::info!("Deleted book {} from library {}", book_id, library_id);
        Ok(())
    }

    // --- Global book operations ---

    /// Get a book by ID
    pub async fn get_book(&self, id: i32) -> AppResult<Book> {
        self.repository.books.get_by_id(id).await
    }

    /// Create a book outside any library scope
    pub async fn create_book(&self, book: CreateBook) -> AppResult<Book> {
        book.validate()?;
        let (Some(title), Some(author), Some(isbn)) = (
            book.title.as_deref(),
            book.author.as_deref(),
            book.isbn.as_deref(),
        ) else {
            return Err(AppError::Validation(
                "Missing required book fields".to_string(),
            ));
        };

        self.repository
            .books
            .create(title, author, isbn, book.file_format.as_deref())
            .await
    }

    /// Update a book's bibliographic fields
    pub async fn update_book(&self, id: i32, update: UpdateBook) -> AppResult<Book> {
        update.validate()?;
        self.repository.books.update(id, &update).await
    }

    // --- Global member operations ---

    /// Get a member by ID
    pub async fn get_member(&self, id: i32) -> AppResult<Member> {
        self.repository.members.get_by_id(id).await
    }

    /// Create a member outside any library scope
    pub async fn create_member(&self, member: CreateMember) -> AppResult<Member> {
        member.validate()?;
        let name = member
            .name
            .as_deref()
            .ok_or_else(|| AppError::Validation("Invalid member name".to_string()))?;
        self.repository.members.create(name).await
    }

    /// Update a member's name
    pub async fn update_member(&self, id: i32, update: UpdateMember) -> AppResult<Member> {
        update.validate()?;
        self.repository.members.update(id, &update).await
    }

    /// Delete a member entity everywhere
    pub async fn delete_member(&self, id: i32) -> AppResult<()> {
        self.repository.members.delete(id).await
    }
}
