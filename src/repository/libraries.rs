//! Libraries repository for database operations
//!
//! Owns the library relation and the two association tables. Queries that
//! scope a member or book to a library are explicit joins through
//! library_members / library_books.

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::{book::Book, library::{Library, UpdateLibrary}, member::Member},
};

#[derive(Clone)]
pub struct LibrariesRepository {
    pool: Pool<Postgres>,
}

impl LibrariesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all libraries
    pub async fn list(&self) -> AppResult<Vec<Library>> {
        let libraries =
            sqlx::query_as::<_, Library>("SELECT * FROM libraries ORDER BY library_id")
                .fetch_all(&self.pool)
                .await?;
        Ok(libraries)
    }

    /// Get library by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Library> {
        sqlx::query_as::<_, Library>("SELECT * FROM libraries WHERE library_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Library not found".to_string()))
    }

    /// Create a new library
    pub async fn create(&self, name: &str, password: &str) -> AppResult<Library> {
        let library = sqlx::query_as::<_, Library>(
            "INSERT INTO libraries (name, password) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(password)
        .fetch_one(&self.pool)
        .await?;
        Ok(library)
    }

    /// Apply a partial update; absent fields keep their current value
    pub async fn update(&self, id: i32, update: &UpdateLibrary) -> AppResult<Library> {
        sqlx::query_as::<_, Library>(
            r#"
            UPDATE libraries
            SET name = COALESCE($1::text, name),
                password = COALESCE($2::text, password)
            WHERE library_id = $3
            RETURNING *
            "#,
        )
        .bind(update.name.as_deref())
        .bind(update.password.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Library not found".to_string()))
    }

    /// Delete a library. Association rows go with it; members and books
    /// survive (association-only ownership).
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM libraries WHERE library_id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Library not found".to_string()));
        }
        Ok(())
    }

    /// Look up a library by id and exact plaintext password
    pub async fn find_by_credentials(
        &self,
        id: i32,
        password: &str,
    ) -> AppResult<Option<Library>> {
        let library = sqlx::query_as::<_, Library>(
            "SELECT * FROM libraries WHERE library_id = $1 AND password = $2",
        )
        .bind(id)
        .bind(password)
        .fetch_optional(&self.pool)
        .await?;
        Ok(library)
    }

    /// Members associated with a library
    pub async fn members_of(&self, library_id: i32) -> AppResult<Vec<Member>> {
        let members = sqlx::query_as::<_, Member>(
            r#"
            SELECT m.*
            FROM members m
            JOIN library_members lm ON lm.member_id = m.member_id
            WHERE lm.library_id = $1
            ORDER BY m.member_id
            "#,
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(members)
    }

    /// Books associated with a library
    pub async fn books_of(&self, library_id: i32) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT b.*
            FROM books b
            JOIN library_books lb ON lb.book_id = b.book_id
            WHERE lb.library_id = $1
            ORDER BY b.book_id
            "#,
        )
        .bind(library_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(books)
    }

    /// A single member, resolved within the library's scope
    pub async fn member_in_library(
        &self,
        library_id: i32,
        member_id: i32,
    ) -> AppResult<Option<Member>> {
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
        .fetch_optional(&self.pool)
        .await?;
        Ok(member)
    }

    /// Does an association row exist for this (library, member) pair?
    pub async fn is_member(&self, library_id: i32, member_id: i32) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM library_members WHERE library_id = $1 AND member_id = $2)",
        )
        .bind(library_id)
        .bind(member_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    /// Remove the association row only; the member entity persists
    pub async fn disassociate_member(&self, library_id: i32, member_id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM library_members WHERE library_id = $1 AND member_id = $2")
            .bind(library_id)
            .bind(member_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
