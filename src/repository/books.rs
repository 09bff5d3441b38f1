//! Books repository for database operations

use sqlx::{Pool, Postgres, Transaction};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, Ebook, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get book by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>("SELECT * FROM books WHERE book_id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Create a standalone book, with its ebook extension when a file
    /// format is given
    pub async fn create(
        &self,
        title: &str,
        author: &str,
        isbn: &str,
        file_format: Option<&str>,
    ) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;
        let book = Self::insert_book(&mut tx, title, author, isbn, file_format).await?;
        tx.commit().await?;
        Ok(book)
    }

    /// Create a book and associate it with a library in one transaction
    pub async fn create_in_library(
        &self,
        library_id: i32,
        title: &str,
        author: &str,
        isbn: &str,
        file_format: Option<&str>,
    ) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = Self::insert_book(&mut tx, title, author, isbn, file_format).await?;

        sqlx::query("INSERT INTO library_books (library_id, book_id) VALUES ($1, $2)")
            .bind(library_id)
            .bind(book.book_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(book)
    }

    async fn insert_book(
        tx: &mut Transaction<'_, Postgres>,
        title: &str,
        author: &str,
        isbn: &str,
        file_format: Option<&str>,
    ) -> AppResult<Book> {
        let book = sqlx::query_as::<_, Book>(
            "INSERT INTO books (title, author, isbn) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(title)
        .bind(author)
        .bind(isbn)
        .fetch_one(&mut **tx)
        .await?;

        if let Some(file_format) = file_format {
            let ebook = Ebook {
                book_id: book.book_id,
                file_format: file_format.to_string(),
            };
            sqlx::query("INSERT INTO ebooks (book_id, file_format) VALUES ($1, $2)")
                .bind(ebook.book_id)
                .bind(&ebook.file_format)
                .execute(&mut **tx)
                .await?;
        }

        Ok(book)
    }

    /// Apply a partial update; absent fields keep their current value
    pub async fn update(&self, id: i32, update: &UpdateBook) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            r#"
            UPDATE books
            SET title = COALESCE($1::text, title),
                author = COALESCE($2::text, author),
                isbn = COALESCE($3::text, isbn)
            WHERE book_id = $4
            RETURNING *
            "#,
        )
        .bind(update.title.as_deref())
        .bind(update.author.as_deref())
        .bind(update.isbn.as_deref())
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Book not found".to_string()))
    }

    /// Delete a book that is associated with the given library. The book
    /// entity goes away entirely; its ebook row, loan records, and
    /// association rows cascade with it.
    pub async fn delete_from_library(&self, library_id: i32, book_id: i32) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM books
            WHERE book_id = $2
              AND EXISTS (
                  SELECT 1 FROM library_books
                  WHERE library_id = $1 AND book_id = $2
              )
            "#,
        )
        .bind(library_id)
        .bind(book_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Book not found".to_string()));
        }
        Ok(())
    }
}
