//! Book catalog endpoints, global and library-scoped

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::book::{Book, CreateBook, UpdateBook},
};

/// Plain message response
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(id).await?;
    Ok(Json(book))
}

/// Create a book outside any library
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Missing required book fields")
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state.services.catalog.create_book(book).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a book's bibliographic fields
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(book): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    let updated = state.services.catalog.update_book(id, book).await?;
    Ok(Json(updated))
}

/// Create a book inside a library
#[utoipa::path(
    post,
    path = "/library/{id}/books",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created and associated", body = Book),
        (status = 400, description = "Missing required book fields"),
        (status = 404, description = "Library not found")
    )
)]
pub async fn add_library_book(
    State(state): State<crate::AppState>,
    Path(library_id): Path<i32>,
    Json(book): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let created = state
        .services
        .catalog
        .add_book_to_library(library_id, book)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// List the books of a library
#[utoipa::path(
    get,
    path = "/library/{id}/books",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    responses(
        (status = 200, description = "Books of the library", body = Vec<Book>),
        (status = 404, description = "No books found for this library")
    )
)]
pub async fn list_library_books(
    State(state): State<crate::AppState>,
    Path(library_id): Path<i32>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.catalog.books_of(library_id).await?;
    Ok(Json(books))
}

/// Delete a book through its library association
#[utoipa::path(
    delete,
    path = "/library/{id}/books/{book_id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Library ID"),
        ("book_id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found in this library"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete_library_book(
    State(state): State<crate::AppState>,
    Path((library_id, book_id)): Path<(i32, i32)>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .catalog
        .remove_book_from_library(library_id, book_id)
        .await?;
    Ok(Json(MessageResponse {
        message: "Book deleted successfully".to_string(),
    }))
}
