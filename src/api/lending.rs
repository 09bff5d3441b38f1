//! Lending endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{error::AppResult, models::book::Book};

/// Lend / return request. Both ids are resolved within the library's scope.
#[derive(Deserialize, ToSchema)]
pub struct LendRequest {
    /// Book ID
    pub book_id: Option<i32>,
    /// Member ID
    pub member_id: Option<i32>,
}

/// Lend / return response carrying the updated book
#[derive(Serialize, ToSchema)]
pub struct LendResponse {
    /// Status message
    pub message: String,
    /// The book after the transition
    pub book: Book,
}

/// Lend a book to a member of the same library
#[utoipa::path(
    post,
    path = "/library/{id}/lend",
    tag = "lending",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    request_body = LendRequest,
    responses(
        (status = 200, description = "Book lent", body = LendResponse),
        (status = 400, description = "Book is already borrowed"),
        (status = 404, description = "Book or member not found in this library")
    )
)]
pub async fn lend_book(
    State(state): State<crate::AppState>,
    Path(library_id): Path<i32>,
    Json(request): Json<LendRequest>,
) -> AppResult<Json<LendResponse>> {
    let book = state
        .services
        .lending
        .lend(library_id, request.book_id, request.member_id)
        .await?;

    Ok(Json(LendResponse {
        message: "Book lent successfully".to_string(),
        book,
    }))
}

/// Return a book borrowed by a member of the same library
#[utoipa::path(
    post,
    path = "/library/{id}/return",
    tag = "lending",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    request_body = LendRequest,
    responses(
        (status = 200, description = "Book returned", body = LendResponse),
        (status = 404, description = "Book or member not found in this library")
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    Path(library_id): Path<i32>,
    Json(request): Json<LendRequest>,
) -> AppResult<Json<LendResponse>> {
    let book = state
        .services
        .lending
        .return_book(library_id, request.book_id, request.member_id)
        .await?;

    Ok(Json(LendResponse {
        message: "Book returned successfully".to_string(),
        book,
    }))
}
