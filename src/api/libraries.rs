//! Library management endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::library::{CreateLibrary, Library, UpdateLibrary},
};

/// Login request
#[derive(Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Library ID to authenticate as
    #[serde(rename = "libraryId")]
    pub library_id: Option<i32>,
    /// Library password
    pub password: Option<String>,
}

/// Login response
#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(rename = "libraryId", skip_serializing_if = "Option::is_none")]
    pub library_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// List all libraries
#[utoipa::path(
    get,
    path = "/library",
    tag = "libraries",
    responses(
        (status = 200, description = "All libraries", body = Vec<Library>)
    )
)]
pub async fn list_libraries(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<Library>>> {
    let libraries = state.services.libraries.list().await?;
    Ok(Json(libraries))
}

/// Get library details by ID
#[utoipa::path(
    get,
    path = "/library/{id}",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    responses(
        (status = 200, description = "Library details", body = Library),
        (status = 404, description = "Library not found")
    )
)]
pub async fn get_library(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Library>> {
    let library = state.services.libraries.get(id).await?;
    Ok(Json(library))
}

/// Create a new library
#[utoipa::path(
    post,
    path = "/library",
    tag = "libraries",
    request_body = CreateLibrary,
    responses(
        (status = 201, description = "Library created", body = Library),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_library(
    State(state): State<crate::AppState>,
    Json(library): Json<CreateLibrary>,
) -> AppResult<(StatusCode, Json<Library>)> {
    let created = state.services.libraries.create(library).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing library
#[utoipa::path(
    put,
    path = "/library/{id}",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    request_body = UpdateLibrary,
    responses(
        (status = 200, description = "Library updated", body = Library),
        (status = 404, description = "Library not found")
    )
)]
pub async fn update_library(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(library): Json<UpdateLibrary>,
) -> AppResult<Json<Library>> {
    let updated = state.services.libraries.update(id, library).await?;
    Ok(Json(updated))
}

/// Delete a library
#[utoipa::path(
    delete,
    path = "/library/{id}",
    tag = "libraries",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    responses(
        (status = 204, description = "Library deleted"),
        (status = 404, description = "Library not found")
    )
)]
pub async fn delete_library(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.libraries.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Authenticate as a library
#[utoipa::path(
    post,
    path = "/login",
    tag = "libraries",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login succeeded", body = LoginResponse),
        (status = 400, description = "Missing credentials", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = LoginResponse)
    )
)]
pub async fn login(
    State(state): State<crate::AppState>,
    Json(request): Json<LoginRequest>,
) -> AppResult<(StatusCode, Json<LoginResponse>)> {
    let (Some(library_id), Some(password)) = (request.library_id, request.password.as_deref())
    else {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(LoginResponse {
                success: false,
                library_id: None,
                message: Some("Library ID and password are required".to_string()),
            }),
        ));
    };

    match state.services.libraries.login(library_id, password).await? {
        Some(library) => Ok((
            StatusCode::OK,
            Json(LoginResponse {
                success: true,
                library_id: Some(library.library_id),
                message: None,
            }),
        )),
        None => Ok((
            StatusCode::UNAUTHORIZED,
            Json(LoginResponse {
                success: false,
                library_id: None,
                message: Some("Invalid Library ID or password".to_string()),
            }),
        )),
    }
}
