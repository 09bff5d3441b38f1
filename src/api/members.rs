//! Member management endpoints, global and library-scoped

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::member::{CreateMember, Member, UpdateMember},
};

/// Get member details by ID
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn get_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Member>> {
    let member = state.services.catalog.get_member(id).await?;
    Ok(Json(member))
}

/// Create a member outside any library
#[utoipa::path(
    post,
    path = "/members",
    tag = "members",
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created", body = Member),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn create_member(
    State(state): State<crate::AppState>,
    Json(member): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let created = state.services.catalog.create_member(member).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Update an existing member
#[utoipa::path(
    put,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = Member),
        (status = 404, description = "Member not found")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(member): Json<UpdateMember>,
) -> AppResult<Json<Member>> {
    let updated = state.services.catalog.update_member(id, member).await?;
    Ok(Json(updated))
}

/// Delete a member entity
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member deleted"),
        (status = 404, description = "Member not found")
    )
)]
pub async fn delete_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<StatusCode> {
    state.services.catalog.delete_member(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Create a member inside a library
#[utoipa::path(
    post,
    path = "/library/{id}/members",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    request_body = CreateMember,
    responses(
        (status = 201, description = "Member created and associated", body = Member),
        (status = 400, description = "Invalid member name"),
        (status = 404, description = "Library not found")
    )
)]
pub async fn add_library_member(
    State(state): State<crate::AppState>,
    Path(library_id): Path<i32>,
    Json(member): Json<CreateMember>,
) -> AppResult<(StatusCode, Json<Member>)> {
    let created = state
        .services
        .catalog
        .add_member_to_library(library_id, member)
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Detach a member from a library
#[utoipa::path(
    delete,
    path = "/library/{id}/members/{member_id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Library ID"),
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 204, description = "Member detached; the entity persists"),
        (status = 400, description = "Member does not belong to this library"),
        (status = 404, description = "Library or member not found")
    )
)]
pub async fn remove_library_member(
    State(state): State<crate::AppState>,
    Path((library_id, member_id)): Path<(i32, i32)>,
) -> AppResult<StatusCode> {
    state
        .services
        .catalog
        .remove_member_from_library(library_id, member_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List the members of a library
#[utoipa::path(
    get,
    path = "/library/{id}/members",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Library ID")
    ),
    responses(
        (status = 200, description = "Members of the library", body = Vec<Member>),
        (status = 404, description = "Library not found")
    )
)]
pub async fn list_library_members(
    State(state): State<crate::AppState>,
    Path(library_id): Path<i32>,
) -> AppResult<Json<Vec<Member>>> {
    let members = state.services.catalog.members_of(library_id).await?;
    Ok(Json(members))
}

/// Get a member within a library's scope
#[utoipa::path(
    get,
    path = "/library/{id}/members/{member_id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Library ID"),
        ("member_id" = i32, Path, description = "Member ID")
    ),
    responses(
        (status = 200, description = "Member details", body = Member),
        (status = 404, description = "Library or member not found")
    )
)]
pub async fn get_library_member(
    State(state): State<crate::AppState>,
    Path((library_id, member_id)): Path<(i32, i32)>,
) -> AppResult<Json<Member>> {
    let member = state
        .services
        .catalog
        .member_in_library(library_id, member_id)
        .await?;
    Ok(Json(member))
}
