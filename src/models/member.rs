//! Member model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Member row. Members are associated with libraries through the
/// library_members table and are never owned by a single library.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Member {
    pub member_id: i32,
    pub name: String,
}

/// Create member request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMember {
    #[validate(length(min = 1, max = 50, message = "Invalid member name"))]
    pub name: Option<String>,
}

/// Partial member update; an absent field is left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMember {
    #[validate(length(min = 1, max = 50, message = "Invalid member name"))]
    pub name: Option<String>,
}
