//! Library (tenant) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Library row. Serialized flat, every column included; the password is
/// stored and compared as plaintext to preserve the login contract.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Library {
    pub library_id: i32,
    pub name: String,
    pub password: String,
}

/// Create library request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLibrary {
    #[validate(length(max = 50, message = "Invalid name"))]
    pub name: Option<String>,
    #[validate(length(max = 20, message = "Invalid password"))]
    pub password: Option<String>,
}

/// Partial library update; an absent field is left unchanged
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateLibrary {
    #[validate(length(max = 50, message = "Invalid name"))]
    pub name: Option<String>,
    #[validate(length(max = 20, message = "Invalid password"))]
    pub password: Option<String>,
}
