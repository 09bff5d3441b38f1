//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, lending, libraries, members};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Libris API",
        version = "0.1.0",
        description = "Library Record Service REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Libraries
        libraries::list_libraries,
        libraries::get_library,
        libraries::create_library,
        libraries::update_library,
        libraries::delete_library,
        libraries::login,
        // Members
        members::get_member,
        members::create_member,
        members::update_member,
        members::delete_member,
        members::add_library_member,
        members::remove_library_member,
        members::list_library_members,
        members::get_library_member,
        // Books
        books::get_book,
        books::create_book,
        books::update_book,
        books::add_library_book,
        books::list_library_books,
        books::delete_library_book,
        // Lending
        lending::lend_book,
        lending::return_book,
    ),
    components(
        schemas(
            // Libraries
            crate::models::library::Library,
            crate::models::library::CreateLibrary,
            crate::models::library::UpdateLibrary,
            libraries::LoginRequest,
            libraries::LoginResponse,
            // Members
            crate::models::member::Member,
            crate::models::member::CreateMember,
            crate::models::member::UpdateMember,
            // Books
            crate::models::book::Book,
            crate::models::book::BookStatus,
            crate::models::book::Ebook,
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            books::MessageResponse,
            // Lending
            crate::models::loan::BorrowedBook,
            lending::LendRequest,
            lending::LendResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "libraries", description = "Library tenant management"),
        (name = "members", description = "Member management"),
        (name = "books", description = "Book catalog management"),
        (name = "lending", description = "Lend and return workflow")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
