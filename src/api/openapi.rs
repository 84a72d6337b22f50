//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, whoami};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bookshelf API",
        version = "0.1.0",
        description = "In-memory book catalog REST API"
    ),
    paths(
        health::health_check,
        whoami::whoami,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Details
        books::create_detail,
        books::delete_detail,
    ),
    components(
        schemas(
            crate::models::Book,
            crate::models::Detail,
            crate::models::CreateBook,
            crate::models::UpdateBook,
            crate::models::CreateDetail,
            crate::api::MessageResponse,
            whoami::WhoAmIResponse,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "identity", description = "Caller identification"),
        (name = "books", description = "Book management"),
        (name = "details", description = "Book detail management")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
