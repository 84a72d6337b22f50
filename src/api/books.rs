//! Book and detail API endpoints

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, CreateBook, CreateDetail, Detail, UpdateBook},
    AppState,
};

use super::{json_body, MessageResponse, ValidatedJson};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book with its details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Invalid body or duplicate id", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.catalog.create_book(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Replace a book's title and details
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Invalid body", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<UpdateBook>, JsonRejection>,
) -> AppResult<Json<Book>> {
    state.services.catalog.get_book(&id).await?;
    let data = json_body(body)?;
    let book = state.services.catalog.update_book(&id, data).await?;
    Ok(Json(book))
}

/// Delete a book and its details
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_book(&id).await?;
    Ok(MessageResponse::new("Book deleted successfully"))
}

/// Add a detail to a book
#[utoipa::path(
    post,
    path = "/books/{id}/details",
    tag = "details",
    params(("id" = String, Path, description = "Book ID")),
    request_body = CreateDetail,
    responses(
        (status = 201, description = "Detail created", body = Detail),
        (status = 400, description = "Invalid body or duplicate id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_detail(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<CreateDetail>, JsonRejection>,
) -> AppResult<(StatusCode, Json<Detail>)> {
    state.services.catalog.get_book(&id).await?;
    let data = json_body(body)?;
    let detail = state.services.catalog.add_detail(&id, data).await?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// Remove a detail from a book
#[utoipa::path(
    delete,
    path = "/books/{id}/details/{detail_id}",
    tag = "details",
    params(
        ("id" = String, Path, description = "Book ID"),
        ("detail_id" = String, Path, description = "Detail ID")
    ),
    responses(
        (status = 200, description = "Detail deleted", body = MessageResponse),
        (status = 404, description = "Book or detail not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_detail(
    State(state): State<AppState>,
    Path((id, detail_id)): Path<(String, String)>,
) -> AppResult<Json<MessageResponse>> {
    state.services.catalog.delete_detail(&id, &detail_id).await?;
    Ok(MessageResponse::new("Detail deleted successfully"))
}
