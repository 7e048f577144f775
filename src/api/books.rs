//! Book collection endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use axum_extra::extract::WithRejection;

use super::JsonBody;
use crate::{
    error::{AppError, AppResult},
    models::{Book, BookSearchQuery, CreateBook, MessageResponse, UpdateBook},
    AppState,
};

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in collection order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.books.list().await)
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.get_by_id(&id).await?;
    Ok(Json(book))
}

/// Search books by author
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Matching books, possibly none", body = Vec<Book>),
        (status = 400, description = "Author query is required", body = crate::error::ErrorResponse)
    )
)]
pub async fn search_books(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<BookSearchQuery>, AppError>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .books
        .search_by_author(query.author.as_deref())
        .await?;
    Ok(Json(books))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Title is required", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    JsonBody(data): JsonBody<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    let book = state.services.books.create(data).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated", body = Book),
        (status = 400, description = "Title cannot be empty", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
    JsonBody(data): JsonBody<UpdateBook>,
) -> AppResult<Json<Book>> {
    let book = state.services.books.update(&id, data).await?;
    Ok(Json(book))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    WithRejection(Path(id), _): WithRejection<Path<String>, AppError>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&id).await?;
    Ok(Json(MessageResponse::new("Book deleted successfully")))
}
