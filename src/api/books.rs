//! Books API endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    api::{
        extract::{BookId, ValidatedJson},
        response::ApiResponse,
    },
    error::{AppError, AppResult},
    models::{Book, BookPayload, PageRequest},
    AppState,
};

/// Book routes, mountable at any prefix
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/books",
            get(list_books).post(create_book).fallback(method_not_allowed),
        )
        .route(
            "/books/:id",
            get(get_book)
                .put(update_book)
                .delete(delete_book)
                .fallback(method_not_allowed),
        )
}

/// List books, paginated
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(
        ("page" = Option<i64>, Query, description = "Page number (1-based, defaults to 1)"),
        ("limit" = Option<i64>, Query, description = "Books per page (defaults to 10, at most 100)")
    ),
    responses(
        (status = 200, description = "Page of books", body = crate::api::response::BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    page: PageRequest,
) -> AppResult<Json<ApiResponse<Vec<Book>>>> {
    let books = state.services.books.get_all_books(page.page, page.limit).await?;
    Ok(Json(ApiResponse::success(books)))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = crate::api::response::BookResponse),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.services.books.get_book(id).await?;
    Ok(Json(ApiResponse::success(book)))
}

/// Create a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = crate::api::response::BookResponse),
        (status = 400, description = "Invalid payload")
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<BookPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<Book>>)> {
    let book = state.services.books.create_book(payload.into_book(0)).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(book))))
}

/// Replace title, author and year of a book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = crate::api::response::BookResponse),
        (status = 400, description = "Invalid id or payload"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    BookId(id): BookId,
    ValidatedJson(payload): ValidatedJson<BookPayload>,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.services.books.update_book(payload.into_book(id)).await?;
    Ok(Json(ApiResponse::success(book)))
}

/// Delete a book, returning the removed record
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = crate::api::response::BookResponse),
        (status = 400, description = "Invalid id"),
        (status = 404, description = "Book not found")
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    BookId(id): BookId,
) -> AppResult<Json<ApiResponse<Book>>> {
    let book = state.services.books.delete_book(id).await?;
    Ok(Json(ApiResponse::success(book)))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
