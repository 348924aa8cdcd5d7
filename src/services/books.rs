//! Book service: business rules between the HTTP layer and the record store

use std::sync::Arc;

use async_trait::async_trait;
use tracing::Span;

use crate::{
    error::{AppError, AppResult},
    models::{Book, PageRequest},
    repository::BookStore,
};

/// Create/get/list/update/delete over books
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BookService: Send + Sync {
    /// Insert a new book; the input id is ignored and the assigned one returned
    async fn create_book(&self, book: Book) -> AppResult<Book>;

    async fn get_book(&self, id: i64) -> AppResult<Book>;

    /// List a page of books; `page` and `limit` are clamped before querying
    async fn get_all_books(&self, page: i64, limit: i64) -> AppResult<Vec<Book>>;

    /// Overwrite title, author and year of the book identified by `payload.id`
    async fn update_book(&self, payload: Book) -> AppResult<Book>;

    /// Remove a book, returning the record as it was before deletion
    async fn delete_book(&self, id: i64) -> AppResult<Book>;
}

/// Store-backed book service
///
/// Every event is parented to the span handed in at construction.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn BookStore>,
    span: Span,
}

impl CatalogService {
    pub fn new(store: Arc<dyn BookStore>, span: Span) -> Self {
        Self { store, span }
    }

    async fn fetch_existing(&self, id: i64, operation: &'static str) -> AppResult<Book> {
        match self.store.fetch_by_id(id).await {
            Ok(Some(book)) => Ok(book),
            Ok(None) => {
                tracing::warn!(parent: &self.span, operation, id, "book not found");
                Err(AppError::BookNotFound(id))
            }
            Err(e) => {
                tracing::error!(parent: &self.span, operation, id, error = %e, "error fetching book");
                Err(AppError::storage("fetch book", e))
            }
        }
    }
}

#[async_trait]
impl BookService for CatalogService {
    async fn create_book(&self, book: Book) -> AppResult<Book> {
        let id = self.store.insert(&book).await.map_err(|e| {
            tracing::error!(
                parent: &self.span,
                operation = "create_book",
                title = %book.title,
                author = %book.author,
                year = book.year,
                error = %e,
                "failed to create new book"
            );
            AppError::storage("create book", e)
        })?;

        let created = Book { id, ..book };
        tracing::info!(parent: &self.span, operation = "create_book", id, title = %created.title, "created new book");
        Ok(created)
    }

    async fn get_book(&self, id: i64) -> AppResult<Book> {
        let book = self.fetch_existing(id, "get_book").await?;
        tracing::info!(parent: &self.span, operation = "get_book", id, "fetched book");
        Ok(book)
    }

    async fn get_all_books(&self, page: i64, limit: i64) -> AppResult<Vec<Book>> {
        let request = PageRequest::new(page, limit);
        let books = self
            .store
            .fetch_page(request.offset(), request.limit)
            .await
            .map_err(|e| {
                tracing::error!(
                    parent: &self.span,
                    operation = "get_all_books",
                    page = request.page,
                    limit = request.limit,
                    error = %e,
                    "error fetching paginated books"
                );
                AppError::storage("fetch books", e)
            })?;

        tracing::info!(
            parent: &self.span,
            operation = "get_all_books",
            count = books.len(),
            page = request.page,
            limit = request.limit,
            "fetched paginated books"
        );
        Ok(books)
    }

    async fn update_book(&self, payload: Book) -> AppResult<Book> {
        let mut book = self.fetch_existing(payload.id, "update_book").await?;

        book.title = payload.title;
        book.author = payload.author;
        book.year = payload.year;

        self.store.save(&book).await.map_err(|e| {
            tracing::error!(parent: &self.span, operation = "update_book", id = book.id, error = %e, "error saving updated book");
            AppError::storage("save book", e)
        })?;

        tracing::info!(parent: &self.span, operation = "update_book", id = book.id, "updated book");
        Ok(book)
    }

    async fn delete_book(&self, id: i64) -> AppResult<Book> {
        let book = self.fetch_existing(id, "delete_book").await?;

        self.store.delete_by_id(id).await.map_err(|e| {
            tracing::error!(parent: &self.span, operation = "delete_book", id, error = %e, "error deleting book");
            AppError::storage("delete book", e)
        })?;

        tracing::info!(parent: &self.span, operation = "delete_book", id, "deleted book");
        Ok(book)
    }
}
