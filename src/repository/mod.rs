//! Record store layer for book persistence

pub mod books;
pub mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::Book;

pub use books::SqliteBookStore;
pub use memory::InMemoryBookStore;

/// Failure reported by a record store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Durable storage for book records
///
/// Implementations only guarantee atomicity of each individual call.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new record and return its assigned id; `book.id` is ignored
    async fn insert(&self, book: &Book) -> StoreResult<i64>;

    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<Book>>;

    /// Records in insertion order, skipping `offset` and returning at most `limit`
    async fn fetch_page(&self, offset: i64, limit: i64) -> StoreResult<Vec<Book>>;

    /// Overwrite the mutable fields of the record identified by `book.id`
    async fn save(&self, book: &Book) -> StoreResult<()>;

    async fn delete_by_id(&self, id: i64) -> StoreResult<()>;
}
