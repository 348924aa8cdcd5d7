//! Business logic services

pub mod books;

use std::sync::Arc;

use crate::repository::BookStore;

pub use books::{BookService, CatalogService};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: Arc<dyn BookService>,
}

impl Services {
    /// Create all services over the given record store
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        let span = tracing::info_span!("book_service");
        Self {
            books: Arc::new(CatalogService::new(store, span)),
        }
    }

    /// Wrap an already-built book service (used to swap in fakes)
    pub fn with_books(books: Arc<dyn BookService>) -> Self {
        Self { books }
    }
}
