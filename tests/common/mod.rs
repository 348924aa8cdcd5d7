//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::sync::Arc;

use books_api::{
    config::{AppConfig, DatabaseConfig},
    database,
    models::Book,
    repository::{BookStore, SqliteBookStore},
    services::{BookService, CatalogService},
};

pub fn book(title: &str, author: &str, year: i64) -> Book {
    Book {
        id: 0,
        title: title.to_string(),
        author: author.to_string(),
        year,
    }
}

pub fn seed_books() -> Vec<Book> {
    vec![
        book("Book One", "Author A", 2021),
        book("Book Two", "Author B", 2022),
        book("Book Three", "Author C", 2023),
    ]
}

/// Fresh in-memory SQLite store with the schema applied
pub async fn sqlite_store() -> Arc<dyn BookStore> {
    let config = DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        ..AppConfig::default().database
    };
    let pool = database::connect(&config)
        .await
        .expect("failed to open in-memory database");
    Arc::new(SqliteBookStore::new(pool))
}

pub fn service(store: Arc<dyn BookStore>) -> CatalogService {
    CatalogService::new(store, tracing::info_span!("test_book_service"))
}

/// Service over a fresh SQLite store seeded with Book One/Two/Three
pub async fn seeded_service() -> CatalogService {
    let service = service(sqlite_store().await);
    for book in seed_books() {
        service.create_book(book).await.expect("failed to seed book");
    }
    service
}
