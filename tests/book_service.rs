//! Book service behaviour over a real SQLite store

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use books_api::{
    config::DatabaseConfig,
    database::{self, DatabaseError},
    error::AppError,
    models::Book,
    repository::{BookStore, StoreError, StoreResult},
    services::BookService,
};

use common::{book, seeded_service, service, sqlite_store};

#[tokio::test]
async fn test_create_and_get_book() {
    let service = seeded_service().await;

    let created = service
        .create_book(book("Test Book", "Author", 2023))
        .await
        .unwrap();
    assert_eq!(created.id, 4);

    let fetched = service.get_book(created.id).await.unwrap();
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn test_create_ignores_input_id() {
    let service = seeded_service().await;

    let created = service
        .create_book(Book {
            id: 1,
            ..book("Shadow", "Someone", 1999)
        })
        .await
        .unwrap();
    assert_eq!(created.id, 4);
    assert_eq!(service.get_book(1).await.unwrap().title, "Book One");
}

#[tokio::test]
async fn test_get_existing_book() {
    let service = seeded_service().await;

    let fetched = service.get_book(2).await.unwrap();
    assert_eq!(fetched.id, 2);
    assert_eq!(fetched.title, "Book Two");
    assert_eq!(fetched.author, "Author B");
    assert_eq!(fetched.year, 2022);
}

#[tokio::test]
async fn test_missing_ids_are_not_found() {
    let service = seeded_service().await;

    assert!(matches!(service.get_book(99).await, Err(AppError::BookNotFound(99))));
    assert!(matches!(
        service
            .update_book(Book {
                id: 99,
                ..book("New Title", "Author", 2022)
            })
            .await,
        Err(AppError::BookNotFound(99))
    ));
    assert!(matches!(service.delete_book(99).await, Err(AppError::BookNotFound(99))));
}

#[tokio::test]
async fn test_list_all_books() {
    let service = seeded_service().await;

    let books = service.get_all_books(1, 10).await.unwrap();
    let titles: Vec<_> = books.iter().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["Book One", "Book Two", "Book Three"]);
}

#[tokio::test]
async fn test_list_clamps_out_of_range_values() {
    let service = seeded_service().await;

    assert_eq!(service.get_all_books(0, 0).await.unwrap().len(), 3);
    assert_eq!(service.get_all_books(-5, 1000).await.unwrap().len(), 3);
    assert_eq!(service.get_all_books(-5, 2).await.unwrap()[0].title, "Book One");
}

#[tokio::test]
async fn test_list_past_end_is_empty() {
    let service = seeded_service().await;

    assert!(service.get_all_books(3, 2).await.unwrap().is_empty());
    assert!(service.get_all_books(1000, 100).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_pages_concatenate_to_full_listing() {
    let service = service(sqlite_store().await);
    for i in 0..23 {
        service
            .create_book(book(&format!("Title {i}"), "Author", 1900 + i))
            .await
            .unwrap();
    }

    let everything = service.get_all_books(1, 100).await.unwrap();
    assert_eq!(everything.len(), 23);

    for limit in [1, 4, 10, 23, 50] {
        let mut collected = Vec::new();
        let mut page = 1;
        loop {
            let chunk = service.get_all_books(page, limit).await.unwrap();
            if chunk.is_empty() {
                break;
            }
            collected.extend(chunk);
            page += 1;
        }
        assert_eq!(collected, everything, "limit {limit}");
    }
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_id() {
    let service = seeded_service().await;

    let updated = service
        .update_book(Book {
            id: 1,
            ..book("Updated Book One", "Updated Author A", 2030)
        })
        .await
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.title, "Updated Book One");

    let fetched = service.get_book(1).await.unwrap();
    assert_eq!(fetched, updated);
    assert_eq!(service.get_book(2).await.unwrap().title, "Book Two");
}

#[tokio::test]
async fn test_delete_returns_snapshot_and_is_not_idempotent() {
    let service = seeded_service().await;

    let created = service
        .create_book(book("To be deleted", "Author", 2021))
        .await
        .unwrap();

    let deleted = service.delete_book(created.id).await.unwrap();
    assert_eq!(deleted, created);

    assert!(matches!(service.get_book(created.id).await, Err(AppError::BookNotFound(_))));
    assert!(matches!(service.delete_book(created.id).await, Err(AppError::BookNotFound(_))));
}

#[tokio::test]
async fn test_ids_are_not_reused_after_delete() {
    let service = seeded_service().await;

    service.delete_book(3).await.unwrap();
    let created = service.create_book(book("Book Four", "Author D", 2024)).await.unwrap();
    assert_eq!(created.id, 4);
}

#[tokio::test]
async fn test_connect_requires_url() {
    let config = DatabaseConfig {
        url: String::new(),
        max_connections: 1,
    };
    assert!(matches!(database::connect(&config).await, Err(DatabaseError::MissingUrl)));
}

#[tokio::test]
async fn test_connect_creates_database_file() {
    let path = std::env::temp_dir().join(format!("books_api_test_{}.db", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let config = DatabaseConfig {
        url: format!("sqlite://{}", path.display()),
        max_connections: 2,
    };
    let pool = database::connect(&config).await.unwrap();
    pool.close().await;

    assert!(path.exists());
    let _ = std::fs::remove_file(&path);
}

/// Store whose writes always fail; reads fail too unless `readable`
struct BrokenStore {
    readable: bool,
}

impl BrokenStore {
    fn failure() -> StoreError {
        StoreError::Backend("disk I/O error".to_string())
    }
}

#[async_trait]
impl BookStore for BrokenStore {
    async fn insert(&self, _book: &Book) -> StoreResult<i64> {
        Err(Self::failure())
    }

    async fn fetch_by_id(&self, id: i64) -> StoreResult<Option<Book>> {
        if self.readable {
            Ok(Some(Book { id, ..book("Stored", "Author", 2000) }))
        } else {
            Err(Self::failure())
        }
    }

    async fn fetch_page(&self, _offset: i64, _limit: i64) -> StoreResult<Vec<Book>> {
        Err(Self::failure())
    }

    async fn save(&self, _book: &Book) -> StoreResult<()> {
        Err(Self::failure())
    }

    async fn delete_by_id(&self, _id: i64) -> StoreResult<()> {
        Err(Self::failure())
    }
}

fn storage_operation<T: std::fmt::Debug>(result: Result<T, AppError>) -> &'static str {
    match result {
        Err(AppError::Storage { operation, source: StoreError::Backend(msg) }) => {
            assert_eq!(msg, "disk I/O error");
            operation
        }
        other => panic!("expected storage error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_store_failures_surface_as_storage_errors() {
    let service = service(Arc::new(BrokenStore { readable: false }));

    assert_eq!(
        storage_operation(service.create_book(book("Book Four", "Author D", 2024)).await),
        "create book"
    );
    assert_eq!(storage_operation(service.get_book(1).await), "fetch book");
    assert_eq!(storage_operation(service.get_all_books(1, 10).await), "fetch books");
    assert_eq!(
        storage_operation(service.update_book(Book { id: 1, ..book("T", "A", 1) }).await),
        "fetch book"
    );
    assert_eq!(storage_operation(service.delete_book(1).await), "fetch book");
}

#[tokio::test]
async fn test_write_failures_after_successful_fetch() {
    let service = service(Arc::new(BrokenStore { readable: true }));

    assert_eq!(
        storage_operation(service.update_book(Book { id: 1, ..book("T", "A", 1) }).await),
        "save book"
    );
    assert_eq!(storage_operation(service.delete_book(1).await), "delete book");
}

#[tokio::test]
async fn test_year_beyond_32_bits_round_trips() {
    let service = seeded_service().await;

    let year = i64::from(i32::MAX) + 1_000;
    let created = service.create_book(book("Far Future", "Author", year)).await.unwrap();
    assert_eq!(service.get_book(created.id).await.unwrap().year, year);

    let updated = service
        .update_book(Book { id: created.id, ..book("Far Past", "Author", -year) })
        .await
        .unwrap();
    assert_eq!(service.get_book(updated.id).await.unwrap().year, -year);
}
